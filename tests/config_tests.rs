//! Tests for lookup configuration: defaults, builder validation and JSON loading

use kodegen_tools_baike::Locale;
use kodegen_tools_baike::config::LookupConfig;
use kodegen_tools_baike::utils::DEFAULT_FORMAT;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_builder_defaults() {
    let config = LookupConfig::builder().build().unwrap();

    assert_eq!(config, LookupConfig::default());
    assert_eq!(config.max_result_count(), 3);
    assert_eq!(config.max_summary_length(), 200);
    assert_eq!(config.format(), DEFAULT_FORMAT);
    assert_eq!(config.base_url(), "https://baike.baidu.com");
    assert_eq!(config.reply_timeout(), Duration::from_secs(30));
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.max_page_size_bytes(), 5 * 1024 * 1024);
    assert_eq!(config.locale(), Locale::Zh);
}

#[test]
fn test_builder_overrides() {
    let config = LookupConfig::builder()
        .max_result_count(5)
        .max_summary_length(80)
        .format("{{title}}: {{summary}}")
        .base_url("http://localhost:8080")
        .reply_timeout_secs(10)
        .request_timeout_secs(3)
        .max_page_size_bytes(1024)
        .locale(Locale::En)
        .build()
        .unwrap();

    assert_eq!(config.max_result_count(), 5);
    assert_eq!(config.max_summary_length(), 80);
    assert_eq!(config.format(), "{{title}}: {{summary}}");
    assert_eq!(config.base_url(), "http://localhost:8080");
    assert_eq!(config.reply_timeout(), Duration::from_secs(10));
    assert_eq!(config.request_timeout(), Duration::from_secs(3));
    assert_eq!(config.max_page_size_bytes(), 1024);
    assert_eq!(config.locale(), Locale::En);
}

#[test]
fn test_builder_rejects_zero_values() {
    let cases = [
        ("max_result_count", LookupConfig::builder().max_result_count(0).build()),
        ("max_summary_length", LookupConfig::builder().max_summary_length(0).build()),
        ("reply_timeout_secs", LookupConfig::builder().reply_timeout_secs(0).build()),
        ("request_timeout_secs", LookupConfig::builder().request_timeout_secs(0).build()),
        ("max_page_size_bytes", LookupConfig::builder().max_page_size_bytes(0).build()),
    ];

    for (field, result) in cases {
        let error = result.expect_err(field);
        assert!(error.to_string().contains(field), "{field}: {error}");
    }
}

#[test]
fn test_builder_rejects_blank_format() {
    let error = LookupConfig::builder().format("  \n").build().unwrap_err();
    assert!(error.to_string().contains("format"));
}

#[test]
fn test_builder_rejects_bad_base_url() {
    assert!(LookupConfig::builder().base_url("not a url").build().is_err());

    let error = LookupConfig::builder()
        .base_url("ftp://baike.baidu.com")
        .build()
        .unwrap_err();
    assert!(error.to_string().contains("http"));
}

#[test]
fn test_json_missing_keys_take_defaults() {
    let config = LookupConfig::from_json_str(r#"{"max_result_count": 5, "locale": "en"}"#).unwrap();

    assert_eq!(config.max_result_count(), 5);
    assert_eq!(config.locale(), Locale::En);
    assert_eq!(config.max_summary_length(), 200);
    assert_eq!(config.format(), DEFAULT_FORMAT);
}

#[test]
fn test_json_empty_object_is_default() {
    assert_eq!(LookupConfig::from_json_str("{}").unwrap(), LookupConfig::default());
}

#[test]
fn test_json_invalid_documents() {
    assert!(LookupConfig::from_json_str("not json").is_err());
    assert!(LookupConfig::from_json_str(r#"{"locale": "fr"}"#).is_err());
    assert!(LookupConfig::from_json_str(r#"{"max_result_count": -1}"#).is_err());
    assert!(LookupConfig::from_json_str(r#"{"max_result_count": 0}"#).is_err());
}

#[test]
fn test_json_round_trip_preserves_config() {
    let config = LookupConfig::builder()
        .max_result_count(4)
        .locale(Locale::En)
        .build()
        .unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(LookupConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"max_summary_length": 50, "format": "{{{{title}}}}"}}"#).unwrap();

    let config = LookupConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.max_summary_length(), 50);
    assert_eq!(config.format(), "{{title}}");
}

#[test]
fn test_load_from_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let error = LookupConfig::from_json_file(&path).unwrap_err();
    assert!(format!("{error:#}").contains("absent.json"));
}

#[test]
fn test_load_from_invalid_file_names_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"max_result_count": 0}}"#).unwrap();

    let error = LookupConfig::from_json_file(file.path()).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("Invalid config file"));
    assert!(message.contains("max_result_count"));
}

// Only test in this binary that touches the process environment
#[test]
fn test_load_default_resolution_order() {
    use kodegen_tools_baike::config::methods::CONFIG_PATH_ENV;

    let mut explicit = NamedTempFile::new().unwrap();
    writeln!(explicit, r#"{{"max_result_count": 7}}"#).unwrap();

    // SAFETY: no other test in this binary reads these variables
    unsafe { std::env::set_var(CONFIG_PATH_ENV, explicit.path()) };
    assert_eq!(LookupConfig::load_default().unwrap().max_result_count(), 7);

    // An explicit path that does not exist is an error, not a fallback
    let dir = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var(CONFIG_PATH_ENV, dir.path().join("absent.json")) };
    assert!(LookupConfig::load_default().is_err());

    unsafe { std::env::remove_var(CONFIG_PATH_ENV) };

    #[cfg(target_os = "linux")]
    {
        let config_home = tempfile::tempdir().unwrap();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", config_home.path()) };

        // Nothing under the config dir yet: defaults
        assert_eq!(LookupConfig::load_default().unwrap(), LookupConfig::default());

        let app_dir = config_home.path().join("kodegen");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("baike.json"), r#"{"locale": "en"}"#).unwrap();
        assert_eq!(LookupConfig::load_default().unwrap().locale(), Locale::En);

        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
    }
}
