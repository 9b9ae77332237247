//! Validation and loading for `LookupConfig`

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

use super::types::LookupConfig;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "KODEGEN_BAIKE_CONFIG";

impl LookupConfig {
    /// Check the invariants every consumer relies on
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        if self.max_result_count == 0 {
            bail!("max_result_count must be a positive integer");
        }
        if self.max_summary_length == 0 {
            bail!("max_summary_length must be a positive integer");
        }
        if self.format.trim().is_empty() {
            bail!("format must not be empty");
        }
        if self.reply_timeout_secs == 0 {
            bail!("reply_timeout_secs must be a positive integer");
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be a positive integer");
        }
        if self.max_page_size_bytes == 0 {
            bail!("max_page_size_bytes must be a positive integer");
        }

        let base = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid base_url '{}'", self.base_url))?;
        if !matches!(base.scheme(), "http" | "https") {
            bail!("base_url must use http or https, got '{}'", base.scheme());
        }

        Ok(())
    }

    /// Parse and validate a JSON document; missing keys take their defaults
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or a failed validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LookupConfig =
            serde_json::from_str(json).context("Failed to parse lookup config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load the configuration the CLI runs with
    ///
    /// Resolution order:
    /// 1. File named by `KODEGEN_BAIKE_CONFIG` (must exist)
    /// 2. `<config_dir>/kodegen/baike.json`, if present
    /// 3. Built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a selected file cannot be loaded.
    pub fn load_default() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path);
            info!("Loading lookup config from {} ({})", path.display(), CONFIG_PATH_ENV);
            return Self::from_json_file(&path);
        }

        if let Some(path) = default_config_path()
            && path.is_file()
        {
            info!("Loading lookup config from {}", path.display());
            return Self::from_json_file(&path);
        }

        debug!("No lookup config file found, using defaults");
        Ok(Self::default())
    }
}

/// `<config_dir>/kodegen/baike.json`, when the platform has a config directory
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kodegen").join("baike.json"))
}
