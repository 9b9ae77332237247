//! User-visible message lookup
//!
//! The orchestrator never formats user-facing text itself; it asks an
//! injected [`Localizer`] for a [`MessageKey`] with positional arguments.
//! [`BuiltinLocalizer`] serves the bundled `zh` and `en` tables and accepts
//! per-key overrides.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::warn;

static ZH_MESSAGES: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("zh.json")).expect("BUG: bundled zh locale is invalid JSON")
});

static EN_MESSAGES: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("en.json")).expect("BUG: bundled en locale is invalid JSON")
});

static POSITIONAL_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("POSITIONAL_ARG: hardcoded regex is valid"));

/// Messages the lookup flow can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// `{0}` = keyword
    ArticleNotExist,
    /// `{0}` = keyword, `{1}` = candidate count
    HasMultiResult,
    /// `{0}` = candidate count
    AwaitChooseResult,
    IncorrectIndex,
    /// `{0}` = search URL
    ErrorWithLink,
    Usage,
}

impl MessageKey {
    pub const ALL: [MessageKey; 6] = [
        MessageKey::ArticleNotExist,
        MessageKey::HasMultiResult,
        MessageKey::AwaitChooseResult,
        MessageKey::IncorrectIndex,
        MessageKey::ErrorWithLink,
        MessageKey::Usage,
    ];

    /// Key in the message tables
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::ArticleNotExist => "baike.article-not-exist",
            MessageKey::HasMultiResult => "baike.has-multi-result",
            MessageKey::AwaitChooseResult => "baike.await-choose-result",
            MessageKey::IncorrectIndex => "baike.incorrect-index",
            MessageKey::ErrorWithLink => "baike.error-with-link",
            MessageKey::Usage => "baike.usage",
        }
    }
}

/// Bundled message languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

/// Source of user-visible text
pub trait Localizer: Send + Sync {
    /// Message for `key` with `{0}`, `{1}`, ... replaced by `args`
    fn text(&self, key: MessageKey, args: &[&str]) -> String;
}

/// Localizer backed by the bundled message tables
#[derive(Debug, Clone)]
pub struct BuiltinLocalizer {
    locale: Locale,
    overrides: HashMap<MessageKey, String>,
}

impl BuiltinLocalizer {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            overrides: HashMap::new(),
        }
    }

    /// Replace one message template, keeping the rest of the table
    #[must_use]
    pub fn with_override(mut self, key: MessageKey, template: impl Into<String>) -> Self {
        self.overrides.insert(key, template.into());
        self
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn template(&self, key: MessageKey) -> Option<&str> {
        if let Some(template) = self.overrides.get(&key) {
            return Some(template.as_str());
        }
        let table = match self.locale {
            Locale::Zh => &*ZH_MESSAGES,
            Locale::En => &*EN_MESSAGES,
        };
        table.get(key.as_str()).map(String::as_str)
    }
}

impl Default for BuiltinLocalizer {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl Localizer for BuiltinLocalizer {
    fn text(&self, key: MessageKey, args: &[&str]) -> String {
        match self.template(key) {
            Some(template) => interpolate_positional(template, args),
            None => {
                warn!(key = key.as_str(), locale = ?self.locale, "Missing message template");
                key.as_str().to_string()
            }
        }
    }
}

/// Replace `{N}` with `args[N]`; out-of-range references are left as written
#[must_use]
pub fn interpolate_positional(template: &str, args: &[&str]) -> String {
    POSITIONAL_ARG
        .replace_all(template, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .map_or_else(|| caps[0].to_string(), |arg| (*arg).to_string())
        })
        .into_owned()
}
