//! Fluent builder for `LookupConfig`
//!
//! Every field has a default, so `LookupConfig::builder().build()` is valid.
//! `build()` runs the same validation as loading from a file.

use anyhow::Result;

use super::types::LookupConfig;
use crate::locales::Locale;

#[derive(Debug, Clone, Default)]
pub struct LookupConfigBuilder {
    config: LookupConfig,
}

impl LookupConfig {
    /// Create a builder for configuring a `LookupConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> LookupConfigBuilder {
        LookupConfigBuilder::default()
    }
}

impl LookupConfigBuilder {
    #[must_use]
    pub fn max_result_count(mut self, count: usize) -> Self {
        self.config.max_result_count = count;
        self
    }

    #[must_use]
    pub fn max_summary_length(mut self, length: usize) -> Self {
        self.config.max_summary_length = length;
        self
    }

    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.config.format = format.into();
        self
    }

    /// Point lookups at a different origin (mirrors, test servers)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    #[must_use]
    pub fn reply_timeout_secs(mut self, secs: u64) -> Self {
        self.config.reply_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn max_page_size_bytes(mut self, bytes: usize) -> Self {
        self.config.max_page_size_bytes = bytes;
        self
    }

    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    /// Validate and return the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any count, length, timeout or size is zero, the
    /// format is blank, or the base URL is not an http(s) URL.
    pub fn build(self) -> Result<LookupConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
