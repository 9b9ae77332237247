//! Getter methods for `LookupConfig`

use std::time::Duration;

use super::types::LookupConfig;
use crate::locales::Locale;

impl LookupConfig {
    #[must_use]
    pub fn max_result_count(&self) -> usize {
        self.max_result_count
    }

    #[must_use]
    pub fn max_summary_length(&self) -> usize {
        self.max_summary_length
    }

    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn reply_timeout(&self) -> Duration {
        Duration::from_secs(self.reply_timeout_secs)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn max_page_size_bytes(&self) -> usize {
        self.max_page_size_bytes
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }
}
