//! Core configuration type for Baike lookups
//!
//! `LookupConfig` is immutable once built. It is either assembled with
//! [`LookupConfig::builder`] or deserialized from JSON; both paths go through
//! [`LookupConfig::validate`].

use serde::{Deserialize, Serialize};

use crate::locales::Locale;
use crate::utils::{
    DEFAULT_BASE_URL, DEFAULT_FORMAT, DEFAULT_MAX_PAGE_SIZE_BYTES, DEFAULT_MAX_RESULT_COUNT,
    DEFAULT_MAX_SUMMARY_LENGTH, DEFAULT_REPLY_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Main configuration struct for lookups
///
/// Missing keys in a JSON file fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Most candidates offered when a search is ambiguous
    ///
    /// Default: 3
    pub(crate) max_result_count: usize,

    /// Summary length in characters before it is cut and suffixed with "..."
    ///
    /// Default: 200
    pub(crate) max_summary_length: usize,

    /// Output template with `{{title}}`, `{{thumbnail}}`, `{{tips}}`,
    /// `{{summary}}` and `{{link}}` placeholders
    pub(crate) format: String,

    /// Origin of the content source; search URL and `/item/` links hang off it
    ///
    /// Default: `https://baike.baidu.com`
    pub(crate) base_url: String,

    /// How long to wait for the user to pick a candidate
    ///
    /// Default: 30 seconds
    pub(crate) reply_timeout_secs: u64,

    /// Timeout for each HTTP request
    ///
    /// Default: 30 seconds
    pub(crate) request_timeout_secs: u64,

    /// Largest page body accepted from the content source
    ///
    /// Default: 5 MB
    pub(crate) max_page_size_bytes: usize,

    /// Language of user-visible messages
    ///
    /// Default: `zh`
    pub(crate) locale: Locale,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            max_result_count: DEFAULT_MAX_RESULT_COUNT,
            max_summary_length: DEFAULT_MAX_SUMMARY_LENGTH,
            format: DEFAULT_FORMAT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            reply_timeout_secs: DEFAULT_REPLY_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_page_size_bytes: DEFAULT_MAX_PAGE_SIZE_BYTES,
            locale: Locale::default(),
        }
    }
}
