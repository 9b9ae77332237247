//! Shared configuration constants for the Baike lookup
//!
//! Default values used by `LookupConfig` and the transport layer, kept in one
//! place so the builder, serde defaults and the CLI agree.

/// Default number of candidates offered when a search is ambiguous
pub const DEFAULT_MAX_RESULT_COUNT: usize = 3;

/// Default summary length in characters before truncation kicks in
pub const DEFAULT_MAX_SUMMARY_LENGTH: usize = 200;

/// Default output template
///
/// Each field sits on its own line; empty fields leave newline runs behind,
/// which the renderer collapses.
pub const DEFAULT_FORMAT: &str =
    "{{ thumbnail }}\n{{ title }}\n{{ tips }}\n{{ summary }}\n来自：{{ link }}";

/// Origin that site-relative entry links are resolved against
pub const DEFAULT_BASE_URL: &str = "https://baike.baidu.com";

/// How long to wait for the user to pick a candidate (seconds)
pub const DEFAULT_REPLY_TIMEOUT_SECS: u64 = 30;

/// Per-request HTTP timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Upper bound on a fetched page body: 5 MB
///
/// Baike entry pages are typically 200-800 KB; search pages are smaller.
pub const DEFAULT_MAX_PAGE_SIZE_BYTES: usize = 5 * 1024 * 1024;

/// Chrome user agent string sent with every request
///
/// Baike serves a stripped-down page (or a verification wall) to clients
/// without a browser-like user agent.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
