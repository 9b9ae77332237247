//! Data structures and constants for Baike lookups

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Path of the search endpoint, relative to the base URL
pub const SEARCH_PATH: &str = "/search";

/// Query parameter carrying the keyword
pub const SEARCH_QUERY_PARAM: &str = "word";

/// Site-relative entry links start with this prefix
pub const ITEM_PATH_PREFIX: &str = "/item/";

/// Site name appended to result titles ("Rust_百度百科")
pub const SITE_NAME: &str = "百度百科";

/// Appended to summaries cut at the length limit
pub const ELLIPSIS: &str = "...";

/// CSS selector for entries in the search result list
pub const RESULT_ENTRY_SELECTOR: &str = ".search-list dd";

/// CSS selector for a result's title (text)
pub const RESULT_TITLE_SELECTOR: &str = ".result-title";

/// CSS selector for a result's title link (href)
pub const RESULT_LINK_SELECTOR: &str = "a.result-title";

/// CSS selector for a result's short description
pub const RESULT_SUMMARY_SELECTOR: &str = ".result-summary";

/// Markers shown when nothing matched: a "create this entry" prompt or a plain notice
pub const NO_RESULT_SELECTOR: &str = ".create-entrance, .no-result";

/// CSS selector for the entry's lead paragraph(s)
pub const SUMMARY_SELECTOR: &str = ".lemma-summary";

/// Citation markers ("[1]") inside the summary region
pub const CITATION_SELECTOR: &str = ".lemma-summary sup";

/// Entry heading
pub const HEADING_SELECTOR: &str = "h1";

/// Thumbnail image next to the summary
pub const THUMBNAIL_SELECTOR: &str = ".summary-pic img";

/// Notice panel (e.g. "this entry is a disambiguation page")
pub const TIP_SELECTOR: &str = ".view-tip-panel";

// =============================================================================
// Data Structures
// =============================================================================

/// One candidate from the search result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Zero-based position within the capped result list
    pub rank: usize,

    /// Entry title without the site branding
    pub title: String,

    /// Short description shown under the title
    pub description: String,
}

/// Structured content extracted from an entry page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub title: String,

    /// Absolute or site-provided image URL, if the entry has a picture
    pub thumbnail: Option<String>,

    /// Notice panel text, empty when the entry has none
    pub tip: String,

    /// Lead text, at most `max_summary_length` characters plus [`ELLIPSIS`]
    pub summary: String,

    /// Canonical URL the entry was fetched from
    pub link: String,
}

/// How a lookup ended, from the host's point of view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Entry found and rendered through the template
    Rendered(String),

    /// Localized notice (no result, bad index, fetch failure, usage)
    Message(String),

    /// User did not pick a candidate in time; nothing should be sent
    Abandoned,
}

impl LookupOutcome {
    /// Text to send back to the user, if any
    #[must_use]
    pub fn into_reply(self) -> Option<String> {
        match self {
            LookupOutcome::Rendered(text) | LookupOutcome::Message(text) => Some(text),
            LookupOutcome::Abandoned => None,
        }
    }

    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        matches!(self, LookupOutcome::Abandoned)
    }
}
