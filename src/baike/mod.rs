//! Baidu Baike lookup
//!
//! Searches Baike for a keyword, lets the user pick among ambiguous matches,
//! and renders the chosen entry's summary through a configurable template.
//!
//! The pieces are usable on their own: [`extract_results`] and
//! [`resolve_link`] read search pages, [`extract_content`] reads entry pages,
//! [`render`] formats records. [`BaikeLookup`] wires them to a fetcher, a
//! localizer and the user's session.

mod content;
mod lookup;
mod render;
mod results;
mod types;

pub use content::extract_content;
pub use lookup::{BaikeLookup, Choice, build_search_url, parse_choice};
pub use render::{render, thumbnail_marker};
pub use results::{extract_results, has_no_result_marker, resolve_link, result_count, strip_branding};
pub use types::{
    ELLIPSIS, EntryRecord, ITEM_PATH_PREFIX, LookupOutcome, ResultSummary, SEARCH_PATH,
    SEARCH_QUERY_PARAM, SITE_NAME,
};
