//! Entry page extraction
//!
//! Turns a fetched Baike entry page into an [`EntryRecord`]. Missing regions
//! degrade to empty fields; extraction never fails.

use scraper::Selector;
use std::sync::LazyLock;
use tracing::debug;

use super::types::{
    CITATION_SELECTOR, ELLIPSIS, EntryRecord, HEADING_SELECTOR, SUMMARY_SELECTOR,
    THUMBNAIL_SELECTOR, TIP_SELECTOR,
};
use crate::document::DocumentTree;
use crate::utils::truncate_with_marker;

static SUMMARY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SUMMARY_SELECTOR).expect("BUG: hardcoded CSS selector for summary is invalid")
});

static CITATION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(CITATION_SELECTOR)
        .expect("BUG: hardcoded CSS selector for citations is invalid")
});

static HEADING: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(HEADING_SELECTOR).expect("BUG: hardcoded CSS selector 'h1' is invalid")
});

static THUMBNAIL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(THUMBNAIL_SELECTOR)
        .expect("BUG: hardcoded CSS selector for thumbnail is invalid")
});

static TIP: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(TIP_SELECTOR).expect("BUG: hardcoded CSS selector for tip panel is invalid")
});

/// Extract the structured record from an entry page
///
/// Takes the document by value: citation markers are detached from the tree
/// before the summary text is read, so the tree is not reusable afterwards.
///
/// # Arguments
/// * `entry` - Parsed entry page
/// * `link` - URL the page was fetched from; copied into the record verbatim
/// * `max_summary_length` - Summary cut-off in characters
#[must_use]
pub fn extract_content(mut entry: DocumentTree, link: &str, max_summary_length: usize) -> EntryRecord {
    let citations = entry.remove(&CITATION);

    let full_summary = entry.text(&SUMMARY);
    let summary = truncate_with_marker(full_summary.trim(), max_summary_length, ELLIPSIS);

    let title = entry.text(&HEADING).trim().to_string();
    let thumbnail = entry.attr(&THUMBNAIL, "src").filter(|src| !src.is_empty());
    let tip = entry.text(&TIP).trim().to_string();

    debug!(
        title = %title,
        citations_removed = citations,
        summary_chars = summary.chars().count(),
        has_thumbnail = thumbnail.is_some(),
        "Extracted entry content"
    );

    EntryRecord {
        title,
        thumbnail,
        tip,
        summary,
        link: link.to_string(),
    }
}
