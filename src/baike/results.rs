//! Search result list parsing
//!
//! Reads the candidate list from a Baike search page: lightweight summaries
//! for disambiguation, and the entry link behind a given rank.

use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

use super::types::{
    ITEM_PATH_PREFIX, NO_RESULT_SELECTOR, RESULT_ENTRY_SELECTOR, RESULT_LINK_SELECTOR,
    RESULT_SUMMARY_SELECTOR, RESULT_TITLE_SELECTOR, ResultSummary, SITE_NAME,
};
use crate::document::{DocumentTree, attr_within, text_within};

// Hardcoded selectors should NEVER fail to parse - if they do, it's a compile-time bug.

static RESULT_ENTRY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(RESULT_ENTRY_SELECTOR)
        .expect("BUG: hardcoded CSS selector for result entries is invalid")
});

static RESULT_TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(RESULT_TITLE_SELECTOR)
        .expect("BUG: hardcoded CSS selector for result titles is invalid")
});

static RESULT_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(RESULT_LINK_SELECTOR)
        .expect("BUG: hardcoded CSS selector for result links is invalid")
});

static RESULT_SUMMARY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(RESULT_SUMMARY_SELECTOR)
        .expect("BUG: hardcoded CSS selector for result summaries is invalid")
});

static NO_RESULT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(NO_RESULT_SELECTOR)
        .expect("BUG: hardcoded CSS selector for no-result markers is invalid")
});

/// Optional `_`/`-` separator, the site name, trailing whitespace, end of title
static BRANDING_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[_\-]?\s*{}\s*$", regex::escape(SITE_NAME)))
        .expect("BRANDING_SUFFIX: hardcoded regex is valid")
});

/// Check whether the search page says nothing matched
#[must_use]
pub fn has_no_result_marker(page: &DocumentTree) -> bool {
    page.exists(&NO_RESULT)
}

/// Number of entries in the result list (uncapped)
#[must_use]
pub fn result_count(page: &DocumentTree) -> usize {
    page.select(&RESULT_ENTRY).count()
}

/// Extract up to `limit` result summaries in list order
///
/// Titles lose their site-branding suffix; titles and descriptions are trimmed.
/// A page without a result list yields an empty vector.
#[must_use]
pub fn extract_results(page: &DocumentTree, limit: usize) -> Vec<ResultSummary> {
    page.select(&RESULT_ENTRY)
        .take(limit)
        .enumerate()
        .map(|(rank, entry)| ResultSummary {
            rank,
            title: strip_branding(&text_within(entry, &RESULT_TITLE))
                .trim()
                .to_string(),
            description: text_within(entry, &RESULT_SUMMARY).trim().to_string(),
        })
        .collect()
}

/// Remove the site-branding suffix from a result title
///
/// Only one suffix is removed: the entry for the site itself,
/// `"百度百科_百度百科"`, keeps its name.
#[must_use]
pub fn strip_branding(title: &str) -> String {
    BRANDING_SUFFIX.replace(title, "").into_owned()
}

/// Resolve the entry URL behind the `rank`-th result (zero-based)
///
/// Negative ranks are treated as 0. Returns `None` when the list is empty, the
/// rank is past the end, or the title link has no (or an empty) href.
/// Site-relative `/item/...` links are joined to `base_url`; any other href is
/// returned as-is.
#[must_use]
pub fn resolve_link(page: &DocumentTree, rank: i64, base_url: &str) -> Option<String> {
    let rank = if rank < 0 {
        0
    } else {
        usize::try_from(rank).unwrap_or(usize::MAX)
    };

    let entry = page.select(&RESULT_ENTRY).nth(rank)?;
    let href = attr_within(entry, &RESULT_LINK, "href")?;
    if href.is_empty() {
        return None;
    }

    if href.starts_with(ITEM_PATH_PREFIX) {
        Some(format!("{}{}", base_url.trim_end_matches('/'), href))
    } else {
        Some(href.to_string())
    }
}
