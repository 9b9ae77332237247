//! Template rendering for entry records
//!
//! Placeholders are `{{name}}`, with optional whitespace inside the braces.
//! Known names: `title`, `thumbnail`, `tips`, `summary`, `link`. Unknown
//! placeholders are left in the output exactly as written. Substitution is a
//! single pass, so placeholder-like text inside a field value is never
//! expanded.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

use super::types::EntryRecord;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}")
        .expect("PLACEHOLDER: hardcoded regex is valid")
});

static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("NEWLINE_RUN: hardcoded regex is valid"));

/// Render `record` through `template`
///
/// Runs of newlines in the result are collapsed to one, so empty fields on
/// their own template line do not leave blank lines behind.
#[must_use]
pub fn render(record: &EntryRecord, template: &str) -> String {
    let substituted = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        field_value(record, &caps[1]).unwrap_or_else(|| Cow::Owned(caps[0].to_string()))
    });
    NEWLINE_RUN.replace_all(&substituted, "\n").into_owned()
}

/// Media marker the host channel turns into an inline image
#[must_use]
pub fn thumbnail_marker(src: &str) -> String {
    format!(
        "<img src=\"{}\"/>",
        html_escape::encode_double_quoted_attribute(src)
    )
}

fn field_value<'r>(record: &'r EntryRecord, name: &str) -> Option<Cow<'r, str>> {
    let value = match name {
        "title" => Cow::Borrowed(record.title.as_str()),
        "thumbnail" => record
            .thumbnail
            .as_deref()
            .map_or(Cow::Borrowed(""), |src| Cow::Owned(thumbnail_marker(src))),
        "tips" => Cow::Borrowed(record.tip.as_str()),
        "summary" => Cow::Borrowed(record.summary.as_str()),
        "link" => Cow::Borrowed(record.link.as_str()),
        _ => return None,
    };
    Some(value)
}
