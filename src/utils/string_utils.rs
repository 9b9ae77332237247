//! UTF-8-safe string truncation
//!
//! Entry summaries are mostly CJK text, where byte offsets and character
//! counts diverge. Everything here counts Unicode scalar values.

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Never splits a multi-byte character and never panics.
///
/// # Examples
/// ```
/// # use kodegen_tools_baike::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
///
/// // CJK characters are 3 bytes each in UTF-8
/// assert_eq!(safe_truncate_chars("百度百科词条", 4), "百度百科");
///
/// // String shorter than max_chars
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Truncate `s` to `max_chars` characters and append `marker` if anything was cut.
///
/// The cut is a hard character count, not word-aware. The result is at most
/// `max_chars + marker.chars().count()` characters long.
#[must_use]
pub fn truncate_with_marker(s: &str, max_chars: usize, marker: &str) -> String {
    let truncated = safe_truncate_chars(s, max_chars);
    if truncated.len() == s.len() {
        s.to_string()
    } else {
        let mut out = String::with_capacity(truncated.len() + marker.len());
        out.push_str(truncated);
        out.push_str(marker);
        out
    }
}
