//! Lookup orchestration
//!
//! Drives one lookup from query to rendered entry:
//!
//! ```text
//! Searching ─┬─ NoResult                       → "article does not exist"
//!            ├─ SingleResult ─────────────┐
//!            └─ MultiResult (await reply) ┼─ Timeout / empty reply → silence
//!                                         ├─ bad index → "incorrect index"
//!                                         └─ Fetching ─┬─ Done → rendered entry
//!                                                      └─ Failed → "error with link"
//! ```
//!
//! Failures are addressed to the search URL, since the entry URL may not be
//! known (or may be the thing that is broken).

use tracing::{debug, info, warn};
use url::form_urlencoded;

use super::content::extract_content;
use super::render::render;
use super::results::{extract_results, has_no_result_marker, resolve_link, result_count};
use super::types::{LookupOutcome, ResultSummary, SEARCH_PATH, SEARCH_QUERY_PARAM};
use crate::config::LookupConfig;
use crate::document::DocumentTree;
use crate::error::LookupError;
use crate::locales::{Localizer, MessageKey};
use crate::session::Session;
use crate::transport::PageFetcher;

/// Result of reading the user's disambiguation reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Valid zero-based rank
    Rank(usize),
    /// No reply, or an empty one
    Abandoned,
    /// Anything else, kept for logging
    Invalid(String),
}

/// Interpret a reply to a list of `count` numbered candidates
///
/// Valid replies are integers in `1..=count`, optionally surrounded by
/// whitespace. Only a missing or zero-length reply counts as abandonment; a
/// whitespace-only reply is invalid.
#[must_use]
pub fn parse_choice(reply: Option<&str>, count: usize) -> Choice {
    let reply = match reply {
        None | Some("") => return Choice::Abandoned,
        Some(reply) => reply,
    };

    match reply.trim().parse::<usize>() {
        Ok(number) if (1..=count).contains(&number) => Choice::Rank(number - 1),
        _ => Choice::Invalid(reply.to_string()),
    }
}

/// Search URL for `keyword` under `base_url`
#[must_use]
pub fn build_search_url(base_url: &str, keyword: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(keyword.as_bytes()).collect();
    format!(
        "{}{SEARCH_PATH}?{SEARCH_QUERY_PARAM}={encoded}",
        base_url.trim_end_matches('/')
    )
}

/// What the search page yielded, pulled out of the (non-`Send`) tree
struct Candidates {
    results: Vec<ResultSummary>,
    /// Entry link per rank; always at least one slot so rank 0 can be tried
    links: Vec<Option<String>>,
}

fn read_search_page(markup: &str, limit: usize, base_url: &str) -> Option<Candidates> {
    let page = DocumentTree::parse(markup);
    if has_no_result_marker(&page) {
        return None;
    }

    let results = extract_results(&page, limit);
    debug!(
        available = result_count(&page),
        offered = results.len(),
        "Parsed search results"
    );
    let links = (0..results.len().max(1))
        .map(|rank| resolve_link(&page, rank as i64, base_url))
        .collect();

    Some(Candidates { results, links })
}

/// Baike lookup with injected transport and localization
///
/// Holds no per-lookup state; one instance can serve concurrent lookups.
pub struct BaikeLookup<F, L> {
    fetcher: F,
    localizer: L,
    config: LookupConfig,
}

impl<F: PageFetcher, L: Localizer> BaikeLookup<F, L> {
    #[must_use]
    pub fn new(fetcher: F, localizer: L, config: LookupConfig) -> Self {
        Self {
            fetcher,
            localizer,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Look up `query` and produce what should be sent back to the user
    ///
    /// Never fails: every error ends as a localized message or, when the user
    /// walked away from the candidate list, as [`LookupOutcome::Abandoned`].
    pub async fn lookup<S: Session>(&self, query: &str, session: &mut S) -> LookupOutcome {
        let keyword = query.trim();
        if keyword.is_empty() {
            return self.outcome_for(LookupError::EmptyQuery, keyword, "");
        }

        let search_url = build_search_url(self.config.base_url(), keyword);
        info!(keyword, search_url = %search_url, "Starting Baike lookup");

        match self.run(keyword, &search_url, session).await {
            Ok(rendered) => {
                info!(keyword, "Baike lookup completed");
                LookupOutcome::Rendered(rendered)
            }
            Err(error) => {
                if error.is_failure() {
                    warn!(error = %error, search_url = %search_url, "Baike lookup failed");
                }
                self.outcome_for(error, keyword, &search_url)
            }
        }
    }

    async fn run<S: Session>(
        &self,
        keyword: &str,
        search_url: &str,
        session: &mut S,
    ) -> Result<String, LookupError> {
        let markup = self.fetcher.fetch(search_url).await?;

        let Candidates { results, links } = read_search_page(
            &markup,
            self.config.max_result_count(),
            self.config.base_url(),
        )
        .ok_or_else(|| LookupError::NoResult {
            keyword: keyword.to_string(),
        })?;

        let rank = if results.len() > 1 {
            self.disambiguate(keyword, &results, session).await?
        } else {
            0
        };

        let link = links
            .into_iter()
            .nth(rank)
            .flatten()
            .ok_or(LookupError::UnresolvedLink { rank })?;

        info!(rank, link = %link, "Fetching entry");
        let entry_markup = self.fetcher.fetch(&link).await?;

        let record = extract_content(
            DocumentTree::parse(&entry_markup),
            &link,
            self.config.max_summary_length(),
        );
        Ok(render(&record, self.config.format()))
    }

    async fn disambiguate<S: Session>(
        &self,
        keyword: &str,
        results: &[ResultSummary],
        session: &mut S,
    ) -> Result<usize, LookupError> {
        let count = results.len();
        session.send(&self.candidate_list(keyword, results)).await?;

        let timeout = self.config.reply_timeout();
        let reply = session.prompt(timeout).await;

        match parse_choice(reply.as_deref(), count) {
            Choice::Rank(rank) => {
                debug!(rank, "User picked a candidate");
                Ok(rank)
            }
            Choice::Abandoned => Err(LookupError::Timeout(timeout)),
            Choice::Invalid(reply) => Err(LookupError::InvalidChoice { reply }),
        }
    }

    /// Numbered candidate list framed by the header and the reply instructions
    fn candidate_list(&self, keyword: &str, results: &[ResultSummary]) -> String {
        let count = results.len().to_string();
        let mut lines = Vec::with_capacity(results.len() + 2);

        lines.push(self.localizer.text(MessageKey::HasMultiResult, &[keyword, count.as_str()]));
        for result in results {
            lines.push(format!(
                "{}. {}\n  {}",
                result.rank + 1,
                result.title,
                result.description
            ));
        }
        lines.push(self.localizer.text(MessageKey::AwaitChooseResult, &[count.as_str()]));

        lines.join("\n")
    }

    fn outcome_for(&self, error: LookupError, keyword: &str, search_url: &str) -> LookupOutcome {
        match error {
            LookupError::EmptyQuery => {
                LookupOutcome::Message(self.localizer.text(MessageKey::Usage, &[]))
            }
            LookupError::NoResult { .. } => {
                info!(keyword, "No Baike article for keyword");
                LookupOutcome::Message(self.localizer.text(MessageKey::ArticleNotExist, &[keyword]))
            }
            LookupError::InvalidChoice { reply } => {
                debug!(reply = %reply, "Rejected candidate index");
                LookupOutcome::Message(self.localizer.text(MessageKey::IncorrectIndex, &[]))
            }
            LookupError::Timeout(timeout) => {
                debug!(?timeout, keyword, "Lookup abandoned without a choice");
                LookupOutcome::Abandoned
            }
            LookupError::Fetch(_) | LookupError::UnresolvedLink { .. } | LookupError::Channel(_) => {
                LookupOutcome::Message(self.localizer.text(MessageKey::ErrorWithLink, &[search_url]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_valid() {
        assert_eq!(parse_choice(Some("1"), 3), Choice::Rank(0));
        assert_eq!(parse_choice(Some("3"), 3), Choice::Rank(2));
        assert_eq!(parse_choice(Some("  2 \n"), 3), Choice::Rank(1));
        assert_eq!(parse_choice(Some("+2"), 3), Choice::Rank(1));
    }

    #[test]
    fn test_parse_choice_abandoned() {
        assert_eq!(parse_choice(None, 3), Choice::Abandoned);
        assert_eq!(parse_choice(Some(""), 3), Choice::Abandoned);
    }

    #[test]
    fn test_parse_choice_invalid() {
        for reply in ["0", "4", "-1", "two", "1.5", "2.0", " ", "99999999999999999999"] {
            assert_eq!(
                parse_choice(Some(reply), 3),
                Choice::Invalid(reply.to_string()),
                "reply {reply:?}"
            );
        }
    }

    #[test]
    fn test_build_search_url_encodes_keyword() {
        assert_eq!(
            build_search_url("https://baike.baidu.com", "rust"),
            "https://baike.baidu.com/search?word=rust"
        );
        assert_eq!(
            build_search_url("https://baike.baidu.com/", "a b&c"),
            "https://baike.baidu.com/search?word=a+b%26c"
        );
        assert_eq!(
            build_search_url("https://baike.baidu.com", "百度"),
            "https://baike.baidu.com/search?word=%E7%99%BE%E5%BA%A6"
        );
    }

    #[test]
    fn test_read_search_page_always_has_rank_zero_slot() {
        let candidates = read_search_page("<html></html>", 3, "https://baike.baidu.com")
            .expect("no marker means candidates");
        assert!(candidates.results.is_empty());
        assert_eq!(candidates.links, vec![None]);
    }

    #[test]
    fn test_read_search_page_detects_no_result() {
        assert!(
            read_search_page(
                r#"<div class="no-result">无结果</div>"#,
                3,
                "https://baike.baidu.com"
            )
            .is_none()
        );
    }
}
