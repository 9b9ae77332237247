//! Test utilities and helper functions for the Baike lookup test suite

use kodegen_tools_baike::{Session, SessionError};
use mockito::{Matcher, Mock, ServerGuard};
use std::collections::VecDeque;
use std::time::Duration;

/// One result list entry: (href, title, description)
pub type Entry<'a> = (Option<&'a str>, &'a str, &'a str);

/// Creates a search results page with the given entries
#[allow(dead_code)]
pub fn search_page_html(entries: &[Entry<'_>]) -> String {
    let items: String = entries
        .iter()
        .map(|&(href, title, desc)| {
            let href = href
                .map(|h| format!(r#" href="{}""#, html_escape::encode_double_quoted_attribute(h)))
                .unwrap_or_default();
            format!(
                r#"<dd><a class="result-title"{href}>{}</a><p class="result-summary">{}</p></dd>"#,
                html_escape::encode_text(title),
                html_escape::encode_text(desc)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head><meta charset="UTF-8"><title>百度百科_搜索</title></head>
<body>
    <div class="search-list"><dl>{items}</dl></div>
</body>
</html>"#
    )
}

/// Creates a search page announcing that nothing matched
#[allow(dead_code)]
pub fn no_result_page_html() -> String {
    r#"<!DOCTYPE html>
<html>
<body>
    <div class="no-result">抱歉，百度百科尚未收录该词条</div>
    <div class="create-entrance"><a href="/create">我来创建</a></div>
</body>
</html>"#
        .to_string()
}

/// Creates an entry page
#[allow(dead_code)]
pub fn entry_page_html(
    title: &str,
    summary_html: &str,
    thumbnail: Option<&str>,
    tip: Option<&str>,
) -> String {
    let thumbnail = thumbnail
        .map(|src| {
            format!(
                r#"<div class="summary-pic"><img src="{}"/></div>"#,
                html_escape::encode_double_quoted_attribute(src)
            )
        })
        .unwrap_or_default();
    let tip = tip
        .map(|t| format!(r#"<div class="view-tip-panel">{}</div>"#, html_escape::encode_text(t)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<body>
    <h1>{}</h1>
    {tip}
    {thumbnail}
    <div class="lemma-summary">{summary_html}</div>
</body>
</html>"#,
        html_escape::encode_text(title)
    )
}

/// Mocks the search endpoint for `keyword`
#[allow(dead_code)]
pub async fn mock_search(server: &mut ServerGuard, keyword: &str, html: &str) -> Mock {
    server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("word".into(), keyword.into()))
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Mocks an HTML page at `path`, expecting exactly `hits` requests
#[allow(dead_code)]
pub async fn mock_page(server: &mut ServerGuard, path: &str, html: &str, hits: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .expect(hits)
        .create_async()
        .await
}

/// Mocks an error status at `path`
#[allow(dead_code)]
pub async fn mock_error(server: &mut ServerGuard, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Session that replays canned replies and records everything sent
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedSession {
    replies: VecDeque<Option<String>>,
    pub sent: Vec<String>,
    pub prompts: Vec<Duration>,
}

#[allow(dead_code)]
impl ScriptedSession {
    /// Session whose single prompt gets `reply` (`None` simulates a timeout)
    pub fn replying(reply: Option<&str>) -> Self {
        Self {
            replies: VecDeque::from([reply.map(str::to_string)]),
            ..Self::default()
        }
    }

    /// Session that must never be prompted
    pub fn silent() -> Self {
        Self::default()
    }
}

impl Session for ScriptedSession {
    async fn send(&mut self, text: &str) -> Result<(), SessionError> {
        self.sent.push(text.to_string());
        Ok(())
    }

    async fn prompt(&mut self, timeout: Duration) -> Option<String> {
        self.prompts.push(timeout);
        self.replies.pop_front().flatten()
    }
}
