//! Page retrieval
//!
//! [`PageFetcher`] is the seam between the lookup flow and the network. The
//! production implementation, [`HttpFetcher`], is a reqwest client with a
//! browser user agent, a per-request timeout and a streaming body size cap.

use futures::StreamExt;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::config::LookupConfig;
use crate::error::FetchError;
use crate::utils::constants::CHROME_USER_AGENT;

/// Fetches raw markup for a URL
pub trait PageFetcher: Send + Sync {
    /// Retrieve the page body as text
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// HTTP fetcher backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_page_size: usize,
}

impl HttpFetcher {
    /// Build a fetcher using the timeout and size limit from `config`
    pub fn new(config: &LookupConfig) -> Result<Self, FetchError> {
        Self::with_limits(config.request_timeout(), config.max_page_size_bytes())
    }

    pub fn with_limits(timeout: Duration, max_page_size: usize) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(CHROME_USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            client,
            max_page_size,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "Fetching page");

        let response = self
            .client
            .get(url)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header("Accept-Language", "zh-CN,zh;q=0.9,en;q=0.8")
            .send()
            .await
            .map_err(|source| {
                if source.is_connect() || source.is_timeout() {
                    FetchError::Unreachable {
                        url: url.to_string(),
                        reason: source.to_string(),
                    }
                } else {
                    FetchError::Request {
                        url: url.to_string(),
                        source,
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        // Enforce limit BEFORE downloading when the server announces the size
        let expected_size = response.content_length().unwrap_or(0);
        if expected_size > self.max_page_size as u64 {
            return Err(FetchError::TooLarge {
                url: url.to_string(),
                limit: self.max_page_size,
            });
        }

        let mut buffer = if expected_size > 0 {
            Vec::with_capacity(expected_size as usize)
        } else {
            Vec::new()
        };

        // Stream with size checking (second line of defense for chunked bodies)
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;
            if buffer.len() + chunk.len() > self.max_page_size {
                return Err(FetchError::TooLarge {
                    url: url.to_string(),
                    limit: self.max_page_size,
                });
            }
            buffer.extend_from_slice(&chunk);
        }

        debug!(url, bytes = buffer.len(), "Fetched page");

        String::from_utf8(buffer).map_err(|_| FetchError::InvalidEncoding {
            url: url.to_string(),
        })
    }
}
