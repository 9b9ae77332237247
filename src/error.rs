//! Error types for the lookup pipeline
//!
//! Every variant here is caught at the orchestrator boundary and turned into
//! a localized message (or silence); none of them reach the user verbatim.

use std::time::Duration;
use thiserror::Error;

/// Failure to retrieve a page from the content source
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request could not be sent or the body could not be read
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Body exceeded the configured page size limit
    #[error("Response from {url} exceeded size limit of {limit} bytes")]
    TooLarge { url: String, limit: usize },

    /// Body was not valid UTF-8
    #[error("Response from {url} is not valid UTF-8")]
    InvalidEncoding { url: String },

    /// Source could not be reached for any other reason
    #[error("Could not reach {url}: {reason}")]
    Unreachable { url: String, reason: String },
}

/// Failure to talk to the user's session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Other side of the channel has gone away
    #[error("Session channel closed")]
    Closed,

    /// Terminal I/O failed
    #[error("Session I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything that can end a lookup early
#[derive(Debug, Error)]
pub enum LookupError {
    /// Query was blank after trimming
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// Search page or entry page could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Search page reports that no entry matches
    #[error("No article exists for '{keyword}'")]
    NoResult { keyword: String },

    /// Chosen candidate has no usable link
    #[error("Search result at rank {rank} has no resolvable link")]
    UnresolvedLink { rank: usize },

    /// Disambiguation reply was not a valid candidate number
    #[error("Invalid result index: {reply:?}")]
    InvalidChoice { reply: String },

    /// No reply (or an empty one) arrived in time
    #[error("No reply received within {0:?}")]
    Timeout(Duration),

    /// Candidate list could not be delivered
    #[error(transparent)]
    Channel(#[from] SessionError),
}

impl LookupError {
    /// Check if this is an operational failure rather than a normal terminal state
    ///
    /// Failures are logged at warn level and reported with the search link.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            LookupError::Fetch(_) | LookupError::UnresolvedLink { .. } | LookupError::Channel(_)
        )
    }
}
