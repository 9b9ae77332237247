//! Conversation with the user who issued the lookup
//!
//! The lookup flow sends at most one message (the candidate list) and waits
//! for at most one reply. How the reply is awaited, and how the deadline is
//! enforced, belongs to the [`Session`] implementation.

use std::future::Future;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::SessionError;

/// Two-way channel to the user
pub trait Session: Send {
    /// Deliver a message to the user
    fn send(&mut self, text: &str) -> impl Future<Output = Result<(), SessionError>> + Send;

    /// Wait up to `timeout` for the user's next reply
    ///
    /// Returns `None` on timeout or when the user can no longer reply.
    fn prompt(&mut self, timeout: Duration) -> impl Future<Output = Option<String>> + Send;
}

/// Session over a pair of tokio channels
///
/// For hosts that route chat messages: outgoing text goes to `outbound`,
/// replies are read from `inbound`.
#[derive(Debug)]
pub struct ChannelSession {
    outbound: mpsc::Sender<String>,
    inbound: mpsc::Receiver<String>,
}

impl ChannelSession {
    #[must_use]
    pub fn new(outbound: mpsc::Sender<String>, inbound: mpsc::Receiver<String>) -> Self {
        Self { outbound, inbound }
    }
}

impl Session for ChannelSession {
    async fn send(&mut self, text: &str) -> Result<(), SessionError> {
        self.outbound
            .send(text.to_string())
            .await
            .map_err(|_| SessionError::Closed)
    }

    async fn prompt(&mut self, timeout: Duration) -> Option<String> {
        match tokio::time::timeout(timeout, self.inbound.recv()).await {
            Ok(reply) => reply,
            Err(_) => {
                debug!(?timeout, "No reply before deadline");
                None
            }
        }
    }
}

/// Session on the process's stdout and stdin
pub struct TerminalSession {
    lines: Lines<BufReader<Stdin>>,
}

impl TerminalSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for TerminalSession {
    async fn send(&mut self, text: &str) -> Result<(), SessionError> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(text.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        Ok(())
    }

    async fn prompt(&mut self, timeout: Duration) -> Option<String> {
        match tokio::time::timeout(timeout, self.lines.next_line()).await {
            Ok(Ok(line)) => line,
            Ok(Err(e)) => {
                debug!("Failed to read reply from stdin: {}", e);
                None
            }
            Err(_) => {
                debug!(?timeout, "No reply before deadline");
                None
            }
        }
    }
}
