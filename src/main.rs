// Command-line host for Baike lookups
//
// Usage: kodegen-baike <keyword...>
// Candidate choices are read from stdin; the result is printed to stdout.
// Logs go to stderr, filtered by RUST_LOG (default: warn).

use anyhow::{Context, Result};
use kodegen_tools_baike::{BaikeLookup, BuiltinLocalizer, HttpFetcher, LookupConfig, TerminalSession};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let config = LookupConfig::load_default().context("Failed to load lookup configuration")?;
    let fetcher = HttpFetcher::new(&config).context("Failed to create HTTP fetcher")?;
    let localizer = BuiltinLocalizer::new(config.locale());
    let lookup = BaikeLookup::new(fetcher, localizer, config);

    let mut session = TerminalSession::new();
    let outcome = lookup.lookup(&query, &mut session).await;
    if outcome.is_abandoned() {
        tracing::info!("No candidate chosen, nothing to print");
    }
    if let Some(reply) = outcome.into_reply() {
        println!("{reply}");
    }

    Ok(())
}
