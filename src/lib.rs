pub mod core;

use std::io::Write;

use tracing_subscriber::EnvFilter;

use crate::core::config::ConfigError;
use crate::core::feed::types::JobEntry;
use crate::core::feed::{FeedClient, FeedError};
use crate::core::storage::cache::{CacheError, CacheStore};

pub use crate::core::config::Config;

const LOG_ENV: &str = "ROK_LOG";
const DESCRIPTION_RULE: &str = "------------------------------------";

#[derive(Debug, thiserror::Error)]
pub enum RokError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn list_jobs<W: Write>(
    feed: &FeedClient,
    cache: &CacheStore,
    out: &mut W,
) -> Result<usize, RokError> {
    let entries = feed.fetch_entries().await?;
    tracing::info!(url = feed.url(), count = entries.len(), "fetched jobs");

    for entry in &entries {
        writeln!(out, "{}", entry.summary_line())?;
    }
    out.flush()?;
    cache.overwrite(&entries)?;
    Ok(entries.len())
}

pub fn describe_job<W: Write>(
    cache: &CacheStore,
    token: &str,
    out: &mut W,
) -> Result<JobEntry, RokError> {
    let entry = cache.lookup(guid_from_token(token))?;
    writeln!(out, "{} - {}", entry.title, entry.company)?;
    writeln!(out, "{DESCRIPTION_RULE}")?;
    writeln!(out, "{}", entry.description)?;
    out.flush()?;
    Ok(entry)
}

pub fn guid_from_token(token: &str) -> &str {
    token.split_once('.').map_or(token, |(guid, _)| guid)
}
