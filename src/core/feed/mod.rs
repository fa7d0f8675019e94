pub mod fetcher;
pub mod parser;
pub mod types;

use fetcher::{fetch_feed, FetchError};
use parser::{parse_feed_str, FeedParseError};
use types::JobEntry;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] FeedParseError),
}

#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    url: String,
}

impl FeedClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch_entries(&self) -> Result<Vec<JobEntry>, FeedError> {
        let body = fetch_feed(&self.client, &self.url).await?;
        Ok(parse_feed_str(&body)?)
    }
}
