#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
}

pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    tracing::debug!(%url, "fetching feed");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.text().await?;
    tracing::debug!(bytes = body.len(), "feed downloaded");

    Ok(body)
}
