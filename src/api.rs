use std::time::Duration;

use log::{debug, info};
use url::Url;

/// Thin wrapper around [`reqwest::Client`] issuing the single page fetch.
///
/// The page is public, so no cookies, headers, or authentication are ever
/// attached. One request per run; failures terminate the run.
pub struct SiteClient {
    client: reqwest::Client,
}

impl SiteClient {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetches the event group-stage page and returns the raw markup.
    pub async fn fetch_group_stage(&self, url: &Url) -> anyhow::Result<String> {
        info!("Fetching {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
