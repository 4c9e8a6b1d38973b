use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;

use crate::{
    data_source::DataSource,
    domain::AnnouncementFeed,
    error::{AppError, Result},
};

/// Fetches the feed with one GET per load.
pub struct HttpDataSource {
    client: Client,
    url: String,
    cache_bust: bool,
}

impl HttpDataSource {
    pub fn new(url: impl Into<String>, timeout: Duration, cache_bust: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            cache_bust,
        })
    }

    /// Appends `cache_bust=<unix millis>` so intermediaries never serve a
    /// stale document.
    fn request_url(&self) -> String {
        if !self.cache_bust {
            return self.url.clone();
        }
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}cache_bust={}", self.url, separator, Utc::now().timestamp_millis())
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn load(&self) -> Result<AnnouncementFeed> {
        let url = self.request_url();
        tracing::debug!("Fetching announcements from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let feed: AnnouncementFeed = serde_json::from_str(&body)?;

        tracing::info!("Fetched {} announcements from {}", feed.len(), self.url);
        Ok(feed)
    }
}
