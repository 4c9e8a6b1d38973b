use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::FeedConfig;
use crate::domain::AnnouncementFeed;
use crate::error::Result;

pub mod file;
pub mod http;

pub use file::FileDataSource;
pub use http::HttpDataSource;

/// Supplies the raw announcements document.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn name(&self) -> &str;
    async fn load(&self) -> Result<AnnouncementFeed>;
}

/// Picks the HTTP source for `http://` / `https://` locations and the file
/// source for everything else.
pub fn from_config(config: &FeedConfig) -> Result<Arc<dyn DataSource>> {
    let source = config.source.trim();
    if source.starts_with("http://") || source.starts_with("https://") {
        let http = HttpDataSource::new(
            source,
            Duration::from_secs(config.request_timeout_secs),
            config.cache_bust,
        )?;
        Ok(Arc::new(http))
    } else {
        Ok(Arc::new(FileDataSource::new(source)))
    }
}
