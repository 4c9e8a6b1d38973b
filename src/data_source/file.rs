use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{
    data_source::DataSource,
    domain::AnnouncementFeed,
    error::{AppError, Result},
};

/// Reads the feed document from disk, the way the portal keeps
/// `static/data/data.json` and `static/data/archived_data.json`.
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the document back as indented JSON, replacing the file.
    pub async fn store(&self, feed: &AnnouncementFeed) -> Result<()> {
        let body = serde_json::to_string_pretty(feed)?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| AppError::Io(format!("{}: {}", self.path.display(), e)))?;

        tracing::info!("Wrote {} announcements to {}", feed.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn load(&self) -> Result<AnnouncementFeed> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::Io(format!("{}: {}", self.path.display(), e)))?;

        let feed: AnnouncementFeed = serde_json::from_str(&body)
            .map_err(|e| AppError::Parse(format!("{}: {}", self.path.display(), e)))?;

        tracing::info!("Loaded {} announcements from {}", feed.len(), self.path.display());
        Ok(feed)
    }
}
