//! File feed — OCR text previously saved to disk.

use std::path::PathBuf;

use crate::{decode, FeedError, TextFeed};

#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextFeed for FileFeed {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    async fn read_text(&self) -> Result<String, FeedError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FeedError::Io {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "file feed read");
        Ok(decode(bytes, &self.label()))
    }
}
