//! Stdin feed — OCR text piped in by another tool.

use tokio::io::AsyncReadExt;

use crate::{decode, FeedError, TextFeed};

#[derive(Debug, Clone, Copy, Default)]
pub struct StdinFeed;

impl TextFeed for StdinFeed {
    fn label(&self) -> String {
        "stdin".to_string()
    }

    async fn read_text(&self) -> Result<String, FeedError> {
        let mut bytes = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut bytes)
            .await
            .map_err(|source| FeedError::Io {
                path: "<stdin>".into(),
                source,
            })?;
        tracing::debug!(bytes = bytes.len(), "stdin feed read");
        Ok(decode(bytes, "stdin"))
    }
}
