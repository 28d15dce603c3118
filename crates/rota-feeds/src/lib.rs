//! rota-feeds — raw OCR text sources for rota.
//!
//! Each feed produces the full text of one scanned schedule, ready to be
//! handed to [`rota_core::parse_schedule`]. The OCR engine itself is an
//! external program; [`tesseract::TesseractFeed`] only drives it.

pub mod file;
pub mod stdin;
pub mod tesseract;

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub use file::FileFeed;
pub use stdin::StdinFeed;
pub use tesseract::TesseractFeed;

/// Trait implemented by each text source.
pub trait TextFeed: Send + Sync {
    /// Human-readable origin, reported alongside the parsed schedule.
    fn label(&self) -> String;

    /// Read the whole text. Invalid UTF-8 is replaced, not rejected.
    fn read_text(&self) -> impl Future<Output = Result<String, FeedError>> + Send;
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start OCR engine {binary:?}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("OCR engine exited with {status}: {stderr}")]
    OcrFailed { status: String, stderr: String },

    #[error("OCR engine did not finish within {0:?}")]
    Timeout(Duration),
}

/// Decode feed bytes, replacing invalid UTF-8.
pub(crate) fn decode(bytes: Vec<u8>, origin: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(origin, "feed produced invalid UTF-8; replacing bad bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}
