//! Tesseract feed — runs the external OCR engine on a schedule photo.
//!
//! The engine is invoked as
//! `<binary> <image> stdout -l <lang> --psm <psm>` and its stdout is the
//! feed text. Binarization and other image cleanup are left to the engine.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use rota_core::config::OcrConfig;
use tokio::process::Command;

use crate::{decode, FeedError, TextFeed};

#[derive(Debug, Clone)]
pub struct TesseractFeed {
    image: PathBuf,
    binary: String,
    lang: String,
    psm: u8,
    timeout: Duration,
}

impl TesseractFeed {
    pub fn new(image: impl Into<PathBuf>, config: &OcrConfig) -> Self {
        Self {
            image: image.into(),
            binary: config.binary.clone(),
            lang: config.lang.clone(),
            psm: config.psm,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg(&self.image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.lang)
            .arg("--psm")
            .arg(self.psm.to_string())
            .stdin(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

impl TextFeed for TesseractFeed {
    fn label(&self) -> String {
        self.image.display().to_string()
    }

    async fn read_text(&self) -> Result<String, FeedError> {
        tracing::info!(image = %self.image.display(), binary = %self.binary, "running OCR");

        let output = tokio::time::timeout(self.timeout, self.command().output())
            .await
            .map_err(|_| {
                tracing::warn!(timeout = ?self.timeout, "OCR engine timed out");
                FeedError::Timeout(self.timeout)
            })?
            .map_err(|source| FeedError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(FeedError::OcrFailed {
                status: output.status.to_string(),
                stderr,
            });
        }
        if !stderr.is_empty() {
            tracing::warn!(%stderr, "OCR engine wrote to stderr");
        }

        Ok(decode(output.stdout, &self.label()))
    }
}
