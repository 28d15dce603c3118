//! rota — weekly schedule photos to structured JSON.
//!
//! This crate glues a text feed to the schedule parser and wraps the result
//! in the [`ScanReport`] envelope printed by the `rota` binary.
//!
//! # Architecture
//!
//! ```text
//! Feed (file / stdin / tesseract) ──► raw text ──► ScheduleParser ──► ScanReport
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use rota_core::{parse_schedule, ParseError, Schedule, ScheduleParser};
pub use rota_feeds::{FeedError, TextFeed};

/// What one scan produced: the parsed schedule plus where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    /// Feed label: file path, `stdin`, or the image that was OCR'd.
    pub source: String,
    pub scanned_at: DateTime<Utc>,
    /// OCR text as received. Omitted when the caller opts out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
    pub schedule: Schedule,
}

impl ScanReport {
    /// Parse `raw_text` and wrap it. A [`ParseError`] is returned untouched so
    /// callers can tell a classifier failure apart from feed failures.
    pub fn build(
        parser: &ScheduleParser,
        source: String,
        raw_text: String,
        include_raw: bool,
    ) -> Result<Self, ParseError> {
        let schedule = parser.parse(&raw_text)?;
        Ok(Self {
            source,
            scanned_at: Utc::now(),
            raw_text: include_raw.then_some(raw_text),
            schedule,
        })
    }
}

/// Read a feed and parse what it produced.
pub async fn scan<F: TextFeed>(
    feed: &F,
    parser: &ScheduleParser,
    include_raw: bool,
) -> anyhow::Result<ScanReport> {
    let raw_text = feed.read_text().await?;
    tracing::debug!(source = %feed.label(), chars = raw_text.len(), "feed text received");
    Ok(ScanReport::build(parser, feed.label(), raw_text, include_raw)?)
}

/// Error document printed in place of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDocument {
    pub error: String,
    pub kind: &'static str,
}

impl ErrorDocument {
    /// Classify an error from [`scan`]: `parse` for classifier failures,
    /// `feed` for everything else.
    pub fn from_error(err: &anyhow::Error) -> Self {
        let kind = if err.downcast_ref::<ParseError>().is_some() {
            "parse"
        } else {
            "feed"
        };
        Self {
            error: format!("{err:#}"),
            kind,
        }
    }

    pub fn is_parse(&self) -> bool {
        self.kind == "parse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_text_is_optional() {
        let parser = ScheduleParser::default();
        let with = ScanReport::build(&parser, "stdin".into(), "JOHN".into(), true).unwrap();
        let without = ScanReport::build(&parser, "stdin".into(), "JOHN".into(), false).unwrap();

        assert_eq!(with.raw_text.as_deref(), Some("JOHN"));
        let json = serde_json::to_value(&without).unwrap();
        assert!(json.get("raw_text").is_none());
        assert_eq!(json["source"], "stdin");
    }

    #[test]
    fn error_kind_follows_error_type() {
        let parse = anyhow::Error::from(ParseError::ShortShiftRow { line: 2, found: 3 });
        assert!(ErrorDocument::from_error(&parse).is_parse());

        let feed = anyhow::anyhow!("no such file");
        let doc = ErrorDocument::from_error(&feed);
        assert_eq!(doc.kind, "feed");
        assert_eq!(doc.error, "no such file");
    }
}
