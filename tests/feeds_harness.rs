#![allow(unused)]
//! Feed-to-report integration harness.
//!
//! # What this covers
//!
//! - **File feed**: OCR text saved to disk parses into a full report.
//! - **Tesseract feed**: a fake OCR engine (a shell script in a temp dir)
//!   stands in for the real binary; its stdout becomes the report's raw text.
//! - **Failures**: a failing engine surfaces as a feed error, never as a
//!   partially parsed schedule.
//!
//! # What this does NOT cover
//!
//! - Recognition quality of a real OCR engine
//!
//! # Running
//!
//! ```sh
//! cargo test --test feeds_harness
//! ```

mod common;
use common::*;
use rota::{scan, ErrorDocument, ScheduleParser};
use rota_core::config::OcrConfig;
use rota_feeds::{FileFeed, TesseractFeed, TextFeed};
use std::path::Path;

#[cfg(unix)]
fn fake_engine(dir: &Path, body: &str) -> OcrConfig {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("tesseract");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    OcrConfig {
        binary: path.display().to_string(),
        ..OcrConfig::default()
    }
}

// ---------------------------------------------------------------------------
// File feed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn file_feed_produces_full_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.txt");
    std::fs::write(&path, SHEET_BASIC).unwrap();

    let report = scan(&FileFeed::new(&path), &ScheduleParser::default(), true)
        .await
        .unwrap();

    assert_eq!(report.source, path.display().to_string());
    assert_eq!(report.raw_text.as_deref(), Some(SHEET_BASIC));
    assert_shifts!(
        report.schedule,
        0,
        "JOHN DOE",
        row(["9-5", "OFF", "9-5", "9-5", "OFF", "10-3", "OFF"])
    );
}

#[tokio::test]
async fn missing_file_is_a_feed_error() {
    let dir = tempfile::tempdir().unwrap();
    let feed = FileFeed::new(dir.path().join("absent.txt"));

    let err = scan(&feed, &ScheduleParser::default(), true).await.unwrap_err();
    let doc = ErrorDocument::from_error(&err);
    assert_eq!(doc.kind, "feed");
    assert!(doc.error.contains("absent.txt"));
}

// ---------------------------------------------------------------------------
// Tesseract feed
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[tokio::test]
async fn tesseract_output_is_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = dir.path().join("sheet.txt");
    std::fs::write(&sheet, SHEET_NOISY).unwrap();
    let config = fake_engine(dir.path(), &format!("cat '{}'", sheet.display()));

    let feed = TesseractFeed::new(dir.path().join("photo.jpg"), &config);
    let report = scan(&feed, &ScheduleParser::default(), false).await.unwrap();

    assert!(report.raw_text.is_none());
    assert!(report.source.ends_with("photo.jpg"));
    assert_eq!(report.schedule.metadata.notes, vec!["Deli hours: 8am-6pm"]);
    assert_eq!(report.schedule.employee_count(), 3);
}

#[cfg(unix)]
#[tokio::test]
async fn failing_engine_yields_no_schedule() {
    let dir = tempfile::tempdir().unwrap();
    let config = fake_engine(dir.path(), "echo 'Error in pixReadStream' >&2\nexit 1");

    let feed = TesseractFeed::new(dir.path().join("photo.jpg"), &config);
    let err = scan(&feed, &ScheduleParser::default(), true).await.unwrap_err();

    let doc = ErrorDocument::from_error(&err);
    assert!(!doc.is_parse());
    assert!(doc.error.contains("pixReadStream"));
}
