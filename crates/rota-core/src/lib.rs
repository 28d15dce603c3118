//! rota-core — schedule-table parsing for rota.
//!
//! Turns the line-oriented text an OCR engine produces for a photographed
//! weekly work schedule into a [`Schedule`]: banner metadata, the week's
//! dates, and each employee's shift per weekday.
//!
//! # Architecture
//!
//! ```text
//! OCR text ──► parser (LineClassifier + ParserState) ──► Schedule
//!                  │
//!                  └──► normalizer (dates, shifts)
//! ```
//!
//! Parsing is synchronous and holds no state between calls, so a single
//! [`ScheduleParser`] can be shared freely across threads.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use parser::{parse_schedule, ParserSettings, ScheduleParser};
pub use types::{Days, Metadata, Schedule, ShiftRecord, Week, Weekday};
