//! Schedule-table parser — walks OCR text line by line into a [`Schedule`].
//!
//! Each line is classified by [`LineClassifier`] and applied to a
//! [`ParserState`] owned by the call:
//!
//! ```text
//! text ──► lines ──► LineKind ──┬─► Title / Note      ──► metadata
//!                               ├─► DateHeader         ──► week.dates (normalize_date)
//!                               ├─► Employee           ──► new blank record
//!                               ├─► ShiftRow           ──► record overwrite (ShiftNormalizer)
//!                               └─► Blank / Ignored / Unclassified (dropped)
//! ```

pub mod classify;
pub mod state;

pub use classify::{classify_line, LineClassifier, LineKind};
pub use state::ParserState;

use crate::config::{Config, MarkersConfig};
use crate::error::ParseError;
use crate::types::Schedule;

/// What the parser needs from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserSettings {
    pub markers: MarkersConfig,
    pub multi_week: bool,
}

impl From<&Config> for ParserSettings {
    fn from(config: &Config) -> Self {
        Self {
            markers: config.markers.clone(),
            multi_week: config.parser.multi_week,
        }
    }
}

/// Immutable, shareable parser. All per-text state lives in the
/// [`ParserState`] created inside [`parse`](Self::parse).
#[derive(Debug, Clone, Default)]
pub struct ScheduleParser {
    classifier: LineClassifier,
    multi_week: bool,
}

impl ScheduleParser {
    pub fn new(settings: &ParserSettings) -> Self {
        Self {
            classifier: LineClassifier::new(&settings.markers),
            multi_week: settings.multi_week,
        }
    }

    pub fn parse(&self, text: &str) -> Result<Schedule, ParseError> {
        let mut state = ParserState::new(self.multi_week);

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let kind = self.classifier.classify(line, state.has_current_person());
            if kind != LineKind::Blank {
                tracing::debug!(line = line_no, %kind, text = line.trim(), "classified");
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            match kind {
                LineKind::Title => {
                    let (title, updated) = classify::split_title(line);
                    state.set_title(title, updated);
                }
                LineKind::Note => state.push_note(line),
                LineKind::DateHeader => state.start_dates(&tokens),
                LineKind::Employee => state.start_employee(classify::employee_name(&tokens)),
                LineKind::ShiftRow => {
                    state.apply_shift_row(line_no, &tokens, self.classifier.shifts())?
                }
                LineKind::Blank | LineKind::Ignored | LineKind::Unclassified => {}
            }
        }

        let schedule = state.finish();
        tracing::info!(
            weeks = schedule.weeks.len(),
            employees = schedule.employee_count(),
            "schedule parsed"
        );
        Ok(schedule)
    }
}

/// Parse with the default markers and single-week behaviour.
pub fn parse_schedule(text: &str) -> Result<Schedule, ParseError> {
    ScheduleParser::default().parse(text)
}
