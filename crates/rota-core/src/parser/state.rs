//! Running state of one parse call.

use crate::error::ParseError;
use crate::normalizer::{normalize_date, ShiftNormalizer};
use crate::types::{Days, Metadata, Schedule, ShiftRecord, Week};

/// Everything the classifier accumulates while walking the lines. Created
/// fresh by every [`ScheduleParser::parse`](super::ScheduleParser::parse)
/// call and consumed by [`ParserState::finish`].
#[derive(Debug, Default)]
pub struct ParserState {
    metadata: Metadata,
    weeks: Vec<Week>,
    current_week: Week,
    current_person: Option<String>,
    dates_found: bool,
    multi_week: bool,
}

impl ParserState {
    pub fn new(multi_week: bool) -> Self {
        Self {
            multi_week,
            ..Self::default()
        }
    }

    pub fn has_current_person(&self) -> bool {
        self.current_person.is_some()
    }

    pub fn set_title(&mut self, title: String, updated: Option<String>) {
        self.metadata.title = title;
        if let Some(updated) = updated {
            self.metadata.updated = updated;
        }
    }

    pub fn push_note(&mut self, line: &str) {
        self.metadata.notes.push(line.trim().to_string());
    }

    /// Install a date header. In multi-week mode a header after the first
    /// closes the week under construction and opens a new one.
    pub fn start_dates(&mut self, tokens: &[&str]) {
        if self.multi_week && self.dates_found {
            let finished = std::mem::take(&mut self.current_week);
            tracing::debug!(employees = finished.employees.len(), "week finished");
            self.weeks.push(finished);
            self.current_person = None;
        }
        self.current_week.dates = Days::<String>::from_columns(tokens, normalize_date);
        self.dates_found = true;
    }

    /// Make `name` the current person, creating a blank record if new.
    pub fn start_employee(&mut self, name: String) {
        self.current_week
            .employees
            .entry(name.clone())
            .or_insert_with(ShiftRecord::default);
        self.current_person = Some(name);
    }

    /// Overwrite the current person's week with the first seven tokens.
    pub fn apply_shift_row(
        &mut self,
        line: usize,
        tokens: &[&str],
        shifts: &ShiftNormalizer,
    ) -> Result<(), ParseError> {
        if tokens.len() < 7 {
            return Err(ParseError::ShortShiftRow {
                line,
                found: tokens.len(),
            });
        }
        let Some(name) = self.current_person.as_deref() else {
            return Err(ParseError::MissingEmployee {
                line,
                name: String::new(),
            });
        };
        let record = self
            .current_week
            .employees
            .get_mut(name)
            .ok_or_else(|| ParseError::MissingEmployee {
                line,
                name: name.to_string(),
            })?;
        *record = ShiftRecord::from_columns(&tokens[..7], |cell| shifts.normalize(cell));
        Ok(())
    }

    /// The week under construction is kept only if a date header was seen.
    pub fn finish(mut self) -> Schedule {
        if self.dates_found {
            self.weeks.push(self.current_week);
        }
        Schedule {
            metadata: self.metadata,
            weeks: self.weeks,
        }
    }
}
