//! The one error the schedule parser can return.
//!
//! Noisy OCR never produces a `ParseError`; malformed tokens are passed
//! through by the normalizers and unrecognised lines are dropped. A
//! `ParseError` means the classifier reached a state it should not be able
//! to reach, and the partially built [`Schedule`](crate::Schedule) is
//! discarded rather than returned.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A shift row was routed to an employee the current week does not hold.
    #[error("line {line}: shift row for {name:?} but no employee entry exists in the current week")]
    MissingEmployee { line: usize, name: String },

    /// A positional row was classified as a shift row without seven columns.
    #[error("line {line}: shift row has {found} columns, expected 7")]
    ShortShiftRow { line: usize, found: usize },
}

impl ParseError {
    /// 1-based line number of the offending OCR line.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingEmployee { line, .. } | ParseError::ShortShiftRow { line, .. } => {
                *line
            }
        }
    }
}
