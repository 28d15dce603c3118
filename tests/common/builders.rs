//! Test builders — ergonomic constructors for expected rows.
//!
//! These are for readability in assertions, not for production use.

use rota_core::config::Config;
use rota_core::{Days, ParserSettings, ScheduleParser, ShiftRecord};

/// Build a row from seven literal cells, monday first.
pub fn row(cells: [&str; 7]) -> ShiftRecord {
    ShiftRecord::from_columns(&cells, |cell| cell.to_string())
}

/// Expected date row for seven consecutive days of January starting at `first`.
pub fn january_from(first: u32) -> Days<String> {
    Days::from_fn(|day| format!("01/{:02}", first + day.index() as u32))
}

/// A parser with multi-week mode switched on.
pub fn multi_week_parser() -> ScheduleParser {
    let mut config = Config::defaults();
    config.parser.multi_week = true;
    ScheduleParser::new(&ParserSettings::from(&config))
}
