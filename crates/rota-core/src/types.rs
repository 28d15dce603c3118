//! Core types for rota-core.
//!
//! This module defines the result shape handed back by the parser: the
//! top-level [`Schedule`], its [`Metadata`] and [`Week`]s, and the
//! [`Days`] row that carries one value per [`Weekday`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the seven fixed table columns, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Column order of the schedule table. Token `i` of a positional row
    /// belongs to `Weekday::ALL[i]`.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Zero-based column index.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per weekday. Serializes as a map with exactly the seven
/// lowercase weekday keys, always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Days<T> {
    pub monday: T,
    pub tuesday: T,
    pub wednesday: T,
    pub thursday: T,
    pub friday: T,
    pub saturday: T,
    pub sunday: T,
}

impl<T> Days<T> {
    /// Build a row by calling `f` once per weekday, in column order.
    pub fn from_fn(mut f: impl FnMut(Weekday) -> T) -> Self {
        Self {
            monday: f(Weekday::Monday),
            tuesday: f(Weekday::Tuesday),
            wednesday: f(Weekday::Wednesday),
            thursday: f(Weekday::Thursday),
            friday: f(Weekday::Friday),
            saturday: f(Weekday::Saturday),
            sunday: f(Weekday::Sunday),
        }
    }

    /// Iterate `(weekday, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &T)> {
        Weekday::ALL.into_iter().map(move |day| (day, &self[day]))
    }
}

impl Days<String> {
    /// Positional column inference: token `i` maps to `Weekday::ALL[i]`
    /// through `normalize`. Tokens beyond the seventh are ignored; missing
    /// trailing columns are left empty without calling `normalize`.
    pub fn from_columns<S: AsRef<str>>(tokens: &[S], normalize: impl Fn(&str) -> String) -> Self {
        Self::from_fn(|day| {
            tokens
                .get(day.index())
                .map(|token| normalize(token.as_ref()))
                .unwrap_or_default()
        })
    }

    /// True when no weekday has a value yet.
    pub fn is_blank(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }
}

impl<T> std::ops::Index<Weekday> for Days<T> {
    type Output = T;

    fn index(&self, day: Weekday) -> &T {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }
}

impl<T> std::ops::IndexMut<Weekday> for Days<T> {
    fn index_mut(&mut self, day: Weekday) -> &mut T {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }
}

/// Canonical shift strings for one employee, keyed by weekday.
/// An empty string means the cell has not been seen.
pub type ShiftRecord = Days<String>;

/// Header and footer text collected around the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Banner line with any `Updated MM/DD` fragment removed.
    pub title: String,
    /// Raw `MM/DD` fragment from the banner, or empty.
    pub updated: String,
    /// Note lines in sheet order, trimmed.
    pub notes: Vec<String>,
}

/// One table: the date header and every employee's row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub dates: Days<String>,
    /// Keyed by display name. Ordered so serialized output is stable.
    pub employees: BTreeMap<String, ShiftRecord>,
}

/// Parser output for one OCR text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub metadata: Metadata,
    /// Empty when no date-header row was recognised.
    pub weeks: Vec<Week>,
}

impl Schedule {
    /// Total employee rows across all weeks.
    pub fn employee_count(&self) -> usize {
        self.weeks.iter().map(|week| week.employees.len()).sum()
    }
}
