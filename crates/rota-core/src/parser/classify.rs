//! Line classifier — decides what one OCR line is.
//!
//! Rules are tried in a fixed order and the first match wins. Banner and
//! note detection run before the date-header check because banners often
//! carry `d/d`-shaped fragments of their own.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::MarkersConfig;
use crate::normalizer::ShiftNormalizer;

/// A whole token that is a date: digits, slash, digits, with only OCR
/// punctuation around it. `9-1/5-9` is a split shift, not a date.
static DATE_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^0-9A-Za-z]*\d{1,2}/\d{1,2}[^0-9A-Za-z]*$").expect("date-like regex must compile")
});

/// A four-digit year anywhere in the line.
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("year regex must compile"));

/// `Updated 1/5`, `UPDATED: 12/31`.
static UPDATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bupdated\b\s*:?\s*(\d{1,2}/\d{1,2})").expect("updated regex must compile")
});

/// Small time range OCR glues onto a name, e.g. `3-11`.
static NAME_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}(?::\d{2})?-\d{1,2}(?::\d{2})?$").expect("name noise regex must compile")
});

/// Outcome of classifying one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Blank,
    Title,
    Note,
    DateHeader,
    /// Section heading or a line carrying a year; skipped.
    Ignored,
    Employee,
    ShiftRow,
    /// Matched no rule; dropped.
    Unclassified,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Blank => write!(f, "blank"),
            LineKind::Title => write!(f, "title"),
            LineKind::Note => write!(f, "note"),
            LineKind::DateHeader => write!(f, "date-header"),
            LineKind::Ignored => write!(f, "ignored"),
            LineKind::Employee => write!(f, "employee"),
            LineKind::ShiftRow => write!(f, "shift-row"),
            LineKind::Unclassified => write!(f, "unclassified"),
        }
    }
}

/// Marker-aware classifier. Marker literals are upper-cased once; empty
/// markers disable their rule.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    title: String,
    notes: Vec<String>,
    section_labels: Vec<String>,
    shifts: ShiftNormalizer,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(&MarkersConfig::default())
    }
}

impl LineClassifier {
    pub fn new(markers: &MarkersConfig) -> Self {
        Self {
            title: markers.title.trim().to_uppercase(),
            notes: upper_non_empty(&markers.notes),
            section_labels: upper_non_empty(&markers.section_labels),
            shifts: ShiftNormalizer::new(markers),
        }
    }

    /// Classify `line`. `has_current_person` tells whether a shift row can
    /// be attributed to someone.
    pub fn classify(&self, line: &str, has_current_person: bool) -> LineKind {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = tokens.first() else {
            return LineKind::Blank;
        };

        let upper = line.to_uppercase();
        if !self.title.is_empty() && upper.contains(&self.title) {
            return LineKind::Title;
        }
        if self.notes.iter().any(|n| contains_word(&upper, n)) {
            return LineKind::Note;
        }
        if is_date_header(&tokens) {
            return LineKind::DateHeader;
        }

        let first_upper = first.to_uppercase();
        if self.section_labels.contains(&first_upper) || YEAR.is_match(line) {
            return LineKind::Ignored;
        }
        if self.starts_with_name(first, &first_upper) {
            return LineKind::Employee;
        }
        if has_current_person && tokens.len() >= 7 {
            return LineKind::ShiftRow;
        }
        LineKind::Unclassified
    }

    /// The first token can open a name: not numeric once hyphens are
    /// dropped, no colon, and not a shift marker or bare keyword.
    fn starts_with_name(&self, first: &str, first_upper: &str) -> bool {
        !is_numeric_ignoring_hyphen(first)
            && !first.contains(':')
            && !self.shifts.is_marker(first_upper)
            && !self.shifts.is_exact_keyword(first_upper)
    }

    pub fn shifts(&self) -> &ShiftNormalizer {
        &self.shifts
    }
}

/// Classify with the default markers.
pub fn classify_line(line: &str, has_current_person: bool) -> LineKind {
    static DEFAULT: LazyLock<LineClassifier> = LazyLock::new(LineClassifier::default);
    DEFAULT.classify(line, has_current_person)
}

/// More than one token looks like `d/d`.
pub fn is_date_header(tokens: &[&str]) -> bool {
    tokens.iter().filter(|t| DATE_LIKE.is_match(t)).count() > 1
}

/// Banner text and optional `Updated MM/DD` fragment. The fragment is cut
/// out of the title and returned raw.
pub fn split_title(line: &str) -> (String, Option<String>) {
    match UPDATED.captures(line) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            let updated = caps.get(1).map(|m| m.as_str().to_string());
            let title = format!("{} {}", &line[..whole.start], &line[whole.end..]);
            (collapse_whitespace(&title), updated)
        }
        None => (collapse_whitespace(line), None),
    }
}

/// Employee name with stray time-range tokens dropped.
pub fn employee_name(tokens: &[&str]) -> String {
    tokens
        .iter()
        .filter(|t| !NAME_NOISE.is_match(t))
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// `needle` occurs in `haystack` with no letter or digit directly on
/// either side, so `DELI` matches `DELI:` but not `ADELINE`.
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

fn is_numeric_ignoring_hyphen(token: &str) -> bool {
    let mut digits = token.chars().filter(|c| *c != '-').peekable();
    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn upper_non_empty(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_uppercase())
        .filter(|v| !v.is_empty())
        .collect()
}
