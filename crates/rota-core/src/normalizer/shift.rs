//! Shift-token normalizer.
//!
//! A shift cell is one of: blank, a single-token marker (off, guaranteed
//! hours), a keyword shift (open/close duty), or one or more time ranges.
//! Time ranges are rewritten into the canonical `"9-5 & 6-10"` form; text
//! that yields no time range is kept upper-cased rather than thrown away.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::MarkersConfig;

/// Separators between several shifts written into one cell.
static SHIFT_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",|/|\s+AND\s+").expect("shift separator regex must compile"));

/// `H`, `H:MM`, `H-H`, `H:MM-H:MM` with one or two digit hours.
static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,2}(?::\d{2})?(?:-\d{1,2}(?::\d{2})?)?")
        .expect("time range regex must compile")
});

/// Joins multiple time ranges found in one cell.
pub const RANGE_JOINER: &str = " & ";

/// Shift normalizer bound to a set of markers. Markers are upper-cased once
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftNormalizer {
    off: String,
    guaranteed_hours: String,
    keywords: Vec<String>,
}

impl Default for ShiftNormalizer {
    fn default() -> Self {
        Self::new(&MarkersConfig::default())
    }
}

impl ShiftNormalizer {
    pub fn new(markers: &MarkersConfig) -> Self {
        Self {
            off: markers.off.trim().to_uppercase(),
            guaranteed_hours: markers.guaranteed_hours.trim().to_uppercase(),
            keywords: markers
                .keywords
                .iter()
                .map(|k| k.trim().to_uppercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Rewrite one raw cell into canonical form.
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let upper = trimmed.to_uppercase();
        if self.is_marker(&upper) || self.is_keyword_shift(&upper) {
            return upper;
        }

        let ranges: Vec<&str> = SHIFT_SEPARATOR
            .split(&upper)
            .flat_map(|part| TIME_RANGE.find_iter(part).map(|m| m.as_str()))
            .collect();

        if ranges.is_empty() {
            tracing::trace!(raw, "no time range in shift cell; keeping text");
            return upper;
        }
        ranges.join(RANGE_JOINER)
    }

    /// Exact match against the off or guaranteed-hours marker.
    pub fn is_marker(&self, upper: &str) -> bool {
        upper == self.off || upper == self.guaranteed_hours
    }

    /// Exact match against the off marker.
    pub fn is_off(&self, upper: &str) -> bool {
        upper == self.off
    }

    /// Cell mentions an open/close duty anywhere.
    pub fn is_keyword_shift(&self, upper: &str) -> bool {
        self.keywords.iter().any(|k| upper.contains(k.as_str()))
    }

    /// Token is exactly a keyword (not merely containing one).
    pub fn is_exact_keyword(&self, upper: &str) -> bool {
        self.keywords.iter().any(|k| upper == k)
    }
}

/// Normalize with the default markers.
pub fn normalize_shift(raw: &str) -> String {
    static DEFAULT: LazyLock<ShiftNormalizer> = LazyLock::new(ShiftNormalizer::default);
    DEFAULT.normalize(raw)
}
