//! Normalizers — clean raw OCR fragments into canonical cell values.
//!
//! Both normalizers are total: any input produces a string, and input they
//! cannot interpret is passed through rather than rejected.

pub mod date;
pub mod shift;

pub use date::normalize_date;
pub use shift::{normalize_shift, ShiftNormalizer, RANGE_JOINER};
