//! Static OCR text corpora used across harnesses.
//!
//! Each sheet is what the OCR engine returns for one photographed schedule,
//! noise included. Expected results live next to the tests that use them.

/// The minimal sheet: banner, dates, one employee.
pub const SHEET_BASIC: &str = "\
PARADISE SCHEDULE Updated 1/5
1/6 1/7 1/8 1/9 1/10 1/11 1/12
JOHN DOE
9-5 OFF 9-5 9-5 OFF 10-3 OFF
";

/// A realistic scan: punctuation stuck to dates, a section heading, a time
/// range glued to a name, split and keyword cells, a short row OCR lost
/// half of, a deli notice and a footer with a year.
pub const SHEET_NOISY: &str = "\
PARADISE SCHEDULE Updated 1/5

(1/6 1/7. 1/8 |1/9 1/10 1/11 1/12)
CASHIERS
JOHN DOE
9-5 OFF 9-5 9-5 OFF 10-3 OFF
JANE SMITH 3-11
OFF close 9:30-2,4-8 GH OFF open 9-5
MARIA
9-5 9-5
Deli hours: 8am-6pm
Printed 1/4/2025
";

/// Employees and shifts but no date header.
pub const SHEET_NO_HEADER: &str = "\
PARADISE SCHEDULE
JOHN DOE
9-5 OFF 9-5 9-5 OFF 10-3 OFF
";

/// Two tables one after the other.
pub const SHEET_TWO_WEEKS: &str = "\
SCHEDULE
1/6 1/7 1/8 1/9 1/10 1/11 1/12
JOHN DOE
9-5 OFF 9-5 9-5 OFF 10-3 OFF
1/13 1/14 1/15 1/16 1/17 1/18 1/19
JOHN DOE
OFF OFF 9-5 9-5 9-5 OFF OFF
";

/// A header that OCR cut short after Thursday.
pub const SHEET_SHORT_HEADER: &str = "\
1/6 1/7 1/8 1/9
JOHN DOE
9-5 OFF 9-5 9-5 OFF 10-3 OFF
";

/// All corpora, for tests that only check structural invariants.
pub const ALL_SHEETS: &[&str] = &[
    SHEET_BASIC,
    SHEET_NOISY,
    SHEET_NO_HEADER,
    SHEET_TWO_WEEKS,
    SHEET_SHORT_HEADER,
];
