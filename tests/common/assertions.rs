//! Domain-specific assertion macros for rota harnesses.
//!
//! These wrap `pretty_assertions` and name the employee or week that broke,
//! so a failing sheet points straight at the offending row.

use rota_core::{Schedule, Weekday};

/// Assert one employee's row in a given week.
///
/// ```rust
/// assert_shifts!(schedule, 0, "JOHN DOE", row(["9-5", "OFF", ...]));
/// ```
#[macro_export]
macro_rules! assert_shifts {
    ($schedule:expr, $week:expr, $name:expr, $expected:expr) => {{
        let schedule: &rota_core::Schedule = &$schedule;
        let name: &str = $name;
        let week = schedule.weeks.get($week).unwrap_or_else(|| {
            panic!(
                "assert_shifts! failed: week {} missing ({} weeks parsed)",
                $week,
                schedule.weeks.len()
            )
        });
        match week.employees.get(name) {
            Some(actual) => pretty_assertions::assert_eq!(*actual, $expected, "row of {:?}", name),
            None => panic!(
                "assert_shifts! failed: no employee {:?} in week {}.\n  Known: {:?}",
                name,
                $week,
                week.employees.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that nothing was recognised as a date header.
#[macro_export]
macro_rules! assert_no_weeks {
    ($schedule:expr) => {{
        let schedule: &rota_core::Schedule = &$schedule;
        if !schedule.weeks.is_empty() {
            panic!(
                "assert_no_weeks! failed: {} week(s) parsed, first dates {:?}",
                schedule.weeks.len(),
                schedule.weeks[0].dates
            );
        }
    }};
}

/// Every date row and shift row carries exactly the seven weekday keys.
pub fn assert_seven_day_rows(schedule: &Schedule) {
    for (i, week) in schedule.weeks.iter().enumerate() {
        let json = serde_json::to_value(&week.dates).expect("dates serialize");
        assert_eq!(
            json.as_object().map(|o| o.len()),
            Some(7),
            "week {i} dates must have seven keys"
        );
        for (name, record) in &week.employees {
            let json = serde_json::to_value(record).expect("row serializes");
            let obj = json.as_object().expect("row is an object");
            for day in Weekday::ALL {
                assert!(
                    obj.contains_key(day.as_str()),
                    "week {i} row {name:?} missing {day}"
                );
            }
            assert_eq!(obj.len(), 7, "week {i} row {name:?} has extra keys");
        }
    }
}
