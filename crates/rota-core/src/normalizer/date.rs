//! Date-token normalizer.

/// Clean a raw date fragment into zero-padded `MM/DD`.
///
/// Every character other than an ASCII digit or `/` is dropped first. A
/// cleaned token of the form `<digits>/<digits>` is reformatted with both
/// sides padded to two digits; anything else (no slash, an empty side, more
/// than one slash, a number too large to parse) comes back as the cleaned
/// string so a bad header cell never aborts the parse. A token with no digit
/// or slash at all has nothing to clean towards and is returned as given.
pub fn normalize_date(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '/')
        .collect();

    if cleaned.is_empty() {
        return raw.to_string();
    }

    match split_month_day(&cleaned) {
        Some((month, day)) => format!("{month:02}/{day:02}"),
        None => {
            tracing::trace!(raw, cleaned = %cleaned, "date token left as cleaned text");
            cleaned
        }
    }
}

fn split_month_day(cleaned: &str) -> Option<(u32, u32)> {
    let (month, day) = cleaned.split_once('/')?;
    if month.is_empty() || day.is_empty() || day.contains('/') {
        return None;
    }
    Some((month.parse().ok()?, day.parse().ok()?))
}
