//! Italian rendering of forecast dates

use chrono::{Datelike, NaiveDate};

/// Weekday names, Monday first
pub const WEEKDAYS: [&str; 7] = [
    "lunedì",
    "martedì",
    "mercoledì",
    "giovedì",
    "venerdì",
    "sabato",
    "domenica",
];

pub const MONTHS: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

/// Convert `YYYY-MM-DD` to "weekday day month", e.g. `lunedì 17 marzo`.
///
/// Strings that are not a valid date come back unchanged.
#[must_use]
pub fn format_italian_date(date: &str) -> String {
    if !has_iso_shape(date) {
        tracing::debug!(date, "Date not in ISO format, keeping it as is");
        return date.to_string();
    }

    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => format!(
            "{} {} {}",
            WEEKDAYS[parsed.weekday().num_days_from_monday() as usize],
            parsed.day(),
            MONTHS[parsed.month0() as usize]
        ),
        Err(e) => {
            tracing::debug!(date, error = %e, "Date not in ISO format, keeping it as is");
            date.to_string()
        }
    }
}

/// Four-digit year, then one or two digit month and day. The day may be
/// space padded (`2025-03- 7`). chrono alone also takes short or signed years
/// and surrounding whitespace.
fn has_iso_shape(date: &str) -> bool {
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    let mut parts = date.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            let day = match day.strip_prefix(' ') {
                Some(rest) if rest.len() == 1 => rest,
                Some(_) => return false,
                None => day,
            };
            year.len() == 4
                && digits(year)
                && month.len() <= 2
                && digits(month)
                && day.len() <= 2
                && digits(day)
        }
        _ => false,
    }
}
