//! Derived player attributes: age from a birth date, height in centimeters.
//!
//! Both parsers are total: anything they cannot make sense of comes back as
//! `None` so the caller can show a placeholder.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

use crate::model::{numeric::first_number_in, Measure, Player};

/// Heights below this are read as meters, anything else as centimeters.
pub const METERS_THRESHOLD: f64 = 10.0;

/// The two shapes the source tables use, tried first.
pub const PRIMARY_DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

/// Catch-all date shapes, tried in order after the primary ones.
pub const FALLBACK_DATE_FORMATS: [&str; 8] = [
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%d-%m-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Timestamps whose date part is all we need.
pub const FALLBACK_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
];

/// Parse a date by trying each known shape in turn.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    PRIMARY_DATE_FORMATS
        .iter()
        .chain(FALLBACK_DATE_FORMATS.iter())
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            FALLBACK_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Whole years between `birth_date` and `today`.
///
/// One year is subtracted when this year's birthday has not happened yet.
/// Unparseable input or a birth date after `today` gives `None`.
pub fn calculate_age(birth_date: &str, today: NaiveDate) -> Option<u32> {
    let born = parse_date(birth_date)?;
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}

/// [`calculate_age`] as of the local date.
pub fn calculate_age_today(birth_date: &str) -> Option<u32> {
    calculate_age(birth_date, Local::now().date_naive())
}

/// Height in centimeters, rounded to a tenth.
///
/// Numbers below [`METERS_THRESHOLD`] are taken to be meters and scaled by
/// 100. Text is reduced to the first number it contains. Non-positive or
/// missing values give `None`.
///
/// ```rust
/// use hoops_stats::stats::normalize_height;
///
/// assert_eq!(normalize_height(1.98), Some(198.0));
/// assert_eq!(normalize_height(198), Some(198.0));
/// assert_eq!(normalize_height("2.05 m"), Some(205.0));
/// ```
pub fn normalize_height<V: Into<Measure>>(value: V) -> Option<f64> {
    let n = match value.into() {
        Measure::Number(n) => n,
        Measure::Text(text) => first_number_in(&text)?,
    };
    if !n.is_finite() || n <= 0.0 {
        return None;
    }

    let cm = if n < METERS_THRESHOLD { n * 100.0 } else { n };
    Some((cm * 10.0).round() / 10.0)
}

pub fn player_height_cm(player: &Player) -> Option<f64> {
    player.height.clone().and_then(normalize_height)
}

pub fn player_age(player: &Player, today: NaiveDate) -> Option<u32> {
    calculate_age(player.date_of_birth.as_deref()?, today)
}
