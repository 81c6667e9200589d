//! Timestamp formatting with a small token pattern language.
//!
//! A pattern is split on runs of ASCII letters. A run that exactly matches a
//! token (`yyyy`, `MM`, `hh`, `a`, ...) is replaced by the matching field; any
//! other text, letter runs included, is copied through unchanged.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use chrono::{DateTime, Datelike, Local, SecondsFormat, TimeZone, Timelike, Utc};

/// Pattern used when the caller supplies none.
pub const DEFAULT_FORMAT: &str = "yyyy-MM-dd hh:mm";

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum DateFormatError {
    #[error("timestamp out of range: {0}")]
    OutOfRange(f64),
}

fn pad2(n: u32) -> String {
    format!("{n:02}")
}

fn token<T: Datelike + Timelike>(run: &str, dt: &T) -> Option<String> {
    let text = match run {
        "yyyy" => dt.year().to_string(),
        "yy" => (dt.year() % 100).to_string(),
        "MM" => pad2(dt.month()),
        "M" => dt.month().to_string(),
        "dd" => pad2(dt.day()),
        "d" => dt.day().to_string(),
        "hh" => pad2(dt.hour()),
        "h" => dt.hour().to_string(),
        "mm" => pad2(dt.minute()),
        "m" => dt.minute().to_string(),
        "ss" => pad2(dt.second()),
        "s" => dt.second().to_string(),
        "a" => (if dt.hour() < 12 { "AM" } else { "PM" }).to_owned(),
        _ => return None,
    };
    Some(text)
}

/// Render `dt` with `format`.
pub fn render<T: Datelike + Timelike>(dt: &T, format: &str) -> String {
    let mut out = String::with_capacity(format.len() + 8);
    let mut rest = format;
    while !rest.is_empty() {
        let letters = rest.starts_with(|c: char| c.is_ascii_alphabetic());
        let end = rest
            .find(|c: char| c.is_ascii_alphabetic() != letters)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        match letters.then(|| token(run, dt)).flatten() {
            Some(text) => out.push_str(&text),
            None => out.push_str(run),
        }
        rest = tail;
    }
    out
}

#[allow(clippy::cast_possible_truncation)]
fn from_unix_secs(secs: f64) -> Result<DateTime<Utc>, DateFormatError> {
    if !secs.is_finite() {
        return Err(DateFormatError::OutOfRange(secs));
    }
    DateTime::from_timestamp_millis((secs * 1000.0) as i64).ok_or(DateFormatError::OutOfRange(secs))
}

/// Format Unix seconds in `tz`. An empty or absent format uses [`DEFAULT_FORMAT`].
///
/// Fractional seconds are truncated to whole milliseconds.
///
/// # Errors
///
/// Returns `DateFormatError::OutOfRange` for non-finite or unrepresentable timestamps.
pub fn to_date_time<Tz: TimeZone>(secs: f64, format: Option<&str>, tz: &Tz) -> Result<String, DateFormatError> {
    let utc = from_unix_secs(secs)?;
    let format = format.filter(|f| !f.is_empty()).unwrap_or(DEFAULT_FORMAT);
    Ok(render(&utc.with_timezone(tz), format))
}

/// Format Unix seconds in the browser's local timezone.
///
/// # Errors
///
/// See [`to_date_time`].
pub fn to_local_date_time(secs: f64, format: Option<&str>) -> Result<String, DateFormatError> {
    to_date_time(secs, format, &Local)
}

/// RFC 3339 UTC value for a `<time datetime>` attribute.
///
/// # Errors
///
/// See [`to_date_time`].
pub fn to_iso_string(secs: f64) -> Result<String, DateFormatError> {
    Ok(from_unix_secs(secs)?.to_rfc3339_opts(SecondsFormat::Millis, true))
}
