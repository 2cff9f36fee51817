use std::fmt::Write;

use chrono::format::{DelayedFormat, Item, StrftimeItems};
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime};

use super::DateFormatter;

/// Parse an Isogeo ISO-8601 timestamp.
///
/// Accepts, in order: RFC 3339 with an offset, a naive datetime with optional
/// fractional seconds, and a bare date. Offsets are dropped; the wall-clock
/// date as written is kept.
pub fn parse_iso_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Whether chrono understands every specifier in `pattern`.
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// [`DateFormatter`] rendering through chrono's strftime implementation.
///
/// Day and month names follow the locale given at construction; an unknown
/// locale id (such as the built-in `uk_UK`) renders English names. A pattern
/// that cannot be rendered (unknown specifier, or one needing a timezone)
/// falls back to `%Y-%m-%d`.
#[derive(Debug, Clone, Copy)]
pub struct ChronoDateFormatter {
    locale: Locale,
}

impl ChronoDateFormatter {
    pub fn new(locale_id: &str) -> Self {
        let locale = Locale::try_from(locale_id).unwrap_or_else(|_| {
            tracing::debug!(locale = locale_id, "unknown locale, using English names");
            Locale::POSIX
        });
        Self { locale }
    }
}

impl Default for ChronoDateFormatter {
    fn default() -> Self {
        Self {
            locale: Locale::POSIX,
        }
    }
}

impl DateFormatter for ChronoDateFormatter {
    fn format(&self, datetime: &NaiveDateTime, pattern: &str) -> String {
        let mut out = String::new();
        if is_valid_pattern(pattern) {
            let formatted = DelayedFormat::new_with_locale(
                Some(datetime.date()),
                Some(datetime.time()),
                StrftimeItems::new_with_locale(pattern, self.locale),
                self.locale,
            );
            if write!(out, "{}", formatted).is_ok() {
                return out;
            }
        }
        tracing::warn!(pattern, "date pattern cannot be rendered, using ISO date");
        datetime.format("%Y-%m-%d").to_string()
    }
}
