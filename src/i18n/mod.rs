//! Collaborators injected into the normalizers.
//!
//! - [`labels`] — [`IsogeoTranslator`](labels::IsogeoTranslator), the built-in
//!   FR/EN label tables.
//! - [`dates`] — ISO-8601 parsing and the chrono-backed
//!   [`ChronoDateFormatter`](dates::ChronoDateFormatter).

pub mod dates;
pub mod labels;

use chrono::NaiveDateTime;

/// Lookup from a `(domain, key)` pair to a localized label.
///
/// Implementations return a stable fallback for unknown keys instead of
/// failing.
pub trait Translator: Send + Sync {
    fn tr(&self, domain: &str, key: &str) -> String;
}

/// Renders a parsed datetime with a strftime-style pattern.
pub trait DateFormatter: Send + Sync {
    fn format(&self, datetime: &NaiveDateTime, pattern: &str) -> String;
}
