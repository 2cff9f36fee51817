//! `isogeo-formatter` — normalize Isogeo metadata sections and sanitize free
//! text for XML documents.
//!
//! # Flow
//! 1. Load configuration ([`config::load_config`]).
//! 2. Build a [`Formatter`] for one language; it owns a
//!    [`Translator`](i18n::Translator) and a [`DateFormatter`](i18n::DateFormatter).
//! 3. Normalize raw JSON sections ([`normalize`]): conditions, limitations,
//!    specifications. Malformed items are logged and skipped.
//! 4. Sanitize free text before embedding it in XML ([`sanitize::clean`]).
//! 5. Render the result ([`report`]).

pub mod config;
pub mod formatter;
pub mod i18n;
pub mod models;
pub mod normalize;
pub mod report;
pub mod sanitize;

#[cfg(test)]
mod fixtures;

pub use formatter::Formatter;
pub use sanitize::{clean, SanitizeMode};
