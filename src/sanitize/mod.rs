//! Make free text safe to embed in an XML document.
//!
//! - [`tokenizer`] — splits text into plain-text and tag segments.
//! - [`escape`] — entity-escapes plain-text segments.
//!
//! [`clean`] escapes `&`, `<` and `>` outside recognized tags and leaves the
//! tags themselves untouched. In [`SanitizeMode::Strict`] the tags are then
//! removed, or replaced by a substitute character.

pub mod escape;
pub mod tokenizer;

use std::fmt;

use serde::Deserialize;

use escape::escape_text;
use tokenizer::{tokenize, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SanitizeMode {
    /// Escape text, keep tags.
    #[default]
    Soft,
    /// Escape text, drop tags. With a substitute, each tag becomes that
    /// character instead of disappearing.
    Strict { substitute: Option<char> },
}

impl SanitizeMode {
    pub fn strict() -> Self {
        SanitizeMode::Strict { substitute: None }
    }
}

impl fmt::Display for SanitizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanitizeMode::Soft => write!(f, "soft"),
            SanitizeMode::Strict { substitute: None } => write!(f, "strict"),
            SanitizeMode::Strict { substitute: Some(c) } => write!(f, "strict (substitute '{}')", c),
        }
    }
}

/// Mode names accepted in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    #[default]
    Soft,
    Strict,
}

/// Sanitize `text` for embedding into XML.
///
/// Absent text yields an empty string. Not idempotent: cleaning an already
/// cleaned string escapes its entities a second time.
pub fn clean<'a>(text: impl Into<Option<&'a str>>, mode: SanitizeMode) -> String {
    let text: Option<&str> = text.into();
    let Some(text) = text else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    for segment in tokenize(text) {
        match (segment, mode) {
            (Segment::Text(t), _) => out.push_str(&escape_text(t)),
            (Segment::Tag(tag), SanitizeMode::Soft) => out.push_str(tag),
            (Segment::Tag(_), SanitizeMode::Strict { substitute: Some(c) }) => out.push(c),
            (Segment::Tag(_), SanitizeMode::Strict { substitute: None }) => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_DESCRIPTION: &str = "**Gras**\n*Italique*\t\n<del>Supprimé</del>\n<cite>Citation</cite>\n\n* Élément 1\n* Élément 2\n\n1. Élément 1\n2. Élément 2\n\n[Foo](http://foo.bar)";

    fn count_tags(s: &str) -> usize {
        tokenize(s).iter().filter(|seg| seg.is_tag()).count()
    }

    #[test]
    fn test_absent_text() {
        assert_eq!(clean(None::<&str>, SanitizeMode::Soft), "");
        assert_eq!(clean(None::<&str>, SanitizeMode::strict()), "");
    }

    #[test]
    fn test_soft_escapes_only_text() {
        assert_eq!(
            clean("<a href=\"http://x?a=1&b=2\">R&D</a> 1 < 2", SanitizeMode::Soft),
            "<a href=\"http://x?a=1&b=2\">R&amp;D</a> 1 &lt; 2"
        );
    }

    #[test]
    fn test_soft_keeps_fixture_markup() {
        assert_eq!(clean(FIXTURE_DESCRIPTION, SanitizeMode::default()), FIXTURE_DESCRIPTION);
    }

    #[test]
    fn test_malformed_tags_are_escaped() {
        assert_eq!(
            clean("<a href=\"x>oops", SanitizeMode::Soft),
            "&lt;a href=\"x&gt;oops"
        );
        assert_eq!(clean("<h1>Title</h1>", SanitizeMode::Soft), "&lt;h1&gt;Title&lt;/h1&gt;");
    }

    #[test]
    fn test_strict_removes_tags() {
        let input = "<b>bold</b> & <i>it</i><br/>";
        let out = clean(input, SanitizeMode::strict());
        assert_eq!(out, "bold &amp; it");
        assert_eq!(count_tags(&out), 0);
    }

    #[test]
    fn test_strict_with_substitute_replaces_whole_tags() {
        let out = clean(
            "<b>bold</b> & <a title=\"x>y\">it</a>",
            SanitizeMode::Strict { substitute: Some('_') },
        );
        assert_eq!(out, "_bold_ &amp; _it_");
    }

    #[test]
    fn test_strict_fixture_has_no_tags_left() {
        let out = clean(FIXTURE_DESCRIPTION, SanitizeMode::strict());
        assert_eq!(count_tags(&out), 0);
        assert!(out.contains("Supprimé\nCitation"));
    }

    #[test]
    fn test_double_clean_is_not_idempotent() {
        for input in ["a & b", "1 < 2", "x > y", "<p>Tom & Jerry</p>"] {
            let once = clean(input, SanitizeMode::Soft);
            let twice = clean(once.as_str(), SanitizeMode::Soft);
            assert_ne!(once, twice, "input: {input}");
        }
        assert_eq!(
            clean(clean("a & b", SanitizeMode::Soft).as_str(), SanitizeMode::Soft),
            "a &amp;amp; b"
        );
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(SanitizeMode::Soft.to_string(), "soft");
        assert_eq!(SanitizeMode::strict().to_string(), "strict");
    }
}
