//! Renderers for normalized metadata.
//!
//! - [`terminal`] — colored tables, one per non-empty section; respects `--quiet`.
//! - [`xml`] — XML document with sanitized free text embedded as markup.
//!
//! JSON output needs no renderer of its own: the records serialize directly.

pub mod terminal;
pub mod xml;
