use std::borrow::Cow;

/// Replace `&`, `<` and `>` with their XML entities.
///
/// Works character by character, so an `&` already part of an entity is
/// escaped again: `&amp;` becomes `&amp;amp;`.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '&' | '<' | '>')) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
