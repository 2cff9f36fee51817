/// One slice of tokenized input. Concatenating every segment in order gives
/// back the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Tag(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(s) | Segment::Tag(s) => s,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Segment::Tag(_))
    }
}

/// Split `input` into alternating text and tag segments.
///
/// Recognized tags (whitespace `[ \t\r\n]*` allowed between tokens):
///
/// ```text
/// start_tag := "<" name attr* "/"? ">"
/// end_tag   := "<" "/" name ">"
/// attr      := name "=" '"' [^"]* '"'
/// name      := [a-zA-Z]+
/// ```
///
/// Scanning is leftmost-first: at every `<` a tag is attempted, and when none
/// matches the `<` stays in the current text run.
pub fn tokenize(input: &str) -> Vec<Segment<'_>> {
    let bytes = input.as_bytes();
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'<' {
            if let Some(end) = TagScanner::new(bytes, pos).scan() {
                if text_start < pos {
                    segments.push(Segment::Text(&input[text_start..pos]));
                }
                segments.push(Segment::Tag(&input[pos..end]));
                pos = end;
                text_start = end;
                continue;
            }
        }
        pos += 1;
    }

    if text_start < bytes.len() {
        segments.push(Segment::Text(&input[text_start..]));
    }
    segments
}

/// Byte-level matcher for a single tag starting at a `<`.
///
/// Every grammar token is ASCII, so all offsets it returns fall on char
/// boundaries of the source string.
struct TagScanner<'b> {
    bytes: &'b [u8],
    pos: usize,
}

impl<'b> TagScanner<'b> {
    fn new(bytes: &'b [u8], start: usize) -> Self {
        Self { bytes, pos: start }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
    }

    /// Consume a run of ASCII letters and return its length.
    fn name(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// `"` up to the next `"`. No escaped quotes.
    fn attr_value(&mut self) -> Option<()> {
        self.skip_ws();
        if !self.eat(b'"') {
            return None;
        }
        let close = self.bytes[self.pos..].iter().position(|&b| b == b'"')?;
        self.pos += close + 1;
        Some(())
    }

    /// Returns the end offset (exclusive) of the tag, or `None` when the
    /// text at the starting `<` is not a tag.
    fn scan(mut self) -> Option<usize> {
        if !self.eat(b'<') {
            return None;
        }
        self.skip_ws();
        if self.eat(b'/') {
            self.end_tag()
        } else {
            self.start_tag()
        }
    }

    fn end_tag(mut self) -> Option<usize> {
        self.skip_ws();
        if self.name() == 0 {
            return None;
        }
        self.skip_ws();
        if self.eat(b'>') {
            Some(self.pos)
        } else {
            None
        }
    }

    fn start_tag(mut self) -> Option<usize> {
        let tag_name_len = self.name();
        if tag_name_len == 0 {
            return None;
        }
        self.skip_ws();

        // `<ab="x">` is `a` carrying attribute `b`: the letter run is shared
        // between tag name and first attribute name.
        if self.peek() == Some(b'=') {
            if tag_name_len < 2 {
                return None;
            }
            self.pos += 1;
            self.attr_value()?;
            self.skip_ws();
        }

        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.name();
            self.skip_ws();
            if !self.eat(b'=') {
                return None;
            }
            self.attr_value()?;
            self.skip_ws();
        }

        self.eat(b'/');
        self.skip_ws();
        if self.eat(b'>') {
            Some(self.pos)
        } else {
            None
        }
    }
}
