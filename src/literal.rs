//! Lexical literal extraction
//!
//! Finds double-quoted, single-quoted and backtick-quoted literals by scanning
//! the buffer as plain text. Quotes inside comments are matched as well; an
//! unterminated literal simply produces no span.

use std::sync::OnceLock;

use regex::Regex;

/// One quote- or backtick-delimited literal in a source buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// Inner text with delimiters removed, escapes left as written
    pub content: String,
    /// Char offset of the opening delimiter
    pub start_offset: usize,
    /// Char offset one past the closing delimiter
    pub end_offset: usize,
}

impl TextSpan {
    pub fn new(content: impl Into<String>, start_offset: usize, end_offset: usize) -> Self {
        Self {
            content: content.into(),
            start_offset,
            end_offset,
        }
    }

    /// Length of the whole literal in chars, delimiters included
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A backslash escape consumes exactly one following char, newlines included,
/// so an escaped delimiter never closes the literal.
const LITERAL_PATTERN: &str =
    r#""(?:\\(?s:.)|[^"\\])*"|'(?:\\(?s:.)|[^'\\])*'|`(?:\\(?s:.)|[^`\\])*`"#;

fn literal_regex() -> Option<&'static Regex> {
    static REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    REGEX
        .get_or_init(|| match Regex::new(LITERAL_PATTERN) {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::error!("Failed to compile literal pattern: {}", e);
                None
            }
        })
        .as_ref()
}

/// Converts ascending byte offsets into char offsets in a single pass
pub(crate) struct CharCursor<'a> {
    source: &'a str,
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> CharCursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            byte_pos: 0,
            char_pos: 0,
        }
    }

    /// Char offset of `byte_offset`. Offsets must be requested in
    /// non-decreasing order and lie on char boundaries.
    pub(crate) fn advance_to(&mut self, byte_offset: usize) -> usize {
        let target = byte_offset.min(self.source.len());
        if target > self.byte_pos {
            self.char_pos += self
                .source
                .get(self.byte_pos..target)
                .map_or(0, |s| s.chars().count());
            self.byte_pos = target;
        }
        self.char_pos
    }
}

/// Extract every quoted literal from `source` in source order
pub fn extract_literals(source: &str) -> Vec<TextSpan> {
    let Some(regex) = literal_regex() else {
        return Vec::new();
    };

    let mut cursor = CharCursor::new(source);
    let spans: Vec<TextSpan> = regex
        .find_iter(source)
        .map(|m| {
            let text = m.as_str();
            // Delimiters are single-byte ASCII
            let content = &text[1..text.len() - 1];
            let start_offset = cursor.advance_to(m.start());
            let end_offset = cursor.advance_to(m.end());
            TextSpan::new(content, start_offset, end_offset)
        })
        .collect();

    tracing::trace!("Lexical scan found {} literal(s)", spans.len());
    spans
}
