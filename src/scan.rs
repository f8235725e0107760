//! Literal scanning
//!
//! Composes literal extraction with script classification. A scan reads only
//! its input and returns freshly allocated results, so it can run from any
//! thread without coordination.

use std::str::Chars;

use serde::{Deserialize, Serialize};

use crate::literal::{self, TextSpan};
use crate::script::is_target_script;
use crate::syntax::{self, LanguageId};

/// A literal whose content contains Arabic script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Literal content without delimiters, escapes raw
    pub text: String,
    /// Zero-based line of the opening delimiter
    pub line: usize,
    /// Char offset of the opening delimiter
    pub start_offset: usize,
    /// Char offset one past the closing delimiter
    pub end_offset: usize,
}

/// How literal spans are located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Plain-text scan for quoted sequences
    #[default]
    Lexical,
    /// Parse with a grammar and walk the syntax tree
    Syntax(LanguageId),
}

impl Strategy {
    /// Build a strategy from a config kind and the document's language
    pub fn resolve(kind: StrategyKind, language: LanguageId) -> Self {
        match kind {
            StrategyKind::Lexical => Strategy::Lexical,
            StrategyKind::Syntax if language.has_grammar() => Strategy::Syntax(language),
            StrategyKind::Syntax => {
                tracing::debug!(
                    "No grammar for {}, using lexical scan",
                    language.display_name()
                );
                Strategy::Lexical
            }
        }
    }

    /// Locate literal spans in `source`
    pub fn extract(&self, source: &str) -> Vec<TextSpan> {
        match self {
            Strategy::Lexical => literal::extract_literals(source),
            Strategy::Syntax(language) => syntax::extract_literals_with(source, *language),
        }
    }
}

/// Language-independent strategy selector used by config and CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Lexical,
    Syntax,
}

impl StrategyKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "lexical" | "regex" => Some(StrategyKind::Lexical),
            "syntax" | "ast" => Some(StrategyKind::Syntax),
            _ => None,
        }
    }
}

/// Counts `\n` while walking forward through char offsets
struct LineCounter<'a> {
    chars: Chars<'a>,
    offset: usize,
    line: usize,
}

impl<'a> LineCounter<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
            offset: 0,
            line: 0,
        }
    }

    /// Number of newlines before `offset`; offsets must not decrease
    fn line_at(&mut self, offset: usize) -> usize {
        while self.offset < offset {
            match self.chars.next() {
                Some('\n') => self.line += 1,
                Some(_) => {}
                None => break,
            }
            self.offset += 1;
        }
        self.line
    }
}

/// Keep the spans whose content is Arabic and attach line numbers
pub fn classify_spans(source: &str, spans: Vec<TextSpan>) -> Vec<Match> {
    let mut lines = LineCounter::new(source);
    spans
        .into_iter()
        .filter(|span| is_target_script(&span.content))
        .map(|span| Match {
            line: lines.line_at(span.start_offset),
            text: span.content,
            start_offset: span.start_offset,
            end_offset: span.end_offset,
        })
        .collect()
}

/// Scan `source` with the lexical strategy
pub fn scan(source: &str) -> Vec<Match> {
    scan_with(source, Strategy::Lexical)
}

/// Alias of [`scan`]
pub fn find_matches(source: &str) -> Vec<Match> {
    scan(source)
}

/// Scan `source` with an explicit strategy
pub fn scan_with(source: &str, strategy: Strategy) -> Vec<Match> {
    let spans = strategy.extract(source);
    let candidates = spans.len();
    let matches = classify_spans(source, spans);
    tracing::debug!(
        "Scanned {} literal(s), {} Arabic match(es) ({:?})",
        candidates,
        matches.len(),
        strategy
    );
    matches
}
