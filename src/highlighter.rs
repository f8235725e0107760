//! Highlighter session
//!
//! The host editor calls [`Highlighter::decorate`] with the full document
//! text whenever it changes. Each call is a complete rescan; a result for an
//! older revision than one already decorated is dropped as stale.

use ropey::Rope;
use serde::Serialize;

use crate::config::HighlightConfig;
use crate::scan::{scan_with, Match, Strategy};
use crate::style::DecorationStyle;
use crate::syntax::LanguageId;

/// Position in the document (0-indexed line, char column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Range covering one matched literal, delimiters included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecorationRange {
    pub start: Position,
    /// Exclusive
    pub end: Position,
}

/// Everything the host needs to paint one document revision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decorations {
    pub revision: u64,
    pub style: DecorationStyle,
    pub ranges: Vec<DecorationRange>,
}

/// Document content as seen by the host at one revision
#[derive(Debug, Clone, Copy)]
pub struct DocumentSnapshot<'a> {
    pub revision: u64,
    pub language: LanguageId,
    pub text: &'a str,
}

impl<'a> DocumentSnapshot<'a> {
    pub fn new(revision: u64, language: LanguageId, text: &'a str) -> Self {
        Self {
            revision,
            language,
            text,
        }
    }
}

/// Converts char offsets to editor positions
struct PositionIndex {
    rope: Rope,
}

impl PositionIndex {
    fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    fn position_at(&self, char_offset: usize) -> Position {
        let clamped = char_offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(clamped);
        let line_start = self.rope.line_to_char(line);
        Position::new(line, clamped - line_start)
    }
}

/// Applies the current configuration to document rescans
#[derive(Debug)]
pub struct Highlighter {
    config: HighlightConfig,
    style: DecorationStyle,
    /// Newest revision decorated so far
    latest_revision: Option<u64>,
}

impl Highlighter {
    pub fn new(config: HighlightConfig) -> Self {
        let style = DecorationStyle::from_config(&config.decoration);
        Self {
            config,
            style,
            latest_revision: None,
        }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn style(&self) -> &DecorationStyle {
        &self.style
    }

    /// Replace the configuration, rebuilding the style from scratch
    pub fn apply_config(&mut self, config: HighlightConfig) {
        self.style = DecorationStyle::from_config(&config.decoration);
        self.config = config;
        tracing::debug!("Applied highlight config: {:?}", self.style);
    }

    /// Find Arabic literals in a snapshot with the configured strategy
    pub fn find_strings(&self, snapshot: &DocumentSnapshot) -> Vec<Match> {
        let strategy = Strategy::resolve(self.config.strategy, snapshot.language);
        scan_with(snapshot.text, strategy)
    }

    /// Rescan a snapshot and build its decorations
    ///
    /// Returns `None` when a newer revision has already been decorated.
    /// Re-decorating the same revision is allowed (e.g. after a config change).
    pub fn decorate(&mut self, snapshot: &DocumentSnapshot) -> Option<Decorations> {
        if let Some(latest) = self.latest_revision {
            if snapshot.revision < latest {
                tracing::debug!(
                    "Discarding stale decorate request: revision {} < latest {}",
                    snapshot.revision,
                    latest
                );
                return None;
            }
        }
        self.latest_revision = Some(snapshot.revision);

        let ranges = if self.config.enabled {
            let matches = self.find_strings(snapshot);
            let index = PositionIndex::new(snapshot.text);
            matches
                .iter()
                .map(|m| DecorationRange {
                    start: index.position_at(m.start_offset),
                    end: index.position_at(m.end_offset),
                })
                .collect()
        } else {
            Vec::new()
        };

        tracing::trace!(
            "Decorated revision {} with {} range(s)",
            snapshot.revision,
            ranges.len()
        );

        Some(Decorations {
            revision: snapshot.revision,
            style: self.style.clone(),
            ranges,
        })
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(HighlightConfig::default())
    }
}
