//! Syntax-aware literal extraction
//!
//! Provides tree-sitter based extraction with:
//! - Language detection from file extensions
//! - Depth-first walk over the parse tree
//! - Graceful degradation on syntactically invalid input
//!
//! ## Supported Languages
//!
//! - JavaScript (including JSX)
//! - TypeScript and TSX
//! - Rust

mod languages;
mod literals;

pub use languages::LanguageId;
pub use literals::extract_literals_with;
