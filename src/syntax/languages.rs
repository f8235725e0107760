//! Language identification and detection
//!
//! Maps file extensions and names to language IDs and their tree-sitter grammars.

use std::path::Path;

use tree_sitter::Language;

/// Languages with a grammar for literal extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    /// No grammar; extraction falls back to the lexical scan
    #[default]
    PlainText,
    JavaScript,
    TypeScript,
    Tsx,
    Rust,
}

impl LanguageId {
    /// All languages, grammar-less fallback first
    pub const ALL: &'static [LanguageId] = &[
        LanguageId::PlainText,
        LanguageId::JavaScript,
        LanguageId::TypeScript,
        LanguageId::Tsx,
        LanguageId::Rust,
    ];

    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" | "jsx" => LanguageId::JavaScript,
            "ts" | "mts" | "cts" => LanguageId::TypeScript,
            "tsx" => LanguageId::Tsx,
            "rs" => LanguageId::Rust,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageId::PlainText)
    }

    /// Look up a language by its short name (as used in config and CLI)
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.name() == lower)
    }

    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "plaintext",
            LanguageId::JavaScript => "javascript",
            LanguageId::TypeScript => "typescript",
            LanguageId::Tsx => "tsx",
            LanguageId::Rust => "rust",
        }
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "Plain Text",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Tsx => "TSX",
            LanguageId::Rust => "Rust",
        }
    }

    /// Check if this language can be parsed into a syntax tree
    pub fn has_grammar(&self) -> bool {
        !matches!(self, LanguageId::PlainText)
    }

    /// The tree-sitter grammar for this language
    pub fn grammar(&self) -> Option<Language> {
        match self {
            LanguageId::PlainText => None,
            LanguageId::JavaScript => Some(tree_sitter_javascript::LANGUAGE.into()),
            LanguageId::TypeScript => Some(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
            LanguageId::Tsx => Some(tree_sitter_typescript::LANGUAGE_TSX.into()),
            LanguageId::Rust => Some(tree_sitter_rust::LANGUAGE.into()),
        }
    }

    /// Node kinds that hold a literal string value
    pub(crate) fn literal_kinds(&self) -> &'static [&'static str] {
        match self {
            LanguageId::PlainText => &[],
            LanguageId::JavaScript | LanguageId::TypeScript | LanguageId::Tsx => {
                &["string", "template_string"]
            }
            LanguageId::Rust => &["string_literal", "raw_string_literal"],
        }
    }

    /// Child node kind that makes a template literal dynamic
    pub(crate) fn substitution_kind(&self) -> Option<&'static str> {
        match self {
            LanguageId::JavaScript | LanguageId::TypeScript | LanguageId::Tsx => {
                Some("template_substitution")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(LanguageId::from_extension("js"), LanguageId::JavaScript);
        assert_eq!(LanguageId::from_extension("jsx"), LanguageId::JavaScript);
        assert_eq!(LanguageId::from_extension("ts"), LanguageId::TypeScript);
        assert_eq!(LanguageId::from_extension("TS"), LanguageId::TypeScript);
        assert_eq!(LanguageId::from_extension("tsx"), LanguageId::Tsx);
        assert_eq!(LanguageId::from_extension("rs"), LanguageId::Rust);
        assert_eq!(LanguageId::from_extension("py"), LanguageId::PlainText);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            LanguageId::from_path(Path::new("src/extension.ts")),
            LanguageId::TypeScript
        );
        assert_eq!(
            LanguageId::from_path(Path::new("/path/to/main.rs")),
            LanguageId::Rust
        );
        assert_eq!(
            LanguageId::from_path(Path::new("Makefile")),
            LanguageId::PlainText
        );
    }

    #[test]
    fn test_from_name_roundtrips() {
        for lang in LanguageId::ALL {
            assert_eq!(LanguageId::from_name(lang.name()), Some(*lang));
        }
        assert_eq!(LanguageId::from_name("TypeScript"), Some(LanguageId::TypeScript));
        assert_eq!(LanguageId::from_name("cobol"), None);
    }

    #[test]
    fn test_grammars_available() {
        for lang in LanguageId::ALL {
            assert_eq!(lang.grammar().is_some(), lang.has_grammar());
        }
    }
}
