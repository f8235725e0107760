//! Literal extraction from tree-sitter parse trees
//!
//! Walks the whole tree depth-first and collects string literals and
//! template literals without substitutions. Content is kept raw, exactly as
//! written between the delimiters, matching the lexical scan.

use tree_sitter::{Node, Parser, Tree};

use super::languages::LanguageId;
use crate::literal::{self, CharCursor, TextSpan};

/// Extract literals by parsing `source` with the grammar for `language`
///
/// Languages without a grammar use the lexical scan. Syntax errors degrade to
/// whatever tree-sitter recovers; literals that contain errors are skipped.
pub fn extract_literals_with(source: &str, language: LanguageId) -> Vec<TextSpan> {
    let Some(grammar) = language.grammar() else {
        return literal::extract_literals(source);
    };

    let mut parser = Parser::new();
    if let Err(e) = parser.set_language(&grammar) {
        tracing::error!("Failed to set language for {:?}: {}", language, e);
        return Vec::new();
    }

    let Some(tree) = parser.parse(source, None) else {
        tracing::error!("Parse failed for {:?}", language);
        return Vec::new();
    };

    if tree.root_node().has_error() {
        tracing::debug!(
            "{} source has syntax errors, using recovered tree",
            language.display_name()
        );
    }

    collect_literals(&tree, source, language)
}

/// Accumulates literal spans during the traversal
struct LiteralCollector<'s> {
    source: &'s str,
    language: LanguageId,
    offsets: CharCursor<'s>,
    spans: Vec<TextSpan>,
}

impl<'s> LiteralCollector<'s> {
    fn new(source: &'s str, language: LanguageId) -> Self {
        Self {
            source,
            language,
            offsets: CharCursor::new(source),
            spans: Vec::new(),
        }
    }

    fn visit(&mut self, node: Node) {
        // Literal kinds never contain other literal kinds, so emitted
        // spans arrive in ascending, non-overlapping order
        if !self.is_literal(&node) {
            return;
        }
        let Some(text) = self.source.get(node.start_byte()..node.end_byte()) else {
            return;
        };
        let Some(content) = strip_delimiters(text) else {
            return;
        };

        let start_offset = self.offsets.advance_to(node.start_byte());
        let end_offset = self.offsets.advance_to(node.end_byte());
        self.spans
            .push(TextSpan::new(content, start_offset, end_offset));
    }

    fn is_literal(&self, node: &Node) -> bool {
        if !self.language.literal_kinds().contains(&node.kind()) {
            return false;
        }
        if node.has_error() || node.is_missing() {
            return false;
        }
        match self.language.substitution_kind() {
            Some(substitution) => {
                let mut cursor = node.walk();
                let dynamic = node
                    .children(&mut cursor)
                    .any(|child| child.kind() == substitution);
                !dynamic
            }
            None => true,
        }
    }
}

/// Depth-first pre-order walk over every node of the tree
fn collect_literals(tree: &Tree, source: &str, language: LanguageId) -> Vec<TextSpan> {
    let mut collector = LiteralCollector::new(source, language);
    let mut cursor = tree.walk();

    'walk: loop {
        collector.visit(cursor.node());

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                continue 'walk;
            }
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    tracing::trace!(
        "Syntax walk found {} literal(s) in {}",
        collector.spans.len(),
        language.display_name()
    );
    collector.spans
}

/// Inner text between the opening quote and its matching closing quote.
/// Handles prefixed forms such as `b"..."` and `r#"..."#`.
fn strip_delimiters(text: &str) -> Option<&str> {
    let (open, quote) = text
        .char_indices()
        .find(|(_, ch)| matches!(ch, '"' | '\'' | '`'))?;
    let close = text.rfind(quote)?;
    if close <= open {
        return None;
    }
    text.get(open + 1..close)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(source: &str, language: LanguageId) -> Vec<String> {
        extract_literals_with(source, language)
            .into_iter()
            .map(|s| s.content)
            .collect()
    }

    #[test]
    fn test_typescript_strings() {
        let source = r#"print("مرحبا"); print('hello');"#;
        assert_eq!(
            contents(source, LanguageId::TypeScript),
            vec!["مرحبا", "hello"]
        );
    }

    #[test]
    fn test_offsets_cover_delimiters() {
        let source = r#"print("مرحبا");"#;
        let spans = extract_literals_with(source, LanguageId::JavaScript);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start_offset, 6);
        assert_eq!(spans[0].end_offset, 13);
    }

    #[test]
    fn test_comments_are_ignored() {
        let source = "// \"not a literal\"\n/* 'nor this' */\nconst a = 'x';\n";
        assert_eq!(contents(source, LanguageId::JavaScript), vec!["x"]);
    }

    #[test]
    fn test_plain_template() {
        let source = "const t = `plain`;";
        assert_eq!(contents(source, LanguageId::TypeScript), vec!["plain"]);
    }

    #[test]
    fn test_template_with_substitution_is_skipped() {
        let source = "const t = `a ${'b'} c`;";
        assert_eq!(contents(source, LanguageId::TypeScript), vec!["b"]);
    }

    #[test]
    fn test_nested_literals_come_out_in_source_order() {
        let source = "const t = `a ${`b ${'c'}`} ${\"d\"}`; const s = 'سلام';";
        let spans = extract_literals_with(source, LanguageId::TypeScript);
        let contents: Vec<&str> = spans.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, vec!["c", "d", "سلام"]);
        for pair in spans.windows(2) {
            assert!(pair[0].end_offset <= pair[1].start_offset);
        }
    }

    #[test]
    fn test_escapes_stay_raw() {
        let source = r#"const s = "a\"b";"#;
        assert_eq!(contents(source, LanguageId::JavaScript), vec![r#"a\"b"#]);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(contents(r#"let empty = "";"#, LanguageId::JavaScript), vec![""]);
    }

    #[test]
    fn test_tsx_attribute() {
        let source = r#"const el = <div title="مرحبا">text</div>;"#;
        assert_eq!(contents(source, LanguageId::Tsx), vec!["مرحبا"]);
    }

    #[test]
    fn test_rust_strings() {
        let source = r##"fn main() { let s = "سلام"; let r = r#"raw "q""#; let c = 'c'; }"##;
        assert_eq!(
            contents(source, LanguageId::Rust),
            vec!["سلام", r#"raw "q""#]
        );
    }

    #[test]
    fn test_rust_lifetimes_are_not_literals() {
        let source = "fn f<'a>(x: &'a str) -> &'a str { \"ok\" }";
        assert_eq!(contents(source, LanguageId::Rust), vec!["ok"]);
    }

    #[test]
    fn test_unterminated_literal_skipped() {
        let source = "const a = \"ok\";\nconst b = \"broken";
        assert_eq!(contents(source, LanguageId::JavaScript), vec!["ok"]);
    }

    #[test]
    fn test_garbage_does_not_panic() {
        let source = "}}}{{{ ((( ' \" ` ${ \\";
        let spans = extract_literals_with(source, LanguageId::TypeScript);
        for pair in spans.windows(2) {
            assert!(pair[0].start_offset < pair[1].start_offset);
        }
    }

    #[test]
    fn test_plain_text_uses_lexical_scan() {
        let source = "# \"quoted\" in a comment";
        assert_eq!(contents(source, LanguageId::PlainText), vec!["quoted"]);
    }

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("\"abc\""), Some("abc"));
        assert_eq!(strip_delimiters("`abc`"), Some("abc"));
        assert_eq!(strip_delimiters("b\"abc\""), Some("abc"));
        assert_eq!(strip_delimiters("r#\"a\"b\"#"), Some("a\"b"));
        assert_eq!(strip_delimiters("\"\""), Some(""));
        assert_eq!(strip_delimiters("\""), None);
        assert_eq!(strip_delimiters("abc"), None);
    }
}
