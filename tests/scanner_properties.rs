//! Property-based tests for the scanner and parser.
//!
//! These check that:
//! 1. Scanning is total and always ends in a single EOF token
//! 2. Token positions follow the source layout
//! 3. Generated well-formed structograms parse to the expected tree
//! 4. The parser never panics on arbitrary keyword soup

use proptest::prelude::*;
use structogram::dsl::{self, scan, Node, TokenKind, FIXED_LEXEMES};

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Arbitrary printable and control ASCII.
fn arbitrary_source() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,300}").unwrap()
}

/// Text that may appear between double quotes.
fn string_content() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[a-zA-Z0-9 _+=<>().,']{0,20}"#).unwrap()
}

/// Source fragments built from the DSL's own vocabulary.
fn keyword_soup() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        prop::sample::select(FIXED_LEXEMES.iter().map(|(l, _)| *l).collect::<Vec<_>>())
            .prop_map(|s| s.to_string()),
        string_content().prop_map(|s| format!("\"{s}\"")),
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("x".to_string()),
    ];
    prop::collection::vec(fragment, 0..60).prop_map(|parts| parts.concat())
}

/// A flat list of instruction/call statements.
fn simple_statements() -> impl Strategy<Value = Vec<(bool, String)>> {
    prop::collection::vec((any::<bool>(), string_content()), 1..20)
}

fn render_statement(is_call: bool, text: &str) -> String {
    let keyword = if is_call { "call" } else { "instruction" };
    format!("{keyword}(\"{text}\")")
}

// =============================================================================
// SCANNER PROPERTIES
// =============================================================================

proptest! {
    /// Scanning never panics and ends with exactly one EOF.
    #[test]
    fn scan_ends_with_single_eof(source in arbitrary_source()) {
        let tokens = scan(&source);
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        let last = tokens.last().unwrap();
        prop_assert_eq!(last.kind, TokenKind::Eof);
        prop_assert_eq!(last.text.as_str(), "EOF");
    }

    /// Tokens on the same line have strictly increasing columns.
    #[test]
    fn columns_increase_along_a_line(source in keyword_soup()) {
        let tokens = scan(&source);
        for pair in tokens.windows(2) {
            if pair[0].line == pair[1].line {
                prop_assert!(pair[0].col < pair[1].col, "{:?} then {:?}", pair[0], pair[1]);
            } else {
                prop_assert!(pair[0].line < pair[1].line);
            }
        }
    }

    /// A whitespace run is a single token and moves the EOF position.
    #[test]
    fn whitespace_run_is_one_token(run in r"[ \t\n]{1,40}") {
        let tokens = scan(&run);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Whitespace);
        prop_assert_eq!(&tokens[0].text, &run);
        prop_assert_eq!((tokens[0].line, tokens[0].col), (1, 1));

        let newlines = run.matches('\n').count();
        let tail = run.rsplit('\n').next().unwrap().chars().count();
        prop_assert_eq!(tokens[1].line, 1 + newlines);
        prop_assert_eq!(tokens[1].col, tail + 1);
    }

    /// Quoted text keeps its content and occupies two extra columns.
    #[test]
    fn string_literal_width(content in string_content(), single in any::<bool>()) {
        let quote = if single { '\'' } else { '"' };
        prop_assume!(!content.contains(quote));
        let tokens = scan(&format!("{quote}{content}{quote}"));
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::String);
        prop_assert_eq!(&tokens[0].text, &content);
        prop_assert_eq!(tokens[1].col, content.chars().count() + 3);
    }

    /// Every fixed lexeme scans to its own kind.
    #[test]
    fn fixed_lexeme_scans_alone(index in 0..FIXED_LEXEMES.len()) {
        let (lexeme, kind) = FIXED_LEXEMES[index];
        let tokens = scan(lexeme);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, kind);
        prop_assert_eq!(tokens[0].text.as_str(), lexeme);
        prop_assert_eq!(tokens[1].col, lexeme.len() + 1);
    }
}

// =============================================================================
// PARSER PROPERTIES
// =============================================================================

proptest! {
    /// The parser never panics and is deterministic.
    #[test]
    fn parse_is_total_and_deterministic(source in keyword_soup()) {
        let first = dsl::parse_source(&source);
        let second = dsl::parse_source(&source);
        prop_assert_eq!(first, second);
    }

    /// Arbitrary input never panics the parser either.
    #[test]
    fn parse_arbitrary_source(source in arbitrary_source()) {
        let _ = dsl::parse_source(&source);
    }

    /// Flat statement lists come back in order with their text intact.
    #[test]
    fn flat_statements_roundtrip(
        name in string_content(),
        statements in simple_statements(),
    ) {
        let body: Vec<String> = statements
            .iter()
            .map(|(is_call, text)| render_statement(*is_call, text))
            .collect();
        let source = format!("name(\"{name}\")\n{}", body.join("\n"));

        let structogram = dsl::parse_source(&source).unwrap();
        prop_assert_eq!(&structogram.name, &name);
        prop_assert_eq!(structogram.nodes.len(), statements.len());
        for (node, (is_call, text)) in structogram.nodes.iter().zip(&statements) {
            let expected = if *is_call { "call" } else { "instruction" };
            prop_assert_eq!(node.keyword(), expected);
            prop_assert_eq!(node.value(), text.as_str());
        }
    }

    /// Nested if blocks parse to the same depth.
    #[test]
    fn nested_ifs_keep_depth(depth in 1usize..40) {
        let mut source = String::from("name(\"n\") ");
        for level in 0..depth {
            source.push_str(&format!("instruction(\"{level}\") if(\"c\") {{ "));
        }
        source.push_str("call(\"leaf\")");
        source.push_str(&" }".repeat(depth));

        let structogram = dsl::parse_source(&source).unwrap();
        let mut nodes = structogram.nodes.as_slice();
        for _ in 0..depth {
            prop_assert_eq!(nodes.len(), 2);
            prop_assert!(matches!(nodes[1], Node::If { .. }), "expected Node::If, got {:?}", nodes[1]);
            nodes = nodes[1].children().unwrap();
        }
        prop_assert_eq!(nodes.len(), 1);
        prop_assert_eq!(nodes[0].value(), "leaf");
    }
}
