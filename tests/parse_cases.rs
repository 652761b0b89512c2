//! Golden end-to-end parse cases.
//!
//! Each case is a directory under `tests/cases/` containing:
//! - `input.rst` - reStructuredText source
//! - `nodes.json` - expected document tree
//! - `items.json` - (optional) expected token stream from the lexer
//!
//! Trees are compared as JSON values, so key order in the expectation
//! files does not matter.

use serde_json::Value;
use std::{fs, path::Path};

fn lex_items(name: &str, input: &str) -> Vec<rubric::Token> {
    let mut lexer = rubric::Lexer::new(name, input);
    let mut items = Vec::new();
    loop {
        let token = lexer.next_token();
        let kind = token.kind;
        items.push(token);
        if kind == rubric::TokenKind::Eof {
            break;
        }
    }
    items
}

fn run_parse_case(case_name: &str) {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("cases")
        .join(case_name);

    let input = fs::read_to_string(dir.join("input.rst"))
        .unwrap_or_else(|_| panic!("no input.rst in {case_name}"));

    let items_path = dir.join("items.json");
    if items_path.exists() {
        let expected: Value =
            serde_json::from_str(&fs::read_to_string(&items_path).unwrap()).unwrap();
        let actual = serde_json::to_value(lex_items(case_name, &input)).unwrap();
        similar_asserts::assert_eq!(expected, actual, "items: {}", case_name);
    }

    let doc = rubric::parse(case_name, &input);

    let expected: Value =
        serde_json::from_str(&fs::read_to_string(dir.join("nodes.json")).unwrap()).unwrap();
    let actual = serde_json::to_value(&doc.nodes).unwrap();
    similar_asserts::assert_eq!(expected, actual, "nodes: {}", case_name);

    // every message in the tree is tracked in the flat list, and the
    // serialized tree survives a JSON round trip
    assert_eq!(
        doc.messages.len(),
        rubric::document::system_message_count(&doc.nodes),
        "message accounting: {case_name}"
    );
    let reparsed: Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
    assert_eq!(reparsed, actual, "round trip: {case_name}");
}

/// Generates one test function per case directory.
macro_rules! parse_test_cases {
    ($($case:ident),+ $(,)?) => {
        $(
            #[test]
            fn $case() {
                run_parse_case(stringify!($case));
            }
        )+
    };
}

parse_test_cases!(
    title_paragraph,
    title_overline,
    short_underline,
    short_overline_demoted,
);
