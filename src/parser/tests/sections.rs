use super::helpers::*;
use crate::document::{Node, system_message_count};
use crate::messages::Severity;

#[test]
fn title_underline_paragraph() {
    let doc = parse("Title\n=====\n\nParagraph.");
    assert!(doc.messages.is_empty(), "messages: {:?}", doc.messages);
    assert_eq!(node_types(&doc.nodes), vec!["NodeSection"]);

    let section = first_section(&doc);
    assert_eq!(section.level, 1);
    assert_eq!(section.title.text(), "Title");
    assert!(section.over_line.is_none());
    assert_eq!(section.under_line.rune, '=');
    assert_eq!(section.under_line.length, 5);
    assert_eq!(node_types(&section.node_list), vec!["NodeParagraph"]);
    assert_eq!(paragraph_text(&section.node_list[0]), "Paragraph.");
}

#[test]
fn overline_title_underline() {
    let doc = parse("=====\nTitle\n=====\n\nPara.");
    assert!(doc.messages.is_empty(), "messages: {:?}", doc.messages);

    let section = first_section(&doc);
    assert_eq!(section.level, 1);
    assert_eq!(section.title.text(), "Title");
    let over = section.over_line.as_ref().expect("overline");
    assert_eq!(over.rune, '=');
    assert_eq!(section.under_line.rune, '=');
    assert_eq!(node_types(&section.node_list), vec!["NodeParagraph"]);
}

#[test]
fn inset_title_records_indent() {
    let doc = parse("==========\n   Title\n==========");
    assert!(doc.messages.is_empty(), "messages: {:?}", doc.messages);
    let section = first_section(&doc);
    assert_eq!(section.title.indent_length, 3);
    assert_eq!(section.title.text(), "Title");
}

#[test]
fn short_underline_keeps_section_with_warning() {
    let doc = parse("Title\n===\n");
    assert_eq!(message_types(&doc), vec!["SectionWarningShortUnderline"]);

    let section = first_section(&doc);
    assert_eq!(section.level, 1);
    assert_eq!(section.under_line.length, 3);
    assert_eq!(node_types(&section.node_list), vec!["NodeSystemMessage"]);
}

#[test]
fn short_overline_keeps_section_with_warning() {
    let doc = parse("=====\nLong Title\n=====");
    assert_eq!(message_types(&doc), vec!["SectionWarningShortOverline"]);
    let section = first_section(&doc);
    assert_eq!(node_types(&section.node_list), vec!["NodeSystemMessage"]);
}

#[test]
fn two_char_adornments_demote_to_paragraph() {
    let doc = parse("==\nTi\n==\n");
    assert_eq!(
        message_types(&doc),
        vec!["SectionWarningOverlineTooShortForTitle"]
    );
    assert_eq!(
        node_types(&doc.nodes),
        vec!["NodeSystemMessage", "NodeParagraph"]
    );
    assert_eq!(paragraph_text(&doc.nodes[1]), "==\nTi\n==");
}

#[test]
fn underline_too_short_demotes_to_paragraph() {
    let doc = parse("Title\n==\n");
    assert_eq!(
        message_types(&doc),
        vec!["SectionWarningUnderlineTooShortForTitle"]
    );
    assert_eq!(
        node_types(&doc.nodes),
        vec!["NodeSystemMessage", "NodeParagraph"]
    );
    assert_eq!(paragraph_text(&doc.nodes[1]), "Title\n==");
}

#[test]
fn mismatched_adornments_still_build_the_section() {
    let doc = parse("===\nAbc\n---\n");
    assert_eq!(
        message_types(&doc),
        vec!["SectionErrorOverlineUnderlineMismatch"]
    );
    let section = first_section(&doc);
    assert_eq!(section.over_line.as_ref().unwrap().rune, '=');
    assert_eq!(section.under_line.rune, '-');
    assert_eq!(node_types(&section.node_list), vec!["NodeSystemMessage"]);
}

#[test]
fn section_levels_nest_and_return() {
    let doc = parse("One\n===\n\nTwo\n---\n\nSix\n===\n");
    assert!(doc.messages.is_empty(), "messages: {:?}", doc.messages);
    assert_eq!(node_types(&doc.nodes), vec!["NodeSection", "NodeSection"]);

    let Node::Section(first) = &doc.nodes[0] else {
        unreachable!()
    };
    let Node::Section(third) = &doc.nodes[1] else {
        unreachable!()
    };
    assert_eq!(first.level, 1);
    assert_eq!(third.level, 1);
    assert_eq!(third.title.text(), "Six");

    let Node::Section(second) = &first.node_list[0] else {
        panic!("expected nested section, got {:?}", first.node_list);
    };
    assert_eq!(second.level, 2);
    assert_eq!(second.title.text(), "Two");
}

#[test]
fn content_goes_to_the_innermost_section() {
    let doc = parse("One\n===\n\nTwo\n---\n\nbody text\n");
    let Node::Section(first) = &doc.nodes[0] else {
        unreachable!()
    };
    let Node::Section(second) = &first.node_list[0] else {
        panic!("expected nested section");
    };
    assert_eq!(node_types(&second.node_list), vec!["NodeParagraph"]);
}

#[test]
fn inconsistent_level_reports_and_nests_in_last_section() {
    let doc = parse("One\n===\n\nTwo\n~~~\n\nOne again\n=========\n\nBad\n---\n");
    assert_eq!(
        message_types(&doc),
        vec!["SectionErrorTitleLevelInconsistent"]
    );

    // the message lands in the most recent successful section
    let Node::Section(last) = doc.nodes.last().unwrap() else {
        panic!("expected a section last, got {:?}", doc.nodes);
    };
    assert_eq!(last.title.text(), "One again");
    assert_eq!(node_types(&last.node_list), vec!["NodeSystemMessage"]);
}

#[test]
fn missing_underline_for_inset_title() {
    let doc = parse("=====\n   Title\n\nPara.");
    assert_eq!(
        message_types(&doc),
        vec!["SectionErrorMissingMatchingUnderlineForOverline"]
    );
}

#[test]
fn incomplete_section_title() {
    let doc = parse("=====\nTitle\nmore text follows");
    assert_eq!(message_types(&doc), vec!["SectionErrorIncompleteSectionTitle"]);
}

#[test]
fn adornment_with_no_title_context() {
    let doc = parse("=====\n\nPara.");
    assert_eq!(
        message_types(&doc),
        vec!["SectionErrorInvalidSectionOrTransitionMarker"]
    );
    assert!(
        doc.nodes
            .iter()
            .any(|n| n.node_type() == "NodeParagraph")
    );
}

#[test]
fn indented_underline_is_an_error() {
    let doc = parse("Title\n   =====\n");
    assert_eq!(
        message_types(&doc),
        vec!["SectionErrorUnexpectedSectionTitle"]
    );
}

#[test]
fn indented_overline_is_an_error() {
    let doc = parse("   =====\n   Title\n   =====\n");
    assert_eq!(
        message_types(&doc)[0],
        "SectionErrorUnexpectedSectionTitleOrTransition"
    );
}

#[test]
fn system_message_structure() {
    let doc = parse("Title\n==\n");
    let message = first_message(&doc);
    assert_eq!(message.severity, Severity::Warning);
    // the message carries the underline's own line
    assert_eq!(message.line, 2);
    assert_eq!(
        node_types(&message.node_list),
        vec!["NodeText", "NodeLiteralBlock"]
    );
    let Node::LiteralBlock(literal) = &message.node_list[1] else {
        unreachable!()
    };
    assert_eq!(literal.text, "Title\n==");
}

#[test]
fn flat_messages_match_tree_messages() {
    let doc = parse("Title\n===\n\n==\nTi\n==\n\nOk\n--\n");
    assert_eq!(doc.messages.len(), system_message_count(&doc.nodes));
    assert!(!doc.messages.is_empty());
}

#[test]
fn message_lines_stay_in_input_range() {
    let input = "Title\n===\n\n==\nTi\n==\n";
    let line_count = input.lines().count();
    let doc = parse(input);
    for message in doc.messages.iter().filter_map(Node::as_system_message) {
        assert!(message.line >= 1 && message.line <= line_count);
    }
}

#[test]
fn every_section_has_an_underline() {
    let doc = parse("A\n=\n\nB\n-\n");
    // one-rune adornments never lex as section material
    assert!(find_section(&doc.nodes).is_none());
}
