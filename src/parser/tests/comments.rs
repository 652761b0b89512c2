use super::helpers::*;
use crate::document::Node;

#[test]
fn one_line_comment() {
    let doc = parse(".. a comment\n\nPara.");
    assert_eq!(node_types(&doc.nodes), vec!["NodeComment", "NodeParagraph"]);
    let Node::Comment(comment) = &doc.nodes[0] else {
        unreachable!()
    };
    assert_eq!(comment.text.as_deref(), Some("a comment"));
    assert!(doc.messages.is_empty());
}

#[test]
fn empty_comment() {
    let doc = parse("..\n\nPara.");
    assert_eq!(node_types(&doc.nodes), vec!["NodeComment", "NodeParagraph"]);
    let Node::Comment(comment) = &doc.nodes[0] else {
        unreachable!()
    };
    assert!(comment.text.is_none());
    assert_eq!(comment.line, 1);
}

#[test]
fn multi_line_comment_gathers_indented_lines() {
    let doc = parse(".. line one\n   line two\n   line three\n\nPara.");
    assert_eq!(node_types(&doc.nodes), vec!["NodeComment", "NodeParagraph"]);
    let Node::Comment(comment) = &doc.nodes[0] else {
        unreachable!()
    };
    assert_eq!(
        comment.text.as_deref(),
        Some("line one\nline two\nline three")
    );
}

#[test]
fn unindented_continuation_warns() {
    let doc = parse(".. comment\nnot indented");
    assert_eq!(
        message_types(&doc),
        vec!["InlineMarkupWarningExplicitMarkupWithUnIndent"]
    );
    assert_eq!(
        node_types(&doc.nodes),
        vec!["NodeComment", "NodeSystemMessage", "NodeParagraph"]
    );
}

#[test]
fn comment_mark_followed_by_unindented_line_warns() {
    let doc = parse("..\nnot indented");
    assert_eq!(
        message_types(&doc),
        vec!["InlineMarkupWarningExplicitMarkupWithUnIndent"]
    );
    let first = first_message(&doc);
    assert_eq!(first.line, 2);
}

#[test]
fn comment_inside_paragraph_is_delegated() {
    let doc = parse("text line\n.. trailing comment");
    let paragraph = as_paragraph(&doc.nodes[0]);
    assert!(
        paragraph
            .node_list
            .iter()
            .any(|n| n.node_type() == "NodeComment")
    );
}
