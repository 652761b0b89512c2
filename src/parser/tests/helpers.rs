use crate::config::Config;
use crate::document::{Document, Node, ParagraphNode, SectionNode, SystemMessageNode};
use crate::parser::Parser;

pub(crate) fn parse(input: &str) -> Document {
    Parser::new("test", input, Config::default()).parse()
}

pub(crate) fn node_types(nodes: &[Node]) -> Vec<&'static str> {
    nodes.iter().map(Node::node_type).collect()
}

pub(crate) fn first_section(doc: &Document) -> &SectionNode {
    find_section(&doc.nodes).expect("expected a section in the document")
}

pub(crate) fn find_section(nodes: &[Node]) -> Option<&SectionNode> {
    nodes.iter().find_map(|n| match n {
        Node::Section(s) => Some(s),
        _ => None,
    })
}

pub(crate) fn message_types(doc: &Document) -> Vec<&'static str> {
    doc.messages
        .iter()
        .filter_map(Node::as_system_message)
        .map(|m| m.message_type.as_str())
        .collect()
}

pub(crate) fn first_message(doc: &Document) -> &SystemMessageNode {
    doc.messages
        .iter()
        .find_map(Node::as_system_message)
        .expect("expected a system message")
}

pub(crate) fn as_paragraph(node: &Node) -> &ParagraphNode {
    match node {
        Node::Paragraph(p) => p,
        other => panic!("expected a paragraph, got {}", other.node_type()),
    }
}

/// Concatenated text of a paragraph's `Text` children.
pub(crate) fn paragraph_text(node: &Node) -> String {
    as_paragraph(node)
        .node_list
        .iter()
        .filter_map(|n| match n {
            Node::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect()
}
