//! Inline markup consumption: each handler is entered on the open token,
//! takes the payload, and eats the matching close.

use super::Parser;
use crate::document::{InlineMarkupNode, InterpretedTextNode, Node};
use crate::token::TokenKind;

impl Parser {
    pub(crate) fn inline_emphasis(&mut self) -> Option<Node> {
        let payload = self.buffer.next(1)?;
        let node = Node::InlineEmphasis(InlineMarkupNode::from_token(&payload));
        self.buffer.next(1);
        Some(node)
    }

    pub(crate) fn inline_strong(&mut self) -> Option<Node> {
        let payload = self.buffer.next(1)?;
        let node = Node::InlineStrong(InlineMarkupNode::from_token(&payload));
        self.buffer.next(1);
        Some(node)
    }

    pub(crate) fn inline_literal(&mut self) -> Option<Node> {
        let payload = self.buffer.next(1)?;
        let node = Node::InlineLiteral(InlineMarkupNode::from_token(&payload));
        self.buffer.next(1);
        Some(node)
    }

    /// Interpreted text, with the trailing role (when present) parsed into
    /// a child node.
    pub(crate) fn inline_interpreted_text(&mut self) -> Option<Node> {
        let payload = self.buffer.next(1)?;
        let mut node = InterpretedTextNode::from_token(&payload);
        self.buffer.next(1);
        if self.buffer.peek_kind(1) == Some(TokenKind::InlineInterpretedTextRoleOpen) {
            self.buffer.next(2);
            if let Some(role) = self.buffer.current().cloned() {
                node.node_list
                    .push(Node::InlineInterpretedTextRole(InlineMarkupNode::from_token(
                        &role,
                    )));
            }
            self.buffer.next(1);
        }
        Some(Node::InlineInterpretedText(node))
    }

    pub(crate) fn inline_interpreted_text_role(&mut self) -> Option<Node> {
        let payload = self.buffer.next(1)?;
        let node = Node::InlineInterpretedTextRole(InlineMarkupNode::from_token(&payload));
        self.buffer.next(1);
        Some(node)
    }
}
