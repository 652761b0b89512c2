//! Blockquote aggregation.
//!
//! The lexer emits one `BlockQuote` token per quoted line; consecutive
//! lines at the same indentation fold into a single blockquote paragraph.

use super::Parser;
use crate::document::{BlockQuoteNode, Node};
use crate::token::{Token, TokenKind};

impl Parser {
    pub(crate) fn blockquote(&mut self, token: &Token) -> Node {
        let mut quote = BlockQuoteNode::new(token);

        loop {
            let continues = self.buffer.peek_kind(1) == Some(TokenKind::Space)
                && self
                    .buffer
                    .peek(2)
                    .is_some_and(|t| {
                        t.kind == TokenKind::BlockQuote
                            && t.start_position == token.start_position
                    });
            if !continues {
                break;
            }
            self.buffer.next(2);
            if let Some(current) = self.buffer.current().cloned()
                && let Some(Node::Paragraph(p)) = quote.node_list.first_mut()
                && let Some(Node::Text(text)) = p.node_list.first_mut()
            {
                text.push_text("\n");
                text.push_text(&current.text);
            }
        }

        Node::BlockQuote(quote)
    }
}
