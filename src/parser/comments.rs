//! Comment handling: empty, one-line, multi-line, and the malformed
//! unindented-continuation shape.

use super::Parser;
use crate::document::{CommentNode, Node};
use crate::messages::MessageType;
use crate::token::{Token, TokenKind};

fn comment_with_text(text: String, line: usize, start_position: usize) -> CommentNode {
    let length = text.chars().count();
    CommentNode {
        text: Some(text),
        length,
        line,
        start_position,
    }
}

impl Parser {
    /// Parses a comment starting at its `CommentMark` token. Returns the
    /// comment node plus any diagnostic that belongs right after it.
    pub(crate) fn comment(&mut self, token: &Token) -> Vec<Node> {
        let mut out = Vec::new();

        match self.buffer.peek_kind(1) {
            None | Some(TokenKind::BlankLine) | Some(TokenKind::Eof) => {
                log::debug!("found empty comment block");
                out.push(Node::Comment(CommentNode::empty(
                    token.line,
                    token.start_position,
                )));
                return out;
            }
            Some(kind) if kind != TokenKind::Space => {
                // the comment mark is followed by an unindented line
                log::debug!("missing space after comment mark");
                out.push(Node::Comment(CommentNode::empty(token.line, 0)));
                let sm = self
                    .system_message(MessageType::InlineMarkupWarningExplicitMarkupWithUnIndent);
                out.push(Node::SystemMessage(sm));
                return out;
            }
            _ => {}
        }

        let Some(first) = self.buffer.peek(2) else {
            out.push(Node::Comment(CommentNode::empty(
                token.line,
                token.start_position,
            )));
            return out;
        };
        if first.kind != TokenKind::Text {
            out.push(Node::Comment(CommentNode::empty(
                token.line,
                token.start_position,
            )));
            return out;
        }

        // move past the space onto the comment text
        self.buffer.next(2);
        let mut text = first.text.clone();

        if self.buffer.peek_kind(1) == Some(TokenKind::Space)
            && self.buffer.peek_kind(2) == Some(TokenKind::Text)
        {
            // indented continuation lines belong to the comment
            log::debug!("found comment block");
            self.buffer.next(2);
            loop {
                if let Some(current) = self.buffer.current() {
                    text.push('\n');
                    text.push_str(&current.text);
                }
                if self.buffer.peek_kind(1) == Some(TokenKind::Space)
                    && self.buffer.peek_kind(2) == Some(TokenKind::Text)
                {
                    self.buffer.next(2);
                } else {
                    break;
                }
            }
            out.push(Node::Comment(comment_with_text(
                text,
                first.line,
                first.start_position,
            )));
            return out;
        }

        if !matches!(
            self.buffer.peek_kind(1),
            None | Some(TokenKind::BlankLine) | Some(TokenKind::CommentMark) | Some(TokenKind::Eof)
        ) {
            // a valid comment needs a blank line after its block
            log::debug!("comment ends without a blank line");
            out.push(Node::Comment(comment_with_text(
                text,
                first.line,
                first.start_position,
            )));
            let sm =
                self.system_message(MessageType::InlineMarkupWarningExplicitMarkupWithUnIndent);
            out.push(Node::SystemMessage(sm));
            return out;
        }

        log::debug!("found one-line comment");
        out.push(Node::Comment(comment_with_text(
            text,
            first.line,
            first.start_position,
        )));
        out
    }
}
