//! Paragraph aggregation.

use super::Parser;
use crate::document::{Node, ParagraphNode, TextNode};
use crate::token::{Token, TokenKind};

fn flush(paragraph: &mut ParagraphNode, current: &mut Option<TextNode>) {
    if let Some(text) = current.take() {
        paragraph.node_list.push(Node::Text(text));
    }
}

impl Parser {
    /// Aggregates a paragraph starting from `token`, consuming text lines,
    /// inline markup, and comments until a blank line or the end of input.
    pub(crate) fn paragraph(&mut self, token: &Token) -> Node {
        let mut paragraph = ParagraphNode::new();
        let mut current = Some(TextNode::from_token(token));

        loop {
            let Some(ci) = self.buffer.next(1) else {
                break;
            };
            if ci.kind == TokenKind::Eof {
                break;
            }
            let pi = self.buffer.peek_back(1);
            let pi_kind = pi.as_ref().map(|t| t.kind);

            if pi_kind == Some(TokenKind::Text) && ci.kind == TokenKind::Text {
                // consecutive text lines join with a newline
                match current.as_mut() {
                    Some(text) => {
                        text.push_text("\n");
                        text.push_text(&ci.text);
                    }
                    None => current = Some(TextNode::from_token(&ci)),
                }
                continue;
            }

            match ci.kind {
                TokenKind::Text => {
                    let escape_continuation = pi_kind == Some(TokenKind::Escape)
                        && pi.as_ref().is_some_and(|p| p.start_position > ci.start_position);
                    if escape_continuation && let Some(text) = current.as_mut() {
                        // an escape at end of line joins without a newline
                        text.push_text(&ci.text);
                    } else {
                        flush(&mut paragraph, &mut current);
                        current = Some(TextNode::from_token(&ci));
                    }
                }
                TokenKind::InlineEmphasisOpen => {
                    flush(&mut paragraph, &mut current);
                    if let Some(node) = self.inline_emphasis() {
                        paragraph.node_list.push(node);
                    }
                }
                TokenKind::InlineStrongOpen => {
                    flush(&mut paragraph, &mut current);
                    if let Some(node) = self.inline_strong() {
                        paragraph.node_list.push(node);
                    }
                }
                TokenKind::InlineLiteralOpen => {
                    flush(&mut paragraph, &mut current);
                    if let Some(node) = self.inline_literal() {
                        paragraph.node_list.push(node);
                    }
                }
                TokenKind::InlineInterpretedTextOpen => {
                    flush(&mut paragraph, &mut current);
                    if let Some(node) = self.inline_interpreted_text() {
                        paragraph.node_list.push(node);
                    }
                }
                TokenKind::InlineInterpretedTextRoleOpen => {
                    flush(&mut paragraph, &mut current);
                    if let Some(node) = self.inline_interpreted_text_role() {
                        paragraph.node_list.push(node);
                    }
                }
                TokenKind::CommentMark => {
                    flush(&mut paragraph, &mut current);
                    for node in self.comment(&ci) {
                        paragraph.node_list.push(node);
                    }
                }
                TokenKind::Space | TokenKind::Escape => {}
                TokenKind::BlankLine => {
                    // let the main loop observe the blank line
                    self.buffer.backup();
                    break;
                }
                _ => {
                    // a block construct ends the paragraph; hand it back
                    self.buffer.backup();
                    break;
                }
            }
        }

        flush(&mut paragraph, &mut current);
        Node::Paragraph(paragraph)
    }
}
