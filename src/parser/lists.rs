//! Bullet, enumerated, and definition list construction.
//!
//! Nesting is tracked structurally: each handler owns the list it is
//! building and recurses for deeper lists, so there is no shared
//! "open list" slot anywhere.

use super::Parser;
use crate::document::{
    BulletListItemNode, BulletListNode, DefinitionListItemNode, DefinitionListNode, EnumListNode,
    Node, ParagraphNode,
};
use crate::token::{Token, TokenKind};

impl Parser {
    /// Builds a bullet list from its first `Bullet` token. Items at the
    /// same column extend this list; deeper bullets recurse into a nested
    /// list, and a shallower bullet hands control back to the caller.
    pub(crate) fn bullet_list(&mut self, token: &Token) -> Node {
        let list_column = token.start_position;
        let mut list = BulletListNode::from_token(token);
        let mut item = BulletListItemNode::from_token(token);

        loop {
            let Some(t) = self.buffer.next(1) else {
                break;
            };
            match t.kind {
                TokenKind::Eof => break,
                TokenKind::Bullet => {
                    if t.start_position == list_column {
                        list.node_list.push(Node::BulletListItem(item));
                        item = BulletListItemNode::from_token(&t);
                    } else if t.start_position > list_column {
                        let nested = self.bullet_list(&t);
                        item.node_list.push(nested);
                    } else {
                        self.buffer.backup();
                        break;
                    }
                }
                TokenKind::Space | TokenKind::BlankLine => {}
                TokenKind::Text => {
                    if t.start_position <= list_column {
                        // un-indent ends the list
                        self.buffer.backup();
                        break;
                    }
                    let node = self.paragraph(&t);
                    item.node_list.push(node);
                }
                TokenKind::SectionAdornment | TokenKind::Title | TokenKind::DefinitionTerm => {
                    self.buffer.backup();
                    break;
                }
                _ => {
                    for node in self.sub_parse_body_elements(&t) {
                        item.node_list.push(node);
                    }
                }
            }
        }

        list.node_list.push(Node::BulletListItem(item));
        Node::BulletList(list)
    }

    /// Builds an enumerated list; paragraphs are its direct children, one
    /// per item, matching the document model's flat enum list.
    pub(crate) fn enum_list(&mut self, token: &Token) -> Node {
        let mut list = EnumListNode::from_token(token);

        'items: loop {
            if self.buffer.peek_kind(1) == Some(TokenKind::Space) {
                self.buffer.next(1);
            }
            let Some(t) = self.buffer.next(1) else {
                break;
            };
            if t.kind != TokenKind::Text {
                self.buffer.backup();
                break;
            }
            let node = self.paragraph(&t);
            list.node_list.push(node);

            // find the next enumerator, skipping blank lines
            loop {
                let Some(n) = self.buffer.next(1) else {
                    break 'items;
                };
                match n.kind {
                    TokenKind::BlankLine => continue,
                    TokenKind::EnumListArabic => continue 'items,
                    TokenKind::Eof => break 'items,
                    _ => {
                        self.buffer.backup();
                        break 'items;
                    }
                }
            }
        }

        Node::EnumList(list)
    }

    /// Builds a definition list from its first `DefinitionTerm` token.
    pub(crate) fn definition_list(&mut self, token: &Token) -> Node {
        let mut list = DefinitionListNode::default();
        let mut item = DefinitionListItemNode::from_token(token);
        let mut after_blank = false;

        loop {
            let Some(t) = self.buffer.next(1) else {
                break;
            };
            match t.kind {
                TokenKind::Eof => break,
                TokenKind::Space => {}
                TokenKind::BlankLine => after_blank = true,
                TokenKind::DefinitionText => {
                    let mut joined = false;
                    if !after_blank
                        && let Some(Node::Paragraph(p)) = item.definition.node_list.last_mut()
                        && let Some(Node::Text(text)) = p.node_list.last_mut()
                    {
                        text.push_text("\n");
                        text.push_text(&t.text);
                        joined = true;
                    }
                    if !joined {
                        item.definition
                            .node_list
                            .push(Node::Paragraph(ParagraphNode::with_text(&t)));
                    }
                    after_blank = false;
                }
                TokenKind::DefinitionTerm => {
                    list.node_list.push(Node::DefinitionListItem(item));
                    item = DefinitionListItemNode::from_token(&t);
                    after_blank = false;
                }
                TokenKind::CommentMark => {
                    // an unindented comment closes the list
                    if self.buffer.peek_back_kind(2) != Some(TokenKind::Space) {
                        self.buffer.backup();
                        break;
                    }
                    for node in self.comment(&t) {
                        item.definition.node_list.push(node);
                    }
                }
                _ => {
                    self.buffer.backup();
                    break;
                }
            }
        }

        list.node_list.push(Node::DefinitionListItem(item));
        Node::DefinitionList(list)
    }
}
