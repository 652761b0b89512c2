//! The parser: pulls tokens through the nine-slot buffer and builds the
//! document tree.
//!
//! Handlers build nodes locally and return them; only the main loop (and
//! the section machinery) attaches nodes to the tree, so there are no
//! aliased append targets. The routing target is the innermost open
//! section, tracked as an explicit stack that folds into parents as levels
//! close.

use crate::config::Config;
use crate::document::{Document, Node, NodeList, SectionNode, TransitionNode};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

mod blockquotes;
mod buffer;
mod comments;
mod inlines;
mod lists;
mod paragraphs;
mod section;
mod system_message;

use buffer::TokenBuffer;
use section::SectionLevels;

pub struct Parser {
    pub name: String,
    config: Config,
    buffer: TokenBuffer,
    nodes: NodeList,
    messages: NodeList,
    section_levels: SectionLevels,
    open_sections: Vec<SectionNode>,
    next_section_id: u32,
}

impl Parser {
    pub fn new(name: &str, text: &str, config: Config) -> Self {
        Parser {
            name: name.to_string(),
            config,
            buffer: TokenBuffer::new(Lexer::new(name, text)),
            nodes: NodeList::new(),
            messages: NodeList::new(),
            section_levels: SectionLevels::new(),
            open_sections: Vec::new(),
            next_section_id: 0,
        }
    }

    /// Runs the parse to completion. Malformed input never aborts the
    /// parse; it surfaces as `SystemMessage` nodes instead.
    pub fn parse(mut self) -> Document {
        loop {
            let Some(token) = self.buffer.next(1) else {
                break;
            };
            if token.kind == TokenKind::Eof {
                break;
            }
            log::debug!("parser {} got token {token}", self.name);

            match token.kind {
                TokenKind::Text => {
                    let node = self.paragraph(&token);
                    self.append(node);
                }
                TokenKind::InlineEmphasisOpen => {
                    if let Some(node) = self.inline_emphasis() {
                        self.append(node);
                    }
                }
                TokenKind::InlineStrongOpen => {
                    if let Some(node) = self.inline_strong() {
                        self.append(node);
                    }
                }
                TokenKind::InlineLiteralOpen => {
                    if let Some(node) = self.inline_literal() {
                        self.append(node);
                    }
                }
                TokenKind::InlineInterpretedTextOpen => {
                    if let Some(node) = self.inline_interpreted_text() {
                        self.append(node);
                    }
                }
                TokenKind::InlineInterpretedTextRoleOpen => {
                    if let Some(node) = self.inline_interpreted_text_role() {
                        self.append(node);
                    }
                }
                TokenKind::Transition => {
                    self.append(Node::Transition(TransitionNode::from_token(&token)));
                }
                TokenKind::CommentMark => {
                    for node in self.comment(&token) {
                        self.append(node);
                    }
                }
                TokenKind::SectionAdornment => self.section(&token),
                TokenKind::EnumListArabic => {
                    let node = self.enum_list(&token);
                    self.append(node);
                }
                TokenKind::Bullet => {
                    let node = self.bullet_list(&token);
                    self.append(node);
                }
                TokenKind::DefinitionTerm => {
                    let node = self.definition_list(&token);
                    self.append(node);
                }
                TokenKind::BlockQuote => {
                    let node = self.blockquote(&token);
                    self.append(node);
                }
                TokenKind::Space => {
                    // a BlockQuote token follows when the lexer classified
                    // the indented block; anything else is loose indent
                    if self.buffer.peek_back_kind(1) == Some(TokenKind::BlankLine)
                        && self.buffer.peek_kind(1) == Some(TokenKind::BlockQuote)
                    {
                        continue;
                    }
                }
                TokenKind::BlankLine | TokenKind::Title | TokenKind::Escape => {
                    // titles are consumed while evaluating their adornment
                }
                _ => {
                    log::debug!("token kind {} is not supported in the parser", token.kind);
                }
            }
        }
        self.finish()
    }

    fn finish(mut self) -> Document {
        while let Some(section) = self.open_sections.pop() {
            let node = Node::Section(section);
            match self.open_sections.last_mut() {
                Some(parent) => parent.node_list.push(node),
                None => self.nodes.push(node),
            }
        }
        Document {
            name: self.name,
            nodes: self.nodes,
            messages: self.messages,
        }
    }

    /// Appends to the innermost open section, or to the document root.
    fn append(&mut self, node: Node) {
        match self.open_sections.last_mut() {
            Some(section) => section.node_list.push(node),
            None => self.nodes.push(node),
        }
    }

    /// Closes the innermost open section, attaching it to its parent.
    fn fold_top_section(&mut self) {
        if let Some(section) = self.open_sections.pop() {
            let node = Node::Section(section);
            match self.open_sections.last_mut() {
                Some(parent) => parent.node_list.push(node),
                None => self.nodes.push(node),
            }
        }
    }

    /// The narrower dispatcher used inside list items and definition
    /// bodies.
    fn sub_parse_body_elements(&mut self, token: &Token) -> Vec<Node> {
        log::debug!("sub-parser got token {token}");
        match token.kind {
            TokenKind::Text => vec![self.paragraph(token)],
            TokenKind::InlineEmphasisOpen => self.inline_emphasis().into_iter().collect(),
            TokenKind::InlineStrongOpen => self.inline_strong().into_iter().collect(),
            TokenKind::InlineLiteralOpen => self.inline_literal().into_iter().collect(),
            TokenKind::InlineInterpretedTextOpen => {
                self.inline_interpreted_text().into_iter().collect()
            }
            TokenKind::InlineInterpretedTextRoleOpen => {
                self.inline_interpreted_text_role().into_iter().collect()
            }
            TokenKind::CommentMark => self.comment(token),
            TokenKind::EnumListArabic => vec![self.enum_list(token)],
            TokenKind::BlockQuote => vec![self.blockquote(token)],
            TokenKind::Space | TokenKind::BlankLine | TokenKind::Escape => Vec::new(),
            _ => {
                log::debug!(
                    "token kind {} is not supported in body elements",
                    token.kind
                );
                Vec::new()
            }
        }
    }
}
