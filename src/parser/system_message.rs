//! Diagnostic synthesis.
//!
//! Every diagnostic becomes a `SystemMessage` node whose first child is
//! the human-readable message and whose second, when literal context
//! exists, is a `LiteralBlock` reconstructing the offending source lines
//! from the token-buffer window. Three kinds additionally re-tag the
//! current buffer slot as `Text` and rewind one position, which is how a
//! failed section skeleton re-enters the main loop as a paragraph.

use super::Parser;
use super::buffer::ZED;
use crate::document::{LiteralBlockNode, Node, SystemMessageNode};
use crate::messages::MessageType;
use crate::token::{Token, TokenKind};

impl Parser {
    fn slot_text(&self, index: usize) -> String {
        self.buffer
            .slot(index)
            .map_or_else(String::new, |t| t.text.clone())
    }

    fn slot_line(&self, index: usize) -> usize {
        self.buffer.slot(index).map_or(0, |t| t.line)
    }

    /// Replaces the current token with a synthetic `Text` token carrying
    /// the reconstructed literal, then rewinds so the main loop re-enters
    /// as paragraph aggregation.
    fn retag_current_as_text(&mut self, text: &str, line: usize, start_position: usize) {
        let id = self.buffer.current().map_or(0, |t| t.id);
        let token = Token::new(id, TokenKind::Text, line, start_position, text.to_string());
        self.buffer.set_current(token);
        self.buffer.backup();
    }

    /// Builds the `SystemMessage` node for `message_type`, reconstructing
    /// literal context from the buffer window, and records it in the flat
    /// messages list.
    pub(crate) fn system_message(&mut self, message_type: MessageType) -> SystemMessageNode {
        let current_line = self.buffer.current().map_or(0, |t| t.line);
        let mut sm = SystemMessageNode::new(message_type, current_line);
        let current_text = self
            .buffer
            .current()
            .map_or_else(String::new, |t| t.text.clone());
        let current_pos = self.buffer.current().map_or(1, |t| t.start_position);
        let mut literal = String::new();

        use MessageType::*;
        match message_type {
            SectionWarningOverlineTooShortForTitle => {
                let has_overline = self
                    .buffer
                    .slot(ZED - 2)
                    .is_some_and(|t| t.kind == TokenKind::SectionAdornment);
                if has_overline {
                    literal = format!(
                        "{}\n{}\n{}",
                        self.slot_text(ZED - 2),
                        self.slot_text(ZED - 1),
                        current_text
                    );
                    sm.line = self.slot_line(ZED - 2);
                } else {
                    literal = format!("{}\n{}", self.slot_text(ZED - 1), current_text);
                    sm.line = self.slot_line(ZED - 1);
                }
                self.buffer.clear(ZED - 2, ZED - 1);
                self.retag_current_as_text(&literal, sm.line, current_pos);
            }
            SectionWarningUnexpectedTitleOverlineOrTransition => {
                let over = self.buffer.peek_back_to(TokenKind::SectionAdornment);
                let title = self.buffer.peek_back_to(TokenKind::Title);
                let over_text = over.as_ref().map_or("", |t| t.text.as_str());
                let title_text = title.as_ref().map_or("", |t| t.text.as_str());
                literal = format!("{over_text}\n{title_text}\n{current_text}");
                let pos = over.as_ref().map_or(current_pos, |t| t.start_position);
                self.buffer.clear(0, ZED - 1);
                self.retag_current_as_text(&literal, sm.line, pos);
            }
            SectionWarningUnderlineTooShortForTitle => {
                literal = format!("{}\n{}", self.slot_text(ZED - 1), current_text);
                self.buffer.clear(ZED - 1, ZED - 1);
                self.retag_current_as_text(&literal, sm.line, current_pos);
            }
            SectionWarningShortOverline | SectionErrorOverlineUnderlineMismatch => {
                let mut back = ZED - 2;
                let mut indent = String::new();
                if self.buffer.peek_back_kind(2) == Some(TokenKind::Space) {
                    back = ZED - 3;
                    indent = self.slot_text(ZED - 2);
                }
                literal = format!(
                    "{}\n{}{}\n{}",
                    self.slot_text(back),
                    indent,
                    self.slot_text(ZED - 1),
                    current_text
                );
                sm.line = self.slot_line(back);
            }
            SectionWarningShortUnderline | SectionErrorUnexpectedSectionTitle => {
                let back = if self.buffer.peek_back_kind(1) == Some(TokenKind::Space) {
                    ZED - 2
                } else {
                    ZED - 1
                };
                literal = format!("{}\n{}", self.slot_text(back), current_text);
                sm.line = self.slot_line(back);
            }
            SectionErrorInvalidSectionOrTransitionMarker => {
                literal = format!("{}\n{}", self.slot_text(ZED - 1), current_text);
            }
            SectionErrorIncompleteSectionTitle
            | SectionErrorMissingMatchingUnderlineForOverline => {
                literal = format!(
                    "{}\n{}{}",
                    self.slot_text(ZED - 2),
                    self.slot_text(ZED - 1),
                    current_text
                );
                sm.line = self.slot_line(ZED - 2);
            }
            SectionErrorUnexpectedSectionTitleOrTransition => {
                literal = current_text.clone();
                sm.line = current_line;
            }
            SectionErrorTitleLevelInconsistent => {
                if self.buffer.peek_back_kind(2) == Some(TokenKind::SectionAdornment) {
                    literal = format!(
                        "{}\n{}\n{}",
                        self.slot_text(ZED - 2),
                        self.slot_text(ZED - 1),
                        current_text
                    );
                    sm.line = self.slot_line(ZED - 2);
                } else {
                    literal = format!("{}\n{}", self.slot_text(ZED - 1), current_text);
                    sm.line = self.slot_line(ZED - 1);
                }
            }
            InlineMarkupWarningExplicitMarkupWithUnIndent => {
                if let Some(next) = self.buffer.peek(1) {
                    sm.line = next.line;
                }
            }
        }

        if !literal.is_empty() {
            sm.node_list
                .push(Node::LiteralBlock(LiteralBlockNode::new(literal, 0)));
        }

        log::debug!(
            "system message {} at line {}",
            message_type,
            sm.line
        );
        if sm.severity >= self.config.report_level {
            self.messages.push(Node::SystemMessage(sm.clone()));
        }
        sm
    }
}
