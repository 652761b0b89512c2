//! Section construction and the section-level registry.

use super::Parser;
use crate::document::{Node, SectionNode};
use crate::messages::MessageType;
use crate::token::{Token, TokenKind};

/// One registered adornment pattern. Position in the registry is the
/// level minus one.
#[derive(Debug)]
struct LevelEntry {
    rune: char,
    overline: bool,
    section_ids: Vec<u32>,
}

/// Append-only table of encountered adornment patterns. Sections are
/// referred to by their stable numeric ids, never by references into the
/// tree.
pub(crate) struct SectionLevels {
    entries: Vec<LevelEntry>,
    last_level: usize,
}

impl SectionLevels {
    pub(crate) fn new() -> Self {
        SectionLevels {
            entries: Vec::new(),
            last_level: 0,
        }
    }

    /// Registers a section's adornment pattern. A known pattern reuses its
    /// level; a new pattern is only consistent when it opens the next
    /// deeper level than the deepest seen so far.
    pub(crate) fn add(&mut self, rune: char, overline: bool, id: u32) -> Result<usize, ()> {
        if let Some(pos) = self
            .entries
            .iter()
            .position(|e| e.rune == rune && e.overline == overline)
        {
            self.entries[pos].section_ids.push(id);
            self.last_level = pos + 1;
            return Ok(pos + 1);
        }
        let level = self.entries.len() + 1;
        if level != self.last_level + 1 {
            return Err(());
        }
        self.entries.push(LevelEntry {
            rune,
            overline,
            section_ids: vec![id],
        });
        self.last_level = level;
        Ok(level)
    }

    /// The level assigned to a pattern, if it has been seen.
    pub(crate) fn find(&self, rune: char, overline: bool) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.rune == rune && e.overline == overline)
            .map(|pos| pos + 1)
    }

    /// Number of distinct levels registered.
    pub(crate) fn depth(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Default)]
struct SectionSubState {
    over_adorn: Option<Token>,
    indent: Option<Token>,
    title: Option<Token>,
    under_adorn: Option<Token>,
}

impl Parser {
    /// Parses a section skeleton starting from a `SectionAdornment` token,
    /// emitting diagnostics and recovering on every malformed shape.
    pub(crate) fn section(&mut self, token: &Token) {
        let section_space = self.buffer.peek_skip(TokenKind::Space);
        let space_kind = section_space.as_ref().map(|t| t.kind);
        let p_back = self.buffer.peek_back(1);
        let back_kind = p_back.as_ref().map(|t| t.kind);
        let zed_len = token.length;
        let mut s = SectionSubState::default();

        if space_kind == Some(TokenKind::Title) {
            // section with overline
            if zed_len < 3 {
                self.buffer.next(2);
                if self.buffer.peek_back_kind(1) == Some(TokenKind::Space) {
                    self.buffer.next(2);
                    let sm = self
                        .system_message(MessageType::SectionWarningUnexpectedTitleOverlineOrTransition);
                    self.append(Node::SystemMessage(sm));
                    return;
                }
                let sm = self.system_message(MessageType::SectionWarningOverlineTooShortForTitle);
                self.append(Node::SystemMessage(sm));
                return;
            }
            if back_kind == Some(TokenKind::Space) {
                // the overline is indented
                let sm =
                    self.system_message(MessageType::SectionErrorUnexpectedSectionTitleOrTransition);
                self.append(Node::SystemMessage(sm));
                return;
            }
            s.over_adorn = Some(token.clone());
            self.buffer.next(1);
            loop {
                let Some(current) = self.buffer.current().cloned() else {
                    break;
                };
                match current.kind {
                    TokenKind::Title => {
                        s.title = Some(current);
                        self.buffer.next(1);
                    }
                    TokenKind::Space => {
                        s.indent = Some(current);
                        self.buffer.next(1);
                    }
                    TokenKind::SectionAdornment => {
                        s.under_adorn = Some(current);
                        break;
                    }
                    _ => break,
                }
            }
        } else if matches!(back_kind, Some(TokenKind::Title) | Some(TokenKind::Space)) {
            // section without overline
            if back_kind == Some(TokenKind::Space) {
                if self.buffer.peek_back_kind(2) == Some(TokenKind::Title) {
                    // the underline is indented
                    let sm = self.system_message(MessageType::SectionErrorUnexpectedSectionTitle);
                    self.append(Node::SystemMessage(sm));
                    return;
                }
                let sm =
                    self.system_message(MessageType::SectionErrorInvalidSectionOrTransitionMarker);
                self.append(Node::SystemMessage(sm));
                return;
            }
            let title_len = p_back.as_ref().map_or(0, |t| t.length);
            if zed_len < 3 && zed_len != title_len {
                let sm = self.system_message(MessageType::SectionWarningUnderlineTooShortForTitle);
                self.append(Node::SystemMessage(sm));
                return;
            }
            s.title = p_back;
            s.under_adorn = Some(token.clone());
        } else if space_kind == Some(TokenKind::Text) {
            // the underline for this overline is missing; classify by what
            // follows the orphaned text
            let space_len = section_space.as_ref().map_or(0, |t| t.length);
            self.buffer.next(2);
            if zed_len < 3 && zed_len != space_len {
                self.buffer.backup();
                let sm = self.system_message(MessageType::SectionWarningOverlineTooShortForTitle);
                self.append(Node::SystemMessage(sm));
                return;
            }
            if self.buffer.peek_kind(1) == Some(TokenKind::BlankLine) {
                let sm = self
                    .system_message(MessageType::SectionErrorMissingMatchingUnderlineForOverline);
                self.append(Node::SystemMessage(sm));
                return;
            }
            let sm = self.system_message(MessageType::SectionErrorIncompleteSectionTitle);
            self.append(Node::SystemMessage(sm));
            return;
        } else if space_kind == Some(TokenKind::SectionAdornment) {
            // missing section title
            self.buffer.next(1);
            let sm = self.system_message(MessageType::SectionErrorInvalidSectionOrTransitionMarker);
            self.append(Node::SystemMessage(sm));
            return;
        } else {
            // EOF, blank line, or anything else where a title belongs
            let sm = self.system_message(MessageType::SectionErrorInvalidSectionOrTransitionMarker);
            self.append(Node::SystemMessage(sm));
            return;
        }

        let (Some(title), Some(under_adorn)) = (s.title.as_ref(), s.under_adorn.as_ref()) else {
            let sm = self.system_message(MessageType::SectionErrorInvalidSectionOrTransitionMarker);
            self.append(Node::SystemMessage(sm));
            return;
        };

        self.next_section_id += 1;
        let mut section = SectionNode::new(
            self.next_section_id,
            title,
            s.over_adorn.as_ref(),
            under_adorn,
            s.indent.as_ref(),
        );

        let rune = under_adorn.text.chars().next().unwrap_or(' ');
        match self
            .section_levels
            .add(rune, s.over_adorn.is_some(), section.id)
        {
            Ok(level) => section.level = level,
            Err(()) => {
                let sm = self.system_message(MessageType::SectionErrorTitleLevelInconsistent);
                // nest the message (and what follows) in the most recent
                // successful section
                self.append(Node::SystemMessage(sm));
                return;
            }
        }
        log::debug!(
            "using section level {} for rune {rune:?}",
            section.level
        );

        // close open sections at or below this level
        while self
            .open_sections
            .last()
            .is_some_and(|top| top.level >= section.level)
        {
            self.fold_top_section();
        }

        self.check_section_lengths(&mut section);
        self.open_sections.push(section);
    }

    /// Appends short-overline/short-underline warnings into the freshly
    /// built section. A rune mismatch outranks the length checks.
    fn check_section_lengths(&mut self, section: &mut SectionNode) {
        let title_span = section.title.length + section.title.indent_length;
        if let Some(over) = &section.over_line {
            if over.rune != section.under_line.rune {
                let sm = self.system_message(MessageType::SectionErrorOverlineUnderlineMismatch);
                section.node_list.push(Node::SystemMessage(sm));
            } else if title_span > over.length {
                let sm = self.system_message(MessageType::SectionWarningShortOverline);
                section.node_list.push(Node::SystemMessage(sm));
            }
        } else if section.under_line.length < title_span {
            let sm = self.system_message(MessageType::SectionWarningShortUnderline);
            section.node_list.push(Node::SystemMessage(sm));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pattern_gets_level_one() {
        let mut levels = SectionLevels::new();
        assert_eq!(levels.add('=', false, 1), Ok(1));
        assert_eq!(levels.depth(), 1);
    }

    #[test]
    fn known_pattern_reuses_level() {
        let mut levels = SectionLevels::new();
        levels.add('=', false, 1).unwrap();
        levels.add('-', false, 2).unwrap();
        assert_eq!(levels.add('=', false, 3), Ok(1));
        assert_eq!(levels.add('-', false, 4), Ok(2));
        assert_eq!(levels.depth(), 2);
    }

    #[test]
    fn overline_distinguishes_patterns() {
        let mut levels = SectionLevels::new();
        levels.add('=', true, 1).unwrap();
        assert_eq!(levels.add('=', false, 2), Ok(2));
        assert_eq!(levels.find('=', true), Some(1));
        assert_eq!(levels.find('=', false), Some(2));
    }

    #[test]
    fn new_pattern_below_deepest_level_is_inconsistent() {
        let mut levels = SectionLevels::new();
        levels.add('=', false, 1).unwrap();
        levels.add('~', false, 2).unwrap();
        // back to level one
        levels.add('=', false, 3).unwrap();
        // a brand-new pattern here would skip level two
        assert_eq!(levels.add('-', false, 4), Err(()));
        // nothing was inserted
        assert_eq!(levels.depth(), 2);
        assert_eq!(levels.find('-', false), None);
    }
}
