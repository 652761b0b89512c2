//! Section adornment, title, and transition disambiguation.
//!
//! An all-punctuation run of three or more characters is always a
//! `SectionAdornment`. Runs of two are accepted only in section positions
//! (directly under a title candidate, or over a candidate that is itself
//! followed by another run); the parser is the one that demotes short
//! skeletons to paragraphs with a warning.

use super::{Lexer, StateFn, lex_start};
use crate::token::TokenKind;

/// The repeated character of an adornment run, or `None` when the slice is
/// not a run. Runs shorter than two characters do not count.
pub(crate) fn adornment_run(s: &str) -> Option<char> {
    let trimmed = s.trim_end();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    if !first.is_ascii_punctuation() {
        return None;
    }
    if trimmed.chars().count() < 2 {
        return None;
    }
    chars.all(|c| c == first).then_some(first)
}

/// A transition is a run of four or more adornment characters alone on an
/// interior line, with blank lines on both sides.
pub(crate) fn is_transition(l: &Lexer) -> bool {
    if l.index() != 0 {
        return false;
    }
    let line = l.current_line();
    if adornment_run(line).is_none() || line.trim_end().chars().count() < 4 {
        return false;
    }
    let prev_blank = l.last_kind() == Some(TokenKind::BlankLine);
    let next_blank = l
        .peek_next_line()
        .is_some_and(|next| next.trim().is_empty());
    prev_blank && next_blank
}

pub(crate) fn is_adornment_line(l: &Lexer) -> bool {
    let rest = l.rest_of_line();
    if adornment_run(rest).is_none() {
        return false;
    }
    let len = rest.trim_end().chars().count();
    if len >= 3 {
        return true;
    }
    // short run: underline position
    if l.last_solid_kind() == Some(TokenKind::Title) {
        return true;
    }
    // short run: overline position
    if let Some(next) = l.peek_next_line()
        && !next.trim().is_empty()
        && adornment_run(next.trim_start()).is_none()
        && let Some(after) = l.line_text(l.line_index() + 2)
        && adornment_run(after).is_some()
    {
        return true;
    }
    false
}

/// A line becomes a `Title` when it starts a block and the following line
/// is an adornment run. Short or mismatched runs still produce a title
/// here; the parser sorts out the diagnostics.
pub(crate) fn is_title_candidate(l: &Lexer) -> bool {
    if !l.at_block_start() {
        return false;
    }
    // an indented run still counts: the parser reports the indented
    // underline rather than losing the title
    l.peek_next_line()
        .is_some_and(|next| adornment_run(next.trim_start()).is_some())
}

pub(crate) fn lex_adornment(l: &mut Lexer) -> Option<StateFn> {
    l.seek_trimmed_end();
    l.emit(TokenKind::SectionAdornment);
    l.seek_line_end();
    Some(StateFn(lex_start))
}

pub(crate) fn lex_title(l: &mut Lexer) -> Option<StateFn> {
    l.seek_trimmed_end();
    l.emit(TokenKind::Title);
    l.seek_line_end();
    Some(StateFn(lex_start))
}

pub(crate) fn lex_transition(l: &mut Lexer) -> Option<StateFn> {
    l.seek_trimmed_end();
    l.emit(TokenKind::Transition);
    l.seek_line_end();
    Some(StateFn(lex_start))
}
