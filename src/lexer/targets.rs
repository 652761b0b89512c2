//! Hyperlink target lexing.
//!
//! Recognized forms:
//!
//! ```text
//! .. _name: https://example.com
//! .. _`phrase name`: https://example.com
//! .. _indirect: other-target_
//! .. _indirect: `phrase target`_
//! .. __: https://example.com
//! __ https://example.com
//! ```
//!
//! Malformed targets still emit best-effort hyperlink-target tokens so the
//! parser's diagnostics stay local to the offending line.

use super::{Lexer, StateFn, lex_start};
use crate::token::TokenKind;

pub(crate) fn is_hyperlink_target(l: &Lexer) -> bool {
    if l.mark() == Some('.') && l.peek(1) == Some('.') && l.peek(2) == Some(' ') {
        return l.peek(3) == Some('_');
    }
    // anonymous shorthand at the start of a line
    l.index() == 0 && l.mark() == Some('_') && l.peek(1) == Some('_') && l.peek(2) == Some(' ')
}

pub(crate) fn lex_hyperlink_target(l: &mut Lexer) -> Option<StateFn> {
    if l.mark() == Some('_') {
        // "__ URI"
        l.advance(2);
        l.emit(TokenKind::HyperlinkTargetStart);
        l.consume_space_run();
        return lex_target_block(l);
    }

    l.advance(2);
    l.emit(TokenKind::HyperlinkTargetStart);
    l.consume_space_run();

    if l.mark() == Some('_') {
        while l.mark() == Some('_') {
            l.advance(1);
        }
        l.emit(TokenKind::HyperlinkTargetPrefix);
    }
    if l.mark() != Some(':') {
        lex_target_name(l);
    }
    if l.mark() == Some(':') {
        l.advance(1);
        l.emit(TokenKind::HyperlinkTargetSuffix);
        if !l.at_eol() {
            l.consume_space_run();
            return lex_target_block(l);
        }
        // the block may start on the next line, indented
        if continues_indented(l) {
            l.next();
            l.consume_space_run();
            return lex_target_block(l);
        }
    }
    Some(StateFn(lex_start))
}

fn continues_indented(l: &Lexer) -> bool {
    l.peek_next_line()
        .is_some_and(|next| !next.trim().is_empty() && next.starts_with([' ', '\t']))
}

/// Lexes the reference name up to the `:` suffix. Quoted phrase names are
/// wrapped in `HyperlinkTargetQuote` tokens.
fn lex_target_name(l: &mut Lexer) {
    let mut inquote = false;
    loop {
        match l.mark() {
            Some('`') if !inquote => {
                l.advance(1);
                l.emit(TokenKind::HyperlinkTargetQuote);
                inquote = true;
            }
            Some('`') => {
                l.emit(TokenKind::HyperlinkTargetName);
                l.advance(1);
                l.emit(TokenKind::HyperlinkTargetQuote);
                return;
            }
            Some(':') if !inquote && l.peek_back(1) != Some('\\') => {
                if l.index() > l.start_offset() {
                    l.emit(TokenKind::HyperlinkTargetName);
                }
                return;
            }
            None => {
                if l.index() > l.start_offset() {
                    l.emit(TokenKind::HyperlinkTargetName);
                }
                return;
            }
            _ => {
                l.advance(1);
            }
        }
    }
}

/// Lexes the target body: a URI (possibly wrapped over indented lines), an
/// indirect reference ending in `_`, or a quoted phrase reference.
fn lex_target_block(l: &mut Lexer) -> Option<StateFn> {
    if l.at_eol() {
        return Some(StateFn(lex_start));
    }

    if l.mark() == Some('`') {
        l.advance(1);
        l.emit(TokenKind::InlineReferenceOpen);
        loop {
            match l.mark() {
                Some('`') => {
                    l.emit(TokenKind::InlineReferenceText);
                    l.advance(1);
                    if l.mark() == Some('_') {
                        l.advance(1);
                    }
                    l.emit(TokenKind::InlineReferenceClose);
                    break;
                }
                None => {
                    l.emit(TokenKind::InlineReferenceText);
                    break;
                }
                _ => {
                    l.advance(1);
                }
            }
        }
        return Some(StateFn(lex_start));
    }

    let rest = l.rest_of_line().trim_end();
    if rest.len() > 1 && rest.ends_with('_') && !rest.ends_with("\\_") && !rest.contains(' ') {
        // indirect reference: "other-target_"
        let name_runes = rest.chars().count() - 1;
        l.advance(name_runes);
        l.emit(TokenKind::InlineReferenceText);
        l.advance(1);
        l.emit(TokenKind::InlineReferenceClose);
        l.seek_line_end();
        return Some(StateFn(lex_start));
    }

    l.seek_trimmed_end();
    l.emit(TokenKind::HyperlinkTargetUri);
    l.seek_line_end();
    while continues_indented(l) && !l.is_last_line() {
        l.next();
        l.consume_space_run();
        l.seek_trimmed_end();
        l.emit(TokenKind::HyperlinkTargetUri);
        l.seek_line_end();
    }
    Some(StateFn(lex_start))
}
