//! Bullet, enumerated, and definition list lexing.

use super::{Lexer, StateFn, lex_start};
use crate::token::TokenKind;

const BULLET_CHARS: [char; 6] = ['*', '+', '-', '•', '‣', '⁃'];

pub(crate) fn is_bullet(l: &Lexer) -> bool {
    l.mark().is_some_and(|c| BULLET_CHARS.contains(&c)) && l.peek(1) == Some(' ')
}

/// Byte length of an Arabic enumerator marker (`1.`, `12)`, `(3)`) at the
/// start of `rest`, requiring a space or end of line after the affix.
pub(crate) fn enum_marker_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 0;
    let surround = bytes.first() == Some(&b'(');
    if surround {
        i = 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    match bytes.get(i) {
        Some(b')') if surround => i += 1,
        Some(b'.') | Some(b')') if !surround => i += 1,
        _ => return None,
    }
    match bytes.get(i) {
        None | Some(b' ') | Some(b'\t') => Some(i),
        _ => None,
    }
}

pub(crate) fn is_enum_list(l: &Lexer) -> bool {
    enum_marker_len(l.rest_of_line()).is_some()
}

/// A definition term is an unindented line whose next line is indented,
/// non-blank, and not a section adornment. Terms start a block or follow
/// a previous definition body directly.
pub(crate) fn is_definition_term(l: &Lexer) -> bool {
    if l.index() != 0 {
        return false;
    }
    if !l.at_block_start() && l.last_kind() != Some(TokenKind::DefinitionText) {
        return false;
    }
    let Some(next) = l.peek_next_line() else {
        return false;
    };
    if next.trim().is_empty() {
        return false;
    }
    (next.starts_with(' ') || next.starts_with('\t'))
        && super::sections::adornment_run(next.trim_start()).is_none()
}

pub(crate) fn lex_bullet(l: &mut Lexer) -> Option<StateFn> {
    l.advance(1);
    l.emit(TokenKind::Bullet);
    l.consume_space_run();
    Some(StateFn(lex_start))
}

pub(crate) fn lex_enum_list(l: &mut Lexer) -> Option<StateFn> {
    let marker = enum_marker_len(l.rest_of_line()).unwrap_or(0);
    let marker_runes = l.rest_of_line()[..marker].chars().count();
    l.advance(marker_runes);
    l.emit(TokenKind::EnumListArabic);
    l.consume_space_run();
    Some(StateFn(lex_start))
}

pub(crate) fn lex_definition_term(l: &mut Lexer) -> Option<StateFn> {
    l.set_in_definition(true);
    l.seek_trimmed_end();
    l.emit(TokenKind::DefinitionTerm);
    l.seek_line_end();
    Some(StateFn(lex_start))
}

pub(crate) fn lex_definition_text(l: &mut Lexer) -> Option<StateFn> {
    l.seek_trimmed_end();
    l.emit(TokenKind::DefinitionText);
    l.seek_line_end();
    Some(StateFn(lex_start))
}
