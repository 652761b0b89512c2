//! Paragraph text and inline markup.
//!
//! Inline constructs are emitted as matched `…Open`/`…Close` pairs around a
//! plain `Text` payload, all on one line. A delimiter that has no valid
//! closing partner stays inside the surrounding text run.

use super::{Lexer, StateFn, lex_start};
use crate::token::TokenKind;

const OPENERS: [char; 9] = ['\'', '"', '(', '[', '{', '<', '-', '/', ':'];

fn role_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '+')
}

/// True when an inline start-string of `delim_runes` runes may open at the
/// cursor: preceded by nothing, whitespace, or an opening punctuation, and
/// followed by a non-space rune.
fn inline_start_ok(l: &Lexer, delim_runes: usize) -> bool {
    let before_ok = l.index() == 0
        || match l.peek_back(1) {
            None => true,
            Some(c) => c.is_whitespace() || OPENERS.contains(&c),
        };
    let after_ok = l
        .peek(delim_runes)
        .is_some_and(|c| !c.is_whitespace());
    before_ok && after_ok
}

/// Finds the byte offset of the closing `delim` in `line`, at or after
/// `from`, requiring a non-space rune directly before it.
fn find_inline_close(line: &str, from: usize, delim: &str) -> Option<usize> {
    let mut search = from;
    while let Some(rel) = line[search..].find(delim) {
        let at = search + rel;
        if at > from && !line[..at].ends_with([' ', '\t']) {
            return Some(at);
        }
        search = at + delim.len();
    }
    None
}

fn flush_text(l: &mut Lexer) {
    if l.index() > l.start_offset() {
        l.emit(TokenKind::Text);
    } else {
        l.sync_start();
    }
}

/// Emits an open/payload/close triple for a symmetric delimiter already
/// validated by the caller. `close` is the byte offset of the close string.
fn emit_span(l: &mut Lexer, open: TokenKind, close_kind: TokenKind, delim_runes: usize, close: usize) {
    flush_text(l);
    l.advance(delim_runes);
    l.emit(open);
    while l.index() < close {
        l.advance(1);
    }
    l.emit(TokenKind::Text);
    l.advance(delim_runes);
    l.emit(close_kind);
}

/// Emits `:name:` as role open/name/close tokens. The cursor sits on the
/// first colon; `name_end` is the byte offset of the trailing colon.
fn emit_role(l: &mut Lexer, name_end: usize) {
    flush_text(l);
    l.advance(1);
    l.emit(TokenKind::InlineInterpretedTextRoleOpen);
    while l.index() < name_end {
        l.advance(1);
    }
    l.emit(TokenKind::Text);
    l.advance(1);
    l.emit(TokenKind::InlineInterpretedTextRoleClose);
}

/// Matches `:name:` starting at byte `at`; returns the offset of the
/// closing colon.
fn role_at(line: &str, at: usize) -> Option<usize> {
    let rest = &line[at..];
    if !rest.starts_with(':') {
        return None;
    }
    let inner = &rest[1..];
    let end = inner.find(':')?;
    if end == 0 || !inner[..end].chars().all(role_name_char) {
        return None;
    }
    Some(at + 1 + end)
}

pub(crate) fn lex_text(l: &mut Lexer) -> Option<StateFn> {
    loop {
        if l.at_eol() {
            l.emit_trimmed(TokenKind::Text);
            return Some(StateFn(lex_start));
        }
        let line = l.current_line().to_string();
        let at = l.index();
        match l.mark().unwrap_or(' ') {
            '\\' => {
                flush_text(l);
                l.advance(1);
                l.emit(TokenKind::Escape);
            }
            '*' => {
                if l.peek(1) == Some('*') && inline_start_ok(l, 2) {
                    if let Some(close) = find_inline_close(&line, at + 2, "**") {
                        emit_span(
                            l,
                            TokenKind::InlineStrongOpen,
                            TokenKind::InlineStrongClose,
                            2,
                            close,
                        );
                        continue;
                    }
                }
                if l.peek(1) != Some('*')
                    && inline_start_ok(l, 1)
                    && let Some(close) = find_inline_close(&line, at + 1, "*")
                {
                    emit_span(
                        l,
                        TokenKind::InlineEmphasisOpen,
                        TokenKind::InlineEmphasisClose,
                        1,
                        close,
                    );
                    continue;
                }
                l.advance(1);
            }
            '`' => {
                if l.peek(1) == Some('`') && inline_start_ok(l, 2) {
                    if let Some(close) = find_inline_close(&line, at + 2, "``") {
                        emit_span(
                            l,
                            TokenKind::InlineLiteralOpen,
                            TokenKind::InlineLiteralClose,
                            2,
                            close,
                        );
                        continue;
                    }
                } else if l.peek(1) != Some('`')
                    && inline_start_ok(l, 1)
                    && let Some(close) = find_inline_close(&line, at + 1, "`")
                {
                    emit_span(
                        l,
                        TokenKind::InlineInterpretedTextOpen,
                        TokenKind::InlineInterpretedTextClose,
                        1,
                        close,
                    );
                    // trailing role suffix
                    if l.mark() == Some(':')
                        && let Some(name_end) = role_at(l.current_line(), l.index())
                    {
                        emit_role(l, name_end);
                    }
                    continue;
                }
                l.advance(1);
            }
            ':' => {
                // role prefix, only when a backtick follows the closing colon
                if let Some(name_end) = role_at(&line, at)
                    && line.as_bytes().get(name_end + 1) == Some(&b'`')
                    && inline_start_ok(l, 1)
                {
                    emit_role(l, name_end);
                    continue;
                }
                l.advance(1);
            }
            _ => l.advance(1),
        }
    }
}
