//! Comment marks and blockquote entry.

use super::{Lexer, StateFn, inlines, lex_start};
use crate::token::TokenKind;

/// `..` followed by whitespace or end of line opens a comment, unless the
/// hyperlink-target probe claimed it first.
pub(crate) fn is_comment(l: &Lexer) -> bool {
    l.mark() == Some('.')
        && l.peek(1) == Some('.')
        && matches!(l.peek(2), None | Some(' ') | Some('\t'))
}

/// After a blank line, an indented line that matched no richer construct
/// is a blockquote line; equally indented followers continue the quote.
pub(crate) fn is_blockquote(l: &Lexer) -> bool {
    l.index() > 0
        && l.last_kind() == Some(TokenKind::Space)
        && matches!(
            l.prev_kind(),
            None | Some(TokenKind::BlankLine) | Some(TokenKind::BlockQuote)
        )
        && !l.in_definition()
}

pub(crate) fn lex_comment(l: &mut Lexer) -> Option<StateFn> {
    l.advance(2);
    l.emit(TokenKind::CommentMark);
    if l.at_eol() {
        return Some(StateFn(lex_start));
    }
    l.consume_space_run();
    if l.at_eol() {
        return Some(StateFn(lex_start));
    }
    Some(StateFn(inlines::lex_text))
}

pub(crate) fn lex_blockquote(l: &mut Lexer) -> Option<StateFn> {
    l.seek_trimmed_end();
    l.emit(TokenKind::BlockQuote);
    l.seek_line_end();
    Some(StateFn(lex_start))
}
