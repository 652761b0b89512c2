//! The token buffer: a fixed nine-slot window over the lexer's stream.
//!
//! Slot 4 ("zed") holds the current token, slots 0..=3 the most recently
//! consumed tokens, and slots 5..=8 the peek-ahead. Three backward slots
//! are exactly what section error recovery needs to reconstruct the
//! (overline, title, space, underline) context when a diagnostic fires on
//! the underline.

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Index of the current token in the window.
pub(crate) const ZED: usize = 4;

const BUFFER_SIZE: usize = 9;

pub(crate) struct TokenBuffer {
    slots: [Option<Token>; BUFFER_SIZE],
    lexer: Lexer,
}

impl TokenBuffer {
    pub(crate) fn new(lexer: Lexer) -> Self {
        TokenBuffer {
            slots: Default::default(),
            lexer,
        }
    }

    pub(crate) fn current(&self) -> Option<&Token> {
        self.slots[ZED].as_ref()
    }

    pub(crate) fn slot(&self, index: usize) -> Option<&Token> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Shifts the window left `n` times, pulling from the lexer whenever
    /// the current slot comes up empty. Returns the new current token.
    pub(crate) fn next(&mut self, n: usize) -> Option<Token> {
        for _ in 0..n {
            for x in 0..BUFFER_SIZE - 1 {
                self.slots[x] = self.slots[x + 1].take();
            }
            if self.slots[ZED].is_none() {
                self.slots[ZED] = Some(self.lexer.next_token());
            }
        }
        self.slots[ZED].clone()
    }

    /// Looks ahead `n` positions, filling the forward slots from the lexer
    /// as needed. `n` is capped by the window (four slots).
    pub(crate) fn peek(&mut self, n: usize) -> Option<Token> {
        let n = n.min(BUFFER_SIZE - 1 - ZED);
        let mut item = None;
        for i in 1..=n {
            if self.slots[ZED + i].is_none() {
                self.slots[ZED + i] = Some(self.lexer.next_token());
            }
            item = self.slots[ZED + i].clone();
        }
        item
    }

    pub(crate) fn peek_kind(&mut self, n: usize) -> Option<TokenKind> {
        self.peek(n).map(|t| t.kind)
    }

    /// Looks back `n` positions. Looking back more than three positions is
    /// a programmer error.
    pub(crate) fn peek_back(&self, n: usize) -> Option<Token> {
        assert!(
            (1..=ZED - 1).contains(&n),
            "peek_back window is three tokens, got {n}"
        );
        self.slots[ZED - n].clone()
    }

    pub(crate) fn peek_back_kind(&self, n: usize) -> Option<TokenKind> {
        self.peek_back(n).map(|t| t.kind)
    }

    /// Scans the backward slots nearest-first for a token of `kind`.
    pub(crate) fn peek_back_to(&self, kind: TokenKind) -> Option<Token> {
        (0..ZED)
            .rev()
            .find_map(|i| self.slots[i].clone().filter(|t| t.kind == kind))
    }

    /// Peeks forward past tokens of `skip`, returning the first token of a
    /// different kind within the window.
    pub(crate) fn peek_skip(&mut self, skip: TokenKind) -> Option<Token> {
        let mut count = 1;
        loop {
            let token = self.peek(count)?;
            if token.kind != skip {
                return Some(token);
            }
            if count >= BUFFER_SIZE - 1 - ZED {
                return None;
            }
            count += 1;
        }
    }

    /// Shifts the window right one position so the next `next(1)` re-reads
    /// the current token. The oldest backward slot falls off.
    pub(crate) fn backup(&mut self) {
        for x in (1..BUFFER_SIZE).rev() {
            self.slots[x] = self.slots[x - 1].take();
        }
    }

    /// Nulls out slots `begin..=end` during diagnostic reconstruction.
    pub(crate) fn clear(&mut self, begin: usize, end: usize) {
        for i in begin..=end.min(BUFFER_SIZE - 1) {
            self.slots[i] = None;
        }
    }

    /// Replaces the current slot; used once per recovery to re-tag the
    /// offending token as `Text` before rewinding.
    pub(crate) fn set_current(&mut self, token: Token) {
        self.slots[ZED] = Some(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(input: &str) -> TokenBuffer {
        TokenBuffer::new(Lexer::new("test", input))
    }

    #[test]
    fn window_shape_after_next() {
        let mut b = buffer("Test\n=====\n\nParagraph.");

        let t = b.next(1).unwrap();
        assert_eq!((t.kind, t.text.as_str()), (TokenKind::Title, "Test"));
        assert!(b.peek_back(1).is_none());

        b.next(1);
        assert_eq!(b.peek_back_kind(1), Some(TokenKind::Title));
        assert_eq!(
            b.current().map(|t| t.kind),
            Some(TokenKind::SectionAdornment)
        );

        b.next(1);
        b.next(1);
        let t = b.current().cloned().unwrap();
        assert_eq!((t.kind, t.text.as_str()), (TokenKind::Text, "Paragraph."));
        assert_eq!(b.peek_back_kind(1), Some(TokenKind::BlankLine));
        assert_eq!(b.peek_back_kind(2), Some(TokenKind::SectionAdornment));
        assert_eq!(b.peek_back_kind(3), Some(TokenKind::Title));
        // forward slots stay empty until peeked
        assert!(b.slot(ZED + 1).is_none());
        assert!(b.slot(ZED + 2).is_none());
    }

    #[test]
    fn peek_fills_forward_slots_only() {
        let mut b = buffer("Test\n=====\n\nParagraph.");
        let t = b.peek(3).unwrap();
        assert_eq!(t.kind, TokenKind::BlankLine);
        assert_eq!(b.slot(ZED + 1).map(|t| t.kind), Some(TokenKind::Title));
        assert_eq!(
            b.slot(ZED + 2).map(|t| t.kind),
            Some(TokenKind::SectionAdornment)
        );
        assert!(b.current().is_none());

        // next consumes the peeked tokens before pulling the lexer again
        let t = b.next(1).unwrap();
        assert_eq!(t.kind, TokenKind::Title);
    }

    #[test]
    fn peek_skip_spaces() {
        let mut b = buffer("=====\n   Title\n=====");
        b.next(1);
        let t = b.peek_skip(TokenKind::Space).unwrap();
        assert_eq!(t.kind, TokenKind::Title);
    }

    #[test]
    fn backup_rewinds_one() {
        let mut b = buffer("Test\n=====");
        b.next(2);
        assert_eq!(
            b.current().map(|t| t.kind),
            Some(TokenKind::SectionAdornment)
        );
        b.backup();
        let t = b.next(1).unwrap();
        assert_eq!(t.kind, TokenKind::SectionAdornment);
    }

    #[test]
    fn retag_then_backup_replays_as_text() {
        let mut b = buffer("Test\n=====");
        b.next(2);
        let current = b.current().cloned().unwrap();
        let retagged = Token::new(
            current.id,
            TokenKind::Text,
            current.line,
            current.start_position,
            "Test\n=====".to_string(),
        );
        b.set_current(retagged);
        b.backup();
        let t = b.next(1).unwrap();
        assert_eq!(t.kind, TokenKind::Text);
        assert_eq!(t.text, "Test\n=====");
    }

    #[test]
    #[should_panic(expected = "peek_back window")]
    fn peek_back_beyond_window_panics() {
        let b = buffer("Test");
        b.peek_back(4);
    }

    #[test]
    fn peek_back_to_scans_nearest_first() {
        let mut b = buffer("Test\n=====\n\nParagraph.");
        b.next(4);
        let t = b.peek_back_to(TokenKind::SectionAdornment).unwrap();
        assert_eq!(t.text, "=====");
        assert!(b.peek_back_to(TokenKind::Bullet).is_none());
    }
}
