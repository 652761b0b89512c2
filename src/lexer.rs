//! The lexer: a rune-aware character cursor plus a pull-driven state
//! machine that classifies the input into [`Token`]s.
//!
//! The cursor tracks a position as (line, byte index within the line) but
//! every externally visible measurement is in runes. The end of each line is
//! a synthetic position where [`Lexer::mark`] is `None`; calling
//! [`Lexer::next`] there crosses onto the next line. This keeps adornment
//! and title length checks honest for multi-byte input.
//!
//! States are functions from lexer to next state. The parser pulls tokens
//! through [`Lexer::next_token`], which runs the machine until the FIFO has
//! something to hand out; the lexer is lazy and never scans farther than
//! the parser's peek window demands.

use crate::token::{Token, TokenKind};
use std::collections::VecDeque;

pub(crate) mod comments;
pub(crate) mod inlines;
pub(crate) mod lists;
pub(crate) mod sections;
pub(crate) mod targets;

/// A state function. Returning `None` ends the machine; the lexer then
/// reports `Eof` forever.
pub(crate) struct StateFn(pub(crate) fn(&mut Lexer) -> Option<StateFn>);

#[derive(Clone, Copy)]
struct Pos {
    line: usize,
    index: usize,
}

pub struct Lexer {
    pub name: String,
    lines: Vec<String>,
    /// 0-based current line.
    line: usize,
    /// Byte offset within the current line.
    index: usize,
    /// Byte offset where the pending token starts.
    start: usize,
    /// Rune under the cursor; `None` at end of line.
    mark: Option<char>,
    /// UTF-8 width of `mark` in bytes; 0 at end of line.
    width: usize,
    id: u32,
    queue: VecDeque<Token>,
    state: Option<StateFn>,
    eof: Option<Token>,
    last_kind: Option<TokenKind>,
    prev_kind: Option<TokenKind>,
    in_definition: bool,
}

impl Lexer {
    pub fn new(name: &str, text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(String::from).collect();
        let mut l = Lexer {
            name: name.to_string(),
            lines,
            line: 0,
            index: 0,
            start: 0,
            mark: None,
            width: 0,
            id: 0,
            queue: VecDeque::new(),
            state: Some(StateFn(lex_start)),
            eof: None,
            last_kind: None,
            prev_kind: None,
            in_definition: false,
        };
        if l.lines.is_empty() {
            l.state = None;
        }
        l.set_mark();
        l
    }

    /// Pulls the next token, running the state machine as needed. After the
    /// input is exhausted this returns the same `Eof` token forever.
    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return token;
            }
            match self.state.take() {
                Some(StateFn(f)) => self.state = f(self),
                None => return self.eof_token(),
            }
        }
    }

    fn eof_token(&mut self) -> Token {
        if self.eof.is_none() {
            self.id += 1;
            self.eof = Some(Token::new(
                self.id,
                TokenKind::Eof,
                self.lines.len(),
                0,
                String::new(),
            ));
        }
        self.eof.clone().unwrap()
    }

    // ------------------------------------------------------------------
    // Character cursor
    // ------------------------------------------------------------------

    fn rune_at(&self, pos: Pos) -> Option<char> {
        self.lines
            .get(pos.line)
            .and_then(|l| l.get(pos.index..))
            .and_then(|s| s.chars().next())
    }

    fn step_forward(&self, pos: &mut Pos) {
        match self.rune_at(*pos) {
            Some(c) => pos.index += c.len_utf8(),
            None => {
                if pos.line + 1 < self.lines.len() {
                    pos.line += 1;
                    pos.index = 0;
                }
            }
        }
    }

    fn step_backward(&self, pos: &mut Pos) {
        if pos.index == 0 {
            if pos.line > 0 {
                pos.line -= 1;
                pos.index = self.lines[pos.line].len();
            }
        } else {
            let line = &self.lines[pos.line];
            let mut i = pos.index - 1;
            while i > 0 && !line.is_char_boundary(i) {
                i -= 1;
            }
            pos.index = i;
        }
    }

    fn set_mark(&mut self) {
        self.mark = self.rune_at(Pos {
            line: self.line,
            index: self.index,
        });
        self.width = self.mark.map_or(0, char::len_utf8);
    }

    /// Advances one rune and returns the new mark and width. At end of line
    /// the mark is `None`; a second call crosses to the next line.
    pub fn next(&mut self) -> (Option<char>, usize) {
        let mut pos = Pos {
            line: self.line,
            index: self.index,
        };
        let crossing = self.rune_at(pos).is_none();
        self.step_forward(&mut pos);
        if crossing && pos.line != self.line {
            self.start = 0;
        }
        self.line = pos.line;
        self.index = pos.index;
        self.set_mark();
        (self.mark, self.width)
    }

    /// Moves back `n` runes. Crossing a line boundary lands on the previous
    /// line's end-of-line position; backing off the start of input is a
    /// no-op.
    pub fn backup(&mut self, n: usize) {
        let mut pos = Pos {
            line: self.line,
            index: self.index,
        };
        for _ in 0..n {
            self.step_backward(&mut pos);
        }
        self.line = pos.line;
        self.index = pos.index;
        self.set_mark();
    }

    /// Looks ahead `n` runes without moving. Returns `None` for the
    /// end-of-line position.
    pub fn peek(&self, n: usize) -> Option<char> {
        let mut pos = Pos {
            line: self.line,
            index: self.index,
        };
        for _ in 0..n {
            self.step_forward(&mut pos);
        }
        self.rune_at(pos)
    }

    /// Looks behind `n` runes without moving. Returns `None` across line
    /// boundaries (the end-of-line position).
    pub fn peek_back(&self, n: usize) -> Option<char> {
        let mut pos = Pos {
            line: self.line,
            index: self.index,
        };
        for _ in 0..n {
            self.step_backward(&mut pos);
        }
        self.rune_at(pos)
    }

    /// Repositions the cursor; `line` is 1-based, `index` is a byte offset
    /// within that line. Used by table-driven tests.
    pub fn goto_location(&mut self, index: usize, line: usize) {
        self.line = line.saturating_sub(1);
        self.index = index;
        self.start = index;
        self.set_mark();
    }

    pub fn mark(&self) -> Option<char> {
        self.mark
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based number of the current line.
    pub fn line_number(&self) -> usize {
        self.line + 1
    }

    pub fn is_last_line(&self) -> bool {
        self.line + 1 >= self.lines.len()
    }

    pub fn current_line(&self) -> &str {
        self.lines.get(self.line).map_or("", String::as_str)
    }

    /// The line after the current one, or `None` at the last line. A blank
    /// next line and absence are treated identically by callers.
    pub fn peek_next_line(&self) -> Option<&str> {
        self.lines.get(self.line + 1).map(String::as_str)
    }

    // ------------------------------------------------------------------
    // Machine plumbing
    // ------------------------------------------------------------------

    pub(crate) fn at_eol(&self) -> bool {
        self.mark.is_none()
    }

    fn line_is_blank(&self) -> bool {
        self.current_line().trim().is_empty()
    }

    pub(crate) fn line_text(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    pub(crate) fn line_index(&self) -> usize {
        self.line
    }

    pub(crate) fn rest_of_line(&self) -> &str {
        &self.current_line()[self.index..]
    }

    pub(crate) fn advance(&mut self, runes: usize) {
        for _ in 0..runes {
            if self.at_eol() {
                break;
            }
            self.next();
        }
    }

    fn advance_line(&mut self) {
        if self.line + 1 < self.lines.len() {
            self.line += 1;
        }
        self.index = 0;
        self.start = 0;
        self.set_mark();
    }

    /// Moves the cursor to the end of the line content, excluding trailing
    /// whitespace.
    pub(crate) fn seek_trimmed_end(&mut self) {
        self.index = self.current_line().trim_end().len();
        self.set_mark();
    }

    /// Skips to the true end of line, dropping anything pending.
    pub(crate) fn seek_line_end(&mut self) {
        self.index = self.current_line().len();
        self.start = self.index;
        self.set_mark();
    }

    pub(crate) fn emit(&mut self, kind: TokenKind) {
        let text = self.current_line()[self.start..self.index].to_string();
        self.emit_with_text(kind, text);
    }

    pub(crate) fn emit_with_text(&mut self, kind: TokenKind, text: String) {
        self.id += 1;
        let start_position = self.current_line()[..self.start].chars().count() + 1;
        let token = Token::new(self.id, kind, self.line_number(), start_position, text);
        log::trace!("lexer {} emit {token}", self.name);
        self.queue.push_back(token);
        self.start = self.index;
        self.prev_kind = self.last_kind;
        self.last_kind = Some(kind);
    }

    fn emit_blank_line(&mut self) {
        self.index = self.current_line().len();
        self.emit_with_text(TokenKind::BlankLine, "\n".to_string());
        self.set_mark();
    }

    /// Emits the pending slice as `kind` with trailing whitespace removed.
    /// Emits nothing when the trimmed slice is empty.
    pub(crate) fn emit_trimmed(&mut self, kind: TokenKind) {
        let text = self.current_line()[self.start..self.index]
            .trim_end()
            .to_string();
        if text.is_empty() {
            self.start = self.index;
            return;
        }
        self.emit_with_text(kind, text);
    }

    /// Consumes a run of spaces and tabs, emitting a `Space` token when the
    /// run is non-empty.
    pub(crate) fn consume_space_run(&mut self) {
        while matches!(self.mark, Some(' ') | Some('\t')) {
            self.next();
        }
        if self.index > self.start {
            self.emit(TokenKind::Space);
        }
    }

    pub(crate) fn start_offset(&self) -> usize {
        self.start
    }

    /// Drops any pending slice by moving the token start to the cursor.
    pub(crate) fn sync_start(&mut self) {
        self.start = self.index;
    }

    pub(crate) fn last_kind(&self) -> Option<TokenKind> {
        self.last_kind
    }

    pub(crate) fn prev_kind(&self) -> Option<TokenKind> {
        self.prev_kind
    }

    /// The kind of the most recent non-`Space` token.
    pub(crate) fn last_solid_kind(&self) -> Option<TokenKind> {
        if self.last_kind == Some(TokenKind::Space) {
            self.prev_kind
        } else {
            self.last_kind
        }
    }

    /// True when the cursor sits at the start of a block: the start of
    /// input, after a blank line, or directly under a section adornment
    /// (with at most an indent in between).
    pub(crate) fn at_block_start(&self) -> bool {
        match (self.prev_kind, self.last_kind) {
            (_, None) => true,
            (_, Some(TokenKind::BlankLine)) | (_, Some(TokenKind::SectionAdornment)) => true,
            (
                None | Some(TokenKind::BlankLine) | Some(TokenKind::SectionAdornment),
                Some(TokenKind::Space),
            ) => true,
            _ => false,
        }
    }

    pub(crate) fn in_definition(&self) -> bool {
        self.in_definition
    }

    pub(crate) fn set_in_definition(&mut self, value: bool) {
        self.in_definition = value;
    }
}

/// Entry state: lands on the first rune of the next pending token and
/// dispatches on what the surrounding lines make of it.
pub(crate) fn lex_start(l: &mut Lexer) -> Option<StateFn> {
    loop {
        if l.index == 0 && l.start == 0 && l.line_is_blank() && !l.lines.is_empty() {
            l.emit_blank_line();
            if l.is_last_line() {
                return None;
            }
            l.advance_line();
            continue;
        }
        if l.at_eol() {
            if l.is_last_line() {
                return None;
            }
            l.advance_line();
            continue;
        }
        break;
    }

    if l.index == 0 {
        if matches!(l.mark, Some(' ') | Some('\t')) {
            l.consume_space_run();
        } else if !lists::is_definition_term(l) {
            // any other column-0 construct ends an open definition body
            l.set_in_definition(false);
        }
    }

    if l.at_eol() {
        // whitespace-only tail; loop back around
        return Some(StateFn(lex_start));
    }

    if sections::is_transition(l) {
        return Some(StateFn(sections::lex_transition));
    }
    if sections::is_adornment_line(l) {
        return Some(StateFn(sections::lex_adornment));
    }
    if sections::is_title_candidate(l) {
        return Some(StateFn(sections::lex_title));
    }
    if targets::is_hyperlink_target(l) {
        return Some(StateFn(targets::lex_hyperlink_target));
    }
    if comments::is_comment(l) {
        return Some(StateFn(comments::lex_comment));
    }
    if lists::is_bullet(l) {
        return Some(StateFn(lists::lex_bullet));
    }
    if lists::is_enum_list(l) {
        return Some(StateFn(lists::lex_enum_list));
    }
    if lists::is_definition_term(l) && l.index == 0 {
        return Some(StateFn(lists::lex_definition_term));
    }
    if l.in_definition() && l.index > 0 {
        return Some(StateFn(lists::lex_definition_text));
    }
    if comments::is_blockquote(l) {
        return Some(StateFn(comments::lex_blockquote));
    }
    Some(StateFn(inlines::lex_text))
}
