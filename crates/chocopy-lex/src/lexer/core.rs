//! The `Lexer` struct and the top-level `next_token` dispatch.

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use chocopy_util::{LexicalError, LexicalErrorKind, Position};
use std::collections::VecDeque;

/// A character-stream tokenizer for ChocoPy source text.
///
/// `Lexer` is driven purely by calls to [`next_token`](Lexer::next_token):
/// there is no eager tokenization pass. Internally it buffers at most a
/// handful of synthetic layout tokens (`Newline`/`Indent`/`Dedent`) in
/// `queue`, enqueued whenever a physical newline forces the indentation
/// stack to be re-evaluated; everything else is produced and returned
/// immediately.
///
/// # Examples
///
/// ```
/// use chocopy_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("pass");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Pass);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    pub(super) cursor: Cursor<'a>,
    /// The position the current token started at; the scanning helpers
    /// read this rather than recomputing the start every call.
    pub(super) token_start_pos: Position,
    pub(super) token_start_byte: usize,
    /// Bottom is always `0`; strictly increasing from there.
    pub(super) indent_stack: Vec<u32>,
    pub(super) queue: VecDeque<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start_pos: Position::initial(),
            token_start_byte: 0,
            indent_stack: vec![0],
            queue: VecDeque::new(),
        }
    }

    /// Returns the next token. Never returns an `Err` after the stream
    /// is exhausted: once all pending `Dedent`s have been emitted, this
    /// returns `Eof` forever.
    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        if let Some(tok) = self.queue.pop_front() {
            return Ok(tok);
        }

        self.skip_spaces_tabs_cr();
        if self.cursor.current() == '#' {
            self.skip_line_comment();
        }

        if self.cursor.is_at_end() {
            return Ok(self.handle_eof());
        }

        if self.cursor.current() == '\n' {
            self.handle_newline()?;
            return Ok(self
                .queue
                .pop_front()
                .expect("handle_newline always enqueues at least one Newline token"));
        }

        self.mark_token_start();
        self.scan_token()
    }

    pub(super) fn mark_token_start(&mut self) {
        self.token_start_pos = self.cursor.position();
        self.token_start_byte = self.cursor.byte_offset();
    }

    pub(super) fn lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.token_start_byte)
    }

    pub(super) fn token_start(&self) -> Position {
        self.token_start_pos
    }

    pub(super) fn error(&self, kind: LexicalErrorKind) -> LexicalError {
        LexicalError::new(self.cursor.position(), kind)
    }

    fn handle_eof(&mut self) -> Token {
        if self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            Token::new(TokenKind::Dedent, "", self.cursor.position())
        } else {
            Token::new(TokenKind::Eof, "", self.cursor.position())
        }
    }

    fn scan_token(&mut self) -> Result<Token, LexicalError> {
        let c = self.cursor.current();
        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(self.lex_identifier());
        }
        if c.is_ascii_digit() {
            return self.lex_number();
        }
        if c == '"' {
            return self.lex_string();
        }
        self.lex_operator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            let done = tok.kind == TokenKind::Eof;
            out.push(tok.kind);
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn eof_repeats_forever() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn s1_layout_scenario() {
        use TokenKind::*;
        let got = kinds("if True:\n    pass\npass");
        assert_eq!(
            got,
            vec![If, True, Colon, Newline, Indent, Pass, Newline, Dedent, Pass, Eof]
        );
    }

    #[test]
    fn s2_nested_layout_scenario() {
        use TokenKind::*;
        let got = kinds("if True:\n    if False:\n        pass\npass");
        assert_eq!(
            got,
            vec![
                If, True, Colon, Newline, Indent, If, False, Colon, Newline, Indent, Pass,
                Newline, Dedent, Dedent, Pass, Eof,
            ]
        );
    }

    #[test]
    fn s3_inconsistent_indentation_is_an_error() {
        let mut lexer = Lexer::new("if True:\n    pass\n  pass");
        for _ in 0..5 {
            lexer.next_token().unwrap(); // If True : Newline Indent
        }
        lexer.next_token().unwrap(); // pass
        lexer.next_token().unwrap(); // Newline
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.kind, LexicalErrorKind::InconsistentIndentation);
    }

    #[test]
    fn indent_dedent_counts_balance() {
        let source = "if True:\n    if False:\n        pass\n    pass\npass";
        let got = kinds(source);
        let indents = got.iter().filter(|k| **k == TokenKind::Indent).count();
        let dedents = got.iter().filter(|k| **k == TokenKind::Dedent).count();
        assert_eq!(indents, dedents);
    }
}
