//! chocopy-par - the ChocoPy parser.
//!
//! A hand-written recursive-descent parser with two tokens of
//! lookahead, consuming a [`chocopy_lex::Lexer`] and producing a
//! [`ast::Program`]. See [`Parser::parse`] for the entry point.

pub mod ast;
mod edge_cases;
mod expr;
mod items;
mod stmt;
mod types;

use ast::Program;
use chocopy_lex::{Lexer, Token, TokenKind};
use chocopy_util::{ParseError, SyntaxError, SyntaxErrorKind};

/// LL(2) recursive-descent parser. Holds a lexer plus the two tokens
/// of lookahead every production needs to disambiguate (most notably
/// `Id :` — a variable definition — from `Id` starting an expression
/// statement).
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    next: Token,
}

impl<'a> Parser<'a> {
    /// Primes the lookahead by pulling the first two tokens.
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        let next = lexer.next_token()?;
        Ok(Self { lexer, current, next })
    }

    /// Parses `source` to completion, returning the resulting
    /// [`Program`] or the first lexical or syntax error encountered.
    pub fn parse(source: &'a str) -> Result<Program, ParseError> {
        Self::new(source)?.program()
    }

    fn peek(&self) -> &Token {
        &self.current
    }

    fn peek_next(&self) -> &Token {
        &self.next
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn check_next(&self, kind: TokenKind) -> bool {
        self.next.kind == kind
    }

    /// Returns `current`, shifting `next` into `current` and pulling a
    /// fresh lookahead token from the lexer.
    fn consume(&mut self) -> Result<Token, ParseError> {
        let fresh = self.lexer.next_token()?;
        let old_next = std::mem::replace(&mut self.next, fresh);
        let old_current = std::mem::replace(&mut self.current, old_next);
        Ok(old_current)
    }

    /// Consumes `current` if it has kind `kind`, else raises
    /// `SyntaxErrorKind::Expected`.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.consume()
        } else {
            let position = self.current.position;
            let found = self.current.kind;
            Err(ParseError::Syntax(SyntaxError::new(
                position,
                SyntaxErrorKind::Expected {
                    expected: format!("{kind}"),
                    found: format!("{found}"),
                },
            )))
        }
    }

    /// Skips any number of stray `Newline` tokens — blank logical
    /// lines that survived layout analysis because they appear inside
    /// an already-open block.
    fn skip_newlines(&mut self) -> Result<(), ParseError> {
        while self.check(TokenKind::Newline) {
            self.consume()?;
        }
        Ok(())
    }

    fn unexpected(&self, found: &Token) -> ParseError {
        ParseError::Syntax(SyntaxError::new(
            found.position,
            SyntaxErrorKind::UnexpectedToken(format!("{}", found.kind)),
        ))
    }
}
