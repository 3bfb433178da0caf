//! Operator and punctuation lexing.
//!
//! Single-character tokens are a direct table lookup; the rest need
//! one character of lookahead to disambiguate `/` vs `//`, `!` vs
//! `!=`, `-` vs `->`, and the optional `=` suffix on `< > =`.

use super::core::Lexer;
use crate::token::{Token, TokenKind};
use chocopy_util::{LexicalError, LexicalErrorKind};

impl<'a> Lexer<'a> {
    pub(super) fn lex_operator(&mut self) -> Result<Token, LexicalError> {
        let start = self.token_start();
        let c = self.cursor.current();
        self.cursor.advance();

        let kind = match c {
            '+' => TokenKind::Plus,
            '*' => TokenKind::Multiply,
            '%' => TokenKind::Percent,
            '(' => TokenKind::ParenLeft,
            ')' => TokenKind::ParenRight,
            '[' => TokenKind::BracketLeft,
            ']' => TokenKind::BracketRight,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '.' => TokenKind::Dot,

            '/' => {
                if self.cursor.eat('/') {
                    TokenKind::DoubleSlash
                } else {
                    return Err(self.error(LexicalErrorKind::ExpectedFollowingCharacter {
                        seen: '/',
                        expected: '/',
                    }));
                }
            }
            '!' => {
                if self.cursor.eat('=') {
                    TokenKind::NotEqual
                } else {
                    return Err(self.error(LexicalErrorKind::ExpectedFollowingCharacter {
                        seen: '!',
                        expected: '=',
                    }));
                }
            }
            '-' => {
                if self.cursor.eat('>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }
            '<' => {
                if self.cursor.eat('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.cursor.eat('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '=' => {
                if self.cursor.eat('=') {
                    TokenKind::DoubleEqual
                } else {
                    TokenKind::Equal
                }
            }
            other => return Err(self.error(LexicalErrorKind::UnexpectedCharacter(other))),
        };

        Ok(Token::new(kind, self.lexeme(), start))
    }
}
