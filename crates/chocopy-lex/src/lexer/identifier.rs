//! Identifier and keyword lexing.

use super::core::Lexer;
use crate::token::{identifier_or_keyword, Token};

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Scans `[A-Za-z_][A-Za-z0-9_]*` and resolves it against the
    /// keyword table; non-matches become `Id`.
    pub(super) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current()) {
            self.cursor.advance();
        }
        identifier_or_keyword(self.lexeme(), self.token_start())
    }
}
