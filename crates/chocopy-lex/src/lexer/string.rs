//! String literal lexing and escape decoding.
//!
//! The token's `lexeme` is the raw source slice including the
//! surrounding quotes; `literal` holds the decoded value. A bare `\n`
//! inside the quotes (multi-line strings are a non-goal) and an EOF
//! before the closing quote are both errors.

use super::core::Lexer;
use crate::token::{LiteralValue, Token, TokenKind};
use chocopy_util::{LexicalError, LexicalErrorKind};

impl<'a> Lexer<'a> {
    pub(super) fn lex_string(&mut self) -> Result<Token, LexicalError> {
        debug_assert_eq!(self.cursor.current(), '"');
        self.cursor.advance(); // opening quote

        let mut decoded = String::new();
        loop {
            match self.cursor.current() {
                '"' => {
                    self.cursor.advance();
                    break;
                }
                '\n' | '\0' if self.cursor.is_at_end() => {
                    return Err(self.error(LexicalErrorKind::UnterminatedString));
                }
                '\n' => {
                    return Err(self.error(LexicalErrorKind::UnterminatedString));
                }
                '\\' => {
                    self.cursor.advance();
                    decoded.push(self.decode_escape()?);
                }
                c => {
                    decoded.push(c);
                    self.cursor.advance();
                }
            }
        }

        let lexeme = self.lexeme();
        Ok(
            Token::new(TokenKind::String, lexeme, self.token_start())
                .with_literal(LiteralValue::Str(decoded)),
        )
    }

    fn decode_escape(&mut self) -> Result<char, LexicalError> {
        let c = self.cursor.current();
        if self.cursor.is_at_end() {
            return Err(self.error(LexicalErrorKind::UnterminatedString));
        }
        self.cursor.advance();
        match c {
            'n' => Ok('\n'),
            't' => Ok('\t'),
            '\\' => Ok('\\'),
            '"' => Ok('"'),
            other => Err(self.error(LexicalErrorKind::InvalidEscape(other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{LiteralValue, TokenKind};
    use chocopy_util::LexicalErrorKind;

    fn lex_one(source: &str) -> Result<crate::Token, chocopy_util::LexicalError> {
        crate::Lexer::new(source).next_token()
    }

    #[test]
    fn empty_string_literal() {
        let tok = lex_one("\"\"").unwrap();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.literal, Some(LiteralValue::Str(String::new())));
    }

    #[test]
    fn plain_text_round_trips() {
        let tok = lex_one("\"hello\"").unwrap();
        assert_eq!(tok.literal, Some(LiteralValue::Str("hello".to_string())));
        assert_eq!(tok.lexeme, "\"hello\"");
    }

    #[test]
    fn every_valid_escape_decodes() {
        let tok = lex_one(r#""A\nB\tC\\D\"E""#).unwrap();
        assert_eq!(
            tok.literal,
            Some(LiteralValue::Str("A\nB\tC\\D\"E".to_string()))
        );
    }

    #[test]
    fn escape_preserves_visible_length() {
        let tok = lex_one(r#""A\nB""#).unwrap();
        match tok.literal {
            Some(LiteralValue::Str(s)) => assert_eq!(s.len(), 3),
            other => panic!("expected Str literal, got {other:?}"),
        }
    }

    #[test]
    fn n3_unterminated_at_newline() {
        let err = lex_one("\"unterminated\nrest").unwrap_err();
        assert_eq!(err.kind, LexicalErrorKind::UnterminatedString);
    }

    #[test]
    fn n3_unterminated_at_eof() {
        let err = lex_one("\"unterminated").unwrap_err();
        assert_eq!(err.kind, LexicalErrorKind::UnterminatedString);
    }

    #[test]
    fn n4_invalid_escape() {
        let err = lex_one(r#""bad \z""#).unwrap_err();
        assert_eq!(err.kind, LexicalErrorKind::InvalidEscape('z'));
    }
}
