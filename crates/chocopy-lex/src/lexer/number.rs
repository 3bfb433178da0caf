//! Integer literal lexing.
//!
//! ChocoPy integers are a run of ASCII digits in `[0, 2³¹−1]`. A
//! leading `0` followed by another digit, or a trailing `.` followed
//! by a digit (a float), are both rejected rather than silently
//! reinterpreted.

use super::core::Lexer;
use crate::token::{LiteralValue, Token, TokenKind};
use chocopy_util::{LexicalError, LexicalErrorKind};

impl<'a> Lexer<'a> {
    pub(super) fn lex_number(&mut self) -> Result<Token, LexicalError> {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == '0' && self.cursor.current().is_ascii_digit() {
            return Err(self.error(LexicalErrorKind::LeadingZero));
        }

        while self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current() == '.' && self.peek_digit_after_dot() {
            return Err(self.error(LexicalErrorKind::FloatNotAllowed));
        }

        let text = self.lexeme();
        match text.parse::<i64>() {
            Ok(value) if (0..=i32::MAX as i64).contains(&value) => Ok(Token::new(
                TokenKind::Integer,
                text,
                self.token_start(),
            )
            .with_literal(LiteralValue::Integer(value as i32))),
            _ => Err(self.error(LexicalErrorKind::IntegerTooBig(text.to_string()))),
        }
    }

    fn peek_digit_after_dot(&self) -> bool {
        self.cursor.peek_at(1).is_ascii_digit()
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
    fn zero_is_allowed() {
        let tok = lex_one("0").unwrap();
        assert_eq!(tok.literal, Some(LiteralValue::Integer(0)));
    }

    #[test]
    fn plain_decimal() {
        let tok = lex_one("42").unwrap();
        assert_eq!(tok.kind, TokenKind::Integer);
        assert_eq!(tok.literal, Some(LiteralValue::Integer(42)));
    }

    #[test]
    fn leading_zero_is_rejected() {
        let err = lex_one("007").unwrap_err();
        assert_eq!(err.kind, LexicalErrorKind::LeadingZero);
    }

    #[test]
    fn max_value_is_accepted() {
        let tok = lex_one("2147483647").unwrap();
        assert_eq!(tok.literal, Some(LiteralValue::Integer(i32::MAX)));
    }

    #[test]
    fn n1_one_over_max_is_too_big() {
        let err = lex_one("2147483648").unwrap_err();
        assert_eq!(
            err.kind,
            LexicalErrorKind::IntegerTooBig("2147483648".to_string())
        );
    }

    #[test]
    fn n2_trailing_dot_digit_is_a_float() {
        let err = lex_one("123.123").unwrap_err();
        assert_eq!(err.kind, LexicalErrorKind::FloatNotAllowed);
    }

    #[test]
    fn dot_not_followed_by_digit_is_not_a_float() {
        // "5.foo" - the dot isn't part of the number at all; it lexes
        // as Integer(5) followed by a separate Dot token.
        let mut lexer = crate::Lexer::new("5.foo");
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.literal, Some(LiteralValue::Integer(5)));
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Dot);
    }
}
