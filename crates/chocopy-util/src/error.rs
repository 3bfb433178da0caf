//! The three error kinds the front-end can raise.
//!
//! `LexicalError` and `SyntaxError` are both terminal: there is no
//! local recovery anywhere in this crate's call graph, so the first
//! one raised aborts the scan or parse and propagates to the caller
//! via `?`. `SemanticError` has no variants here — it exists only so
//! downstream semantic analysis can share the same error family
//! without this crate needing to know its shape.

use crate::Position;
use thiserror::Error;

/// A malformed character sequence in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{position}: {kind}")]
pub struct LexicalError {
    pub position: Position,
    pub kind: LexicalErrorKind,
}

impl LexicalError {
    pub fn new(position: Position, kind: LexicalErrorKind) -> Self {
        Self { position, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalErrorKind {
    #[error("Leading '0' is not allowed!")]
    LeadingZero,

    #[error("Floats are not allowed")]
    FloatNotAllowed,

    #[error("Number {0} is too big")]
    IntegerTooBig(String),

    #[error("Invalid escape sequence: \\{0}")]
    InvalidEscape(char),

    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Inconsistent indentation level")]
    InconsistentIndentation,

    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("Expected '{expected}' after '{seen}'")]
    ExpectedFollowingCharacter { seen: char, expected: char },
}

/// The token stream does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{position}: {kind}")]
pub struct SyntaxError {
    pub position: Position,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn new(position: Position, kind: SyntaxErrorKind) -> Self {
        Self { position, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("Expected {expected} but got {found}")]
    Expected { expected: String, found: String },

    #[error("cannot assign to {0}")]
    InvalidAssignTarget(String),

    #[error("Empty blocks are not allowed")]
    EmptyBlock,

    #[error("{0} is a reserved keyword and cannot be used here")]
    ReservedKeyword(String),

    #[error("unexpected token {0}")]
    UnexpectedToken(String),
}

/// Reserved for downstream type-checking passes. This crate never
/// constructs one; it exists purely so a shared `ChocoPyError` enum in
/// a consuming crate can name this type without depending on whichever
/// crate eventually implements semantic analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{position}: semantic error: {message}")]
pub struct SemanticError {
    pub position: Position,
    pub message: String,
}

/// The error a `Parser::parse()` call returns: either the lexer or the
/// parser itself failed. Each half keeps its own precise error type
/// internally; this just lets the top-level entry point return a
/// single `Result`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::Lexical(e) => e.position,
            ParseError::Syntax(e) => e.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_error_renders_position_prefix() {
        let err = LexicalError::new(Position::new(4, 2), LexicalErrorKind::FloatNotAllowed);
        assert_eq!(err.to_string(), "[4, 2]: Floats are not allowed");
    }

    #[test]
    fn syntax_error_renders_position_prefix() {
        let err = SyntaxError::new(
            Position::new(1, 1),
            SyntaxErrorKind::EmptyBlock,
        );
        assert_eq!(err.to_string(), "[1, 1]: Empty blocks are not allowed");
    }

    #[test]
    fn parse_error_from_lexical_preserves_position() {
        let lex = LexicalError::new(Position::new(2, 3), LexicalErrorKind::LeadingZero);
        let parse: ParseError = lex.clone().into();
        assert_eq!(parse.position(), Position::new(2, 3));
    }

    #[test]
    fn invalid_escape_names_the_offending_character() {
        let err = LexicalErrorKind::InvalidEscape('z');
        assert_eq!(err.to_string(), "Invalid escape sequence: \\z");
    }
}
