//! chocopy-lex - the ChocoPy lexer (scanner).
//!
//! Converts source text into a stream of [`Token`]s, synthesizing
//! `Indent`/`Dedent`/`Newline` tokens from leading whitespace so a
//! block-structured parser can consume an indentation-sensitive
//! grammar. See [`Lexer::next_token`] for the entry point.
//!
//! Depends only on `chocopy-util` for [`chocopy_util::Position`], the
//! [`chocopy_util::Symbol`] interner, and the `LexicalError` family.

mod cursor;
mod edge_cases;
mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{keyword_lookup, LiteralValue, Token, TokenKind};
