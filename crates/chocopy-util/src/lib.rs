//! chocopy-util - shared value types for the ChocoPy front-end.
//!
//! This is the bottom crate of the workspace: [`Position`], the
//! interned [`Symbol`], and the three error kinds (`LexicalError`,
//! `SyntaxError`, `SemanticError`) that [`chocopy_lex`](../chocopy_lex)
//! and [`chocopy_par`](../chocopy_par) build on. It has no internal
//! dependencies.

mod error;
mod position;
mod symbol;

pub use error::{
    LexicalError, LexicalErrorKind, ParseError, SemanticError, SyntaxError, SyntaxErrorKind,
};
pub use position::Position;
pub use symbol::Symbol;
