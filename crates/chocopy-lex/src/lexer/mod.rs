//! Lexer implementation, split by concern:
//! - `core` — the `Lexer` struct, its token queue, and the main dispatch
//! - `layout` — the indentation stack algorithm (`Newline`/`Indent`/`Dedent`)
//! - `comment` — `#`-comment and intra-line whitespace skipping
//! - `identifier` — identifier/keyword scanning
//! - `number` — integer literal scanning
//! - `string` — string literal scanning and escape decoding
//! - `operator` — operator/punctuation scanning with one-char lookahead

mod comment;
mod core;
mod identifier;
mod layout;
mod number;
mod operator;
mod string;

pub use core::Lexer;
