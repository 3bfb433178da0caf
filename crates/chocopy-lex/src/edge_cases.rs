//! Edge-case tests for the lexer, as a whole, beyond the per-routine
//! unit tests colocated with each scanning function.
