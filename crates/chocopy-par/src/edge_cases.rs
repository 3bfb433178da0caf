//! Edge-case tests for the parser as a whole, beyond the per-production
//! unit tests colocated with each parsing routine.
