pub mod ast;
pub mod eval;
pub mod lex;
pub mod syntax;

/// The representation used by all numbers and their arithmetic operations.
pub type Number = f64;
