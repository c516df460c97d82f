/// Parser state and the `factor` rule.
///
/// Owns the lexer, keeps the single-token lookahead, and provides the entry
/// point that evaluates a whole input.
pub mod core;

/// Binary precedence levels.
///
/// Implements the left-associative `term` (`*`, `/`) and `expr` (`+`, `-`)
/// rules on top of the parser state.
pub mod binary;
