/// Evaluation errors.
///
/// Defines the closed set of failures that can abort the evaluation of a
/// single input: invalid characters found by the lexer, token sequences that
/// do not match the grammar, division by zero, and arithmetic overflow.
/// Every variant carries the character index where the problem was found.
pub mod eval_error;

pub use eval_error::{EvalError, Expected};
