use crate::error::EvalError;

/// Result type used by the lexer, parser and evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;
