//! # calc
//!
//! calc is a small arithmetic expression evaluator written in Rust.
//! It turns a string of non-negative integers, whitespace and the operators
//! `+ - * /` into a number, honoring the usual precedence (`*` and `/` bind
//! tighter than `+` and `-`) and left-to-right associativity.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::interpreter::{evaluator::core::EvalResult, lexer::Lexer, parser::core::Parser};

/// Provides the error type for lexing, parsing and evaluation.
///
/// Every failure aborts the current input and is reported as one value of a
/// small closed enum, so callers can branch on the kind of error.
///
/// # Responsibilities
/// - Defines the error variants (invalid character, syntax, division by
///   zero, overflow).
/// - Attaches the character index of the failure.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the evaluation of a single expression.
///
/// This module ties together lexing, parsing and arithmetic.
///
/// # Responsibilities
/// - Coordinates the lexer, the parser and the numeric evaluator.
/// - Manages the flow of tokens and errors between the phases.
pub mod interpreter;
/// General numeric utilities.
///
/// # Responsibilities
/// - Reject non-finite floating-point results.
pub mod util;

pub use error::EvalError;
pub use interpreter::{lexer::Token, value::core::Number};

/// Evaluates one arithmetic expression.
///
/// A fresh lexer and parser are created for every call, so separate calls
/// share no state.
///
/// # Errors
/// Returns an [`EvalError`] if the input contains an invalid character, does
/// not match the grammar, divides by zero, or overflows.
///
/// # Examples
/// ```
/// use calc::{EvalError, Number, evaluate};
///
/// assert_eq!(evaluate("14 + 2 * 3 - 6 / 2").unwrap(), Number::Real(17.0));
/// assert_eq!(evaluate("123 + 45").unwrap(), Number::Integer(168));
///
/// let err = evaluate("2 & 3").unwrap_err();
/// assert_eq!(err, EvalError::Lex { character: '&', index: 2 });
/// ```
pub fn evaluate(input: &str) -> EvalResult<Number> {
    let result = Parser::new(Lexer::new(input)).parse();
    match &result {
        Ok(value) => debug!("{input:?} => {value}"),
        Err(e) => debug!("{input:?} failed: {e}"),
    }
    result
}

/// Splits an input into its tokens without evaluating it.
///
/// The end-of-input marker is not included.
///
/// # Errors
/// Returns the first lexical error.
///
/// # Examples
/// ```
/// use calc::{Token, tokenize};
///
/// let tokens = tokenize(" 7 / 2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Integer(7), Token::MulOp('/'), Token::Integer(2)]);
/// assert!(tokenize("7 % 2").is_err());
/// ```
pub fn tokenize(input: &str) -> EvalResult<Vec<Token>> {
    Lexer::new(input).collect()
}
