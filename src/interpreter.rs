/// The evaluator module combines numbers with arithmetic operators.
///
/// # Responsibilities
/// - Performs checked integer and floating-point arithmetic.
/// - Reports division by zero and overflow.
pub mod evaluator;
/// The lexer module tokenizes the input string on demand.
///
/// The lexer reads the raw text left to right and produces integers and
/// operator tokens, skipping whitespace. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens, one per request.
/// - Reports invalid characters with their position.
pub mod lexer;
/// Binary operator definitions shared by the parser and the evaluator.
pub mod operator;
/// The parser module evaluates the token stream by recursive descent.
///
/// The grammar is
///
/// ```text
/// expr   := term ( ('+' | '-') term )*
/// term   := factor ( ('*' | '/') factor )*
/// factor := INTEGER
/// ```
///
/// Each rule computes its value while it parses, so no syntax tree is built.
pub mod parser;
/// The value module defines the numeric result type.
pub mod value;
