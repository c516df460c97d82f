use crate::interpreter::lexer::Token;

/// The four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// Maps an operator token to its corresponding binary operator.
///
/// Returns `None` for integers, the end marker, and operator tokens carrying
/// a character other than the four known symbols.
///
/// # Example
/// ```
/// use calc::interpreter::{
///     lexer::Token,
///     operator::{BinaryOperator, token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::AddOp('-')),
///            Some(BinaryOperator::Sub));
/// assert_eq!(token_to_binary_operator(&Token::Integer(1)), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::AddOp('+') => Some(BinaryOperator::Add),
        Token::AddOp('-') => Some(BinaryOperator::Sub),
        Token::MulOp('*') => Some(BinaryOperator::Mul),
        Token::MulOp('/') => Some(BinaryOperator::Div),
        _ => None,
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
