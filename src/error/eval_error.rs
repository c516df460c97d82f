use crate::interpreter::lexer::Token;

/// The category of token the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// An integer literal (the only kind of factor).
    Integer,
    /// A binary operator continuing the expression, or the end of input.
    OperatorOrEnd,
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::OperatorOrEnd => write!(f, "operator or end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Indices are 0-based character positions in the evaluated input.
pub enum EvalError {
    /// A character does not start any valid token.
    Lex {
        /// The offending character.
        character: char,
        /// Where the character was found.
        index:     usize,
    },
    /// The token stream does not match the grammar.
    Syntax {
        /// The token encountered.
        found:    Token,
        /// What the grammar required at this point.
        expected: Expected,
        /// Where the token starts.
        index:    usize,
    },
    /// The right operand of `/` evaluated to zero.
    DivisionByZero {
        /// Position of the `/` operator.
        index: usize,
    },
    /// An integer literal or an arithmetic step left the representable range.
    Overflow {
        /// Position of the literal or operator.
        index: usize,
    },
}

impl EvalError {
    /// Returns the character index the error refers to.
    ///
    /// # Example
    /// ```
    /// use calc::{error::EvalError, evaluate};
    ///
    /// let err = evaluate("1 + 2 / 0").unwrap_err();
    /// assert_eq!(err, EvalError::DivisionByZero { index: 6 });
    /// assert_eq!(err.index(), 6);
    /// ```
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Lex { index, .. }
            | Self::Syntax { index, .. }
            | Self::DivisionByZero { index }
            | Self::Overflow { index } => *index,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex { character, index } => {
                write!(f, "Error at index {index}: Invalid character {character:?}.")
            },
            Self::Syntax { found, expected, index } => write!(f,
                                                              "Error at index {index}: Invalid syntax. Expected {expected}, found {found}."),
            Self::DivisionByZero { index } => write!(f, "Error at index {index}: Division by zero."),
            Self::Overflow { index } => write!(f,
                                               "Error at index {index}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for EvalError {}
