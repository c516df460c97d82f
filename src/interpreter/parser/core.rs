use log::trace;

use crate::{
    error::{EvalError, Expected},
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{Lexer, Token},
        value::core::Number,
    },
};

/// Recursive-descent parser that evaluates while it parses.
///
/// The parser owns its [`Lexer`] and pulls tokens from it only when a rule
/// needs to look at the next one. `current_token` holds the most recently
/// pulled token that no rule has consumed yet; it is empty only before the
/// first pull.
///
/// A parser handles exactly one input and is dropped afterwards.
///
/// # Example
/// ```
/// use calc::interpreter::{lexer::Lexer, parser::core::Parser, value::core::Number};
///
/// let mut parser = Parser::new(Lexer::new("2 + 3 * 4"));
/// assert_eq!(parser.expr().unwrap(), Number::Integer(14));
/// ```
pub struct Parser<'source> {
    lexer:         Lexer<'source>,
    current_token: Option<Token>,
}

impl<'source> Parser<'source> {
    /// Creates a parser over `lexer`. No token is pulled yet.
    #[must_use]
    pub const fn new(lexer: Lexer<'source>) -> Self {
        Self { lexer,
               current_token: None }
    }

    /// Returns the lookahead token, pulling the first one if needed.
    ///
    /// # Errors
    /// Propagates lexer errors.
    pub fn peek(&mut self) -> EvalResult<Token> {
        match self.current_token {
            Some(token) => Ok(token),
            None => self.advance(),
        }
    }

    /// Discards the lookahead and pulls the next token into it.
    ///
    /// # Errors
    /// Propagates lexer errors.
    pub fn advance(&mut self) -> EvalResult<Token> {
        let token = self.lexer.next_token()?;
        trace!("{token} at index {}", self.lexer.token_index());
        self.current_token = Some(token);
        Ok(token)
    }

    /// Character index where the lookahead token starts.
    #[must_use]
    pub fn index(&self) -> usize {
        self.lexer.token_index()
    }

    /// Builds a syntax error for the lookahead token.
    pub(crate) fn unexpected(&self, found: Token, expected: Expected) -> EvalError {
        EvalError::Syntax { found,
                            expected,
                            index: self.index() }
    }

    /// Parses a factor.
    ///
    /// Grammar: `factor := INTEGER`
    ///
    /// Consumes the integer and returns its value.
    ///
    /// # Errors
    /// - [`EvalError::Syntax`] if the lookahead is not an integer.
    /// - Lexer errors raised while pulling the following token.
    pub fn factor(&mut self) -> EvalResult<Number> {
        match self.peek()? {
            Token::Integer(n) => {
                self.advance()?;
                Ok(n.into())
            },
            found => Err(self.unexpected(found, Expected::Integer)),
        }
    }

    /// Evaluates the whole input.
    ///
    /// Runs [`Parser::expr`], which also rejects any tokens left over after a
    /// complete expression.
    ///
    /// # Errors
    /// Any [`EvalError`] raised while lexing, parsing or computing.
    pub fn parse(mut self) -> EvalResult<Number> {
        self.expr()
    }
}
