use log::debug;

use crate::{
    error::Expected,
    interpreter::{
        evaluator::{core::EvalResult, scalar::eval_scalar_op},
        lexer::Token,
        operator::{BinaryOperator, token_to_binary_operator},
        parser::core::Parser,
        value::core::Number,
    },
};

impl Parser<'_> {
    /// Parses and evaluates addition and subtraction.
    ///
    /// This is the entry rule. Handles left-associative `+` and `-`, so
    /// `10 - 3 - 2` is `(10 - 3) - 2`. After the last term the input must be
    /// exhausted.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    ///
    /// # Errors
    /// - [`crate::error::EvalError::Syntax`] when a token other than `+`, `-`
    ///   or the end of input follows a complete term.
    /// - Anything raised by [`Parser::term`].
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::{lexer::Lexer, parser::core::Parser, value::core::Number};
    ///
    /// let mut parser = Parser::new(Lexer::new("10 - 3 - 2"));
    /// assert_eq!(parser.expr().unwrap(), Number::Integer(5));
    /// ```
    pub fn expr(&mut self) -> EvalResult<Number> {
        let mut result = self.term()?;

        while let Token::AddOp(_) = self.peek()? {
            let (op, index) = self.eat_operator()?;
            let right = self.term()?;
            result = combine(op, result, right, index)?;
        }

        match self.peek()? {
            Token::EndOfInput => Ok(result),
            found => Err(self.unexpected(found, Expected::OperatorOrEnd)),
        }
    }

    /// Parses and evaluates multiplication and division.
    ///
    /// Handles left-associative `*` and `/`, so `8 / 4 / 2` is `(8 / 4) / 2`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    ///
    /// # Errors
    /// - [`crate::error::EvalError::DivisionByZero`] for a zero divisor.
    /// - [`crate::error::EvalError::Overflow`] for an out-of-range product.
    /// - Anything raised by [`Parser::factor`].
    pub fn term(&mut self) -> EvalResult<Number> {
        let mut result = self.factor()?;

        while let Token::MulOp(_) = self.peek()? {
            let (op, index) = self.eat_operator()?;
            let right = self.factor()?;
            result = combine(op, result, right, index)?;
        }

        Ok(result)
    }

    /// Consumes the operator in the lookahead, returning it with its index.
    fn eat_operator(&mut self) -> EvalResult<(BinaryOperator, usize)> {
        let token = self.peek()?;
        let index = self.index();
        let Some(op) = token_to_binary_operator(&token) else {
            return Err(self.unexpected(token, Expected::OperatorOrEnd));
        };
        self.advance()?;
        Ok((op, index))
    }
}

/// Applies `op` and logs the intermediate result.
fn combine(op: BinaryOperator, left: Number, right: Number, index: usize) -> EvalResult<Number> {
    let result = eval_scalar_op(op, left, right, index)?;
    debug!("{left} {op} {right} = {result}");
    Ok(result)
}
