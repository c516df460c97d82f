use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, operator::BinaryOperator, value::core::Number},
    util::num::finite_or,
};

/// Evaluates a scalar arithmetic operation.
///
/// Two integers are combined with checked arithmetic for `+`, `-` and `*`.
/// Division always produces a real quotient, even when it is integral. As
/// soon as one operand is real the other is promoted to the nearest real.
/// Division by zero is checked explicitly for both numeric categories.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `index`: Character index of the operator, for error reporting.
///
/// # Errors
/// - [`EvalError::DivisionByZero`] if `op` is `/` and `right` is zero.
/// - [`EvalError::Overflow`] if an integer result leaves the `i64` range or a
///   real result is not finite.
///
/// # Example
/// ```
/// use calc::interpreter::{
///     evaluator::scalar::eval_scalar_op,
///     operator::BinaryOperator,
///     value::core::Number,
/// };
///
/// let result = eval_scalar_op(BinaryOperator::Div, Number::Integer(7), Number::Integer(2), 2);
/// assert_eq!(result.unwrap(), Number::Real(3.5));
///
/// let result = eval_scalar_op(BinaryOperator::Mul, Number::Integer(6), Number::Integer(7), 2);
/// assert_eq!(result.unwrap(), Number::Integer(42));
/// ```
pub fn eval_scalar_op(op: BinaryOperator,
                      left: Number,
                      right: Number,
                      index: usize)
                      -> EvalResult<Number> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Number::Integer;

    let exact = match (op, left, right) {
        (Add, Integer(a), Integer(b)) => Some(a.checked_add(b)),
        (Sub, Integer(a), Integer(b)) => Some(a.checked_sub(b)),
        (Mul, Integer(a), Integer(b)) => Some(a.checked_mul(b)),
        _ => None,
    };
    if let Some(result) = exact {
        return result.map(Number::from).ok_or(EvalError::Overflow { index });
    }

    let left = left.to_real();
    let right = right.to_real();

    let result = match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero { index });
            }
            left / right
        },
    };
    finite_or(result, EvalError::Overflow { index }).map(Number::from)
}
