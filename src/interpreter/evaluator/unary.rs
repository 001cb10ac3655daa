use crate::{
    ast::Operator,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies a unary prefix operator to a value.
///
/// Supported operators:
/// - `Add`: identity.
/// - `Sub`: negation.
///
/// The parser deliberately lets any operator token open an operand, so the
/// remaining operators can reach this point through inputs like `*5`; they
/// are rejected here with an invalid-unary-operator error.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Operand value.
/// - `pos`: Byte offset for error reporting.
///
/// # Returns
/// The computed value wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use exprcalc::{ast::Operator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(Operator::Sub, 5.0, 0).unwrap(), -5.0);
/// assert_eq!(eval_unary(Operator::Add, 5.0, 0).unwrap(), 5.0);
/// assert!(eval_unary(Operator::Mul, 5.0, 0).is_err());
/// ```
pub fn eval_unary(op: Operator, value: f64, pos: usize) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(value),
        Operator::Sub => Ok(-value),
        Operator::Mul | Operator::Div | Operator::Pow => {
            Err(EvalError::InvalidUnaryOperator { op, pos })
        },
    }
}
