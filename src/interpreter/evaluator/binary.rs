use crate::ast::Operator;

/// Applies a binary operator to two values.
///
/// Division is ordinary IEEE-754 division: dividing by zero produces
/// infinity or NaN rather than an error. Exponentiation is real-valued
/// (`f64::powf`), so fractional and negative exponents are supported.
///
/// The match is exhaustive over the closed [`Operator`] set, which is what
/// discharges the unknown-binary-operator concern statically: a node
/// carrying an unrecognized binary operator cannot be constructed.
///
/// # Parameters
/// - `op`: The binary operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use exprcalc::{ast::Operator, interpreter::evaluator::binary::eval_binary};
///
/// assert_eq!(eval_binary(Operator::Pow, 2.0, 10.0), 1024.0);
/// assert_eq!(eval_binary(Operator::Div, 1.0, 0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn eval_binary(op: Operator, left: f64, right: f64) -> f64 {
    match op {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => left / right,
        Operator::Pow => left.powf(right),
    }
}
