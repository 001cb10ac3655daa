use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree, reducing it to a number.
///
/// This is the main entry point for evaluation. The function recurses
/// through the tree, converting literals and applying unary and binary
/// operators bottom-up. Evaluation is pure: no state survives the call, and
/// evaluating the same tree repeatedly yields bitwise-identical results.
///
/// IEEE-754 special values are not failures: `1/0` evaluates to infinity
/// and `0/0` to NaN.
///
/// # Parameters
/// - `expr`: Expression tree to reduce.
///
/// # Returns
/// The computed value wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use exprcalc::{interpreter::evaluator::core::eval, parse};
///
/// let expr = parse("2^3").unwrap();
/// assert_eq!(eval(&expr).unwrap(), 8.0);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Literal { text, pos } => eval_literal(text, *pos),
        Expr::UnaryOp { op, expr, pos } => {
            let value = eval(expr)?;
            eval_unary(*op, value, *pos)
        },
        Expr::BinaryOp { left, op, right, .. } => {
            let left = eval(left)?;
            let right = eval(right)?;
            Ok(eval_binary(*op, left, right))
        },
    }
}

/// Converts a literal's scanned text into a number.
///
/// The scanner accepts any run of digits and decimal points as one numeral,
/// so this is where malformed literals such as `1..2` actually fail.
///
/// # Parameters
/// - `text`: The literal text as scanned.
/// - `pos`: Byte offset of the literal, for error reporting.
///
/// # Returns
/// - `Ok(f64)`: The converted value.
/// - `Err(EvalError::NumberFormat { .. })`: If the text is not a valid
///   numeral.
///
/// # Example
/// ```
/// use exprcalc::{error::EvalError, interpreter::evaluator::core::eval_literal};
///
/// assert_eq!(eval_literal("1.5", 0).unwrap(), 1.5);
///
/// let err = eval_literal("1..2", 0).unwrap_err();
/// assert!(matches!(err, EvalError::NumberFormat { .. }));
/// ```
pub fn eval_literal(text: &str, pos: usize) -> EvalResult<f64> {
    text.parse()
        .map_err(|_| EvalError::NumberFormat { text: text.to_owned(),
                                               pos })
}
