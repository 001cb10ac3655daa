use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvalError {
    /// A literal's text could not be converted to a number.
    ///
    /// The scanner accepts any run of digits and dots as a single numeral, so
    /// malformed literals like `1..2` survive parsing and only fail here.
    NumberFormat {
        /// The literal text that failed to convert.
        text: String,
        /// Byte offset in the source expression.
        pos:  usize,
    },
    /// An operator with no unary meaning was applied in prefix position.
    ///
    /// The grammar lets any operator token open an operand, so `*5` parses as
    /// a unary node and is rejected here.
    InvalidUnaryOperator {
        /// The operator that was applied.
        op:  Operator,
        /// Byte offset in the source expression.
        pos: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumberFormat { text, pos } => {
                write!(f, "Error at offset {pos}: Invalid numeric literal: {text}.")
            },

            Self::InvalidUnaryOperator { op, pos } => write!(f,
                                                             "Error at offset {pos}: Unknown unary operator '{op}'. Expected '+' or '-'."),
        }
    }
}

impl std::error::Error for EvalError {}
