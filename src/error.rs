/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unexpected characters, input that ends
/// where a token was required, and unmatched parentheses.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing a parsed
/// expression tree to a number, such as malformed numeric literals or
/// operators applied in a position where they have no meaning.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
