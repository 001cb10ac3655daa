/// Core evaluation logic.
///
/// Contains the `EvalResult` alias, the recursive dispatch over expression
/// nodes, and the deferred numeric-literal conversion.
pub mod core;

/// Unary operator evaluation.
///
/// Applies prefix operators to a single operand and rejects operator symbols
/// that have no unary meaning.
pub mod unary;

/// Binary operator evaluation.
///
/// Applies the five arithmetic operators to a pair of operands.
pub mod binary;
