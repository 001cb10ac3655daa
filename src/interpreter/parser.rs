/// Core parsing entry points.
///
/// Contains the `ParseResult` alias and the top-level expression entry point
/// that starts the precedence climb at threshold 0.
pub mod core;

/// Simple-expression parsing.
///
/// Parses a single operand position: a numeric literal, a unary-prefixed
/// operand, or a parenthesized sub-expression.
pub mod simple;

/// Binary-expression parsing.
///
/// Implements the precedence climb that resolves operator priority and
/// associativity, together with the token-to-operator mapping and the
/// priority table it is driven by.
pub mod binary;
