/// Turns raw expression text into tokens.
///
/// This module defines the `Token` enum produced by the lexer. Tokens are the
/// minimal lexical units of the expression grammar: numerals, operator
/// symbols, and parentheses.
pub mod lexer;
/// Builds an expression tree out of tokens.
///
/// This module implements a recursive-descent parser driven by precedence
/// climbing. It resolves operator precedence and associativity with a single
/// threshold parameter instead of one grammar rule per priority level.
pub mod parser;
/// Reduces an expression tree to a number.
///
/// This module walks a parsed tree recursively and applies the arithmetic
/// operators, producing a 64-bit floating-point result.
pub mod evaluator;
