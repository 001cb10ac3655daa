//! # exprcalc
//!
//! exprcalc is an arithmetic expression parser and evaluator written in Rust.
//! It parses expressions built from numeric literals, the binary operators
//! `+ - * / ^`, the unary prefixes `+ -`, and parentheses, resolving operator
//! precedence by precedence climbing, and reduces the parsed tree to a
//! 64-bit floating-point value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::{EvalError, ParseError},
    interpreter::{evaluator, lexer::Token, parser::core::parse_expression},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `Operator` type that
/// represent the syntactic structure of an expression as a tree. The tree is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the literal, unary, and binary node shapes.
/// - Attaches source byte offsets to nodes for error reporting.
/// - Carries operator priority and associativity metadata.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression. It standardizes error reporting and carries
/// source offsets for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the parse-then-evaluate pipeline.
///
/// This module ties together lexing, parsing, and evaluation. Each call runs
/// the whole pipeline synchronously over one expression; nothing is shared
/// between calls.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Provides the token and tree types that flow between phases.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses an expression string into an expression tree.
///
/// The input is lexed in full, then parsed by precedence climbing starting
/// at threshold 0. The scanner tolerates no whitespace: any character
/// outside digits, dots, operators, and parentheses fails the parse. Tokens
/// left over after the top-level climb (for example a stray `)`) also fail.
///
/// # Errors
/// Returns a `ParseError` if the input contains an unrecognized character,
/// ends where a token was required, leaves an opening parenthesis
/// unmatched, or carries trailing tokens.
///
/// # Examples
/// ```
/// use exprcalc::parse;
///
/// let expr = parse("1+2*3").unwrap();
/// assert_eq!(expr.position(), 1);
///
/// // Whitespace is not tolerated.
/// assert!(parse("1 + 2").is_err());
/// ```
pub fn parse(expression: &str) -> Result<ast::Expr, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     pos:   lexer.span().start, });
        }
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    if let Some((token, pos)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                          pos:   *pos, });
    }

    Ok(expr)
}

/// Evaluates a parsed expression tree, reducing it to a number.
///
/// Evaluation is pure and stateless; IEEE-754 special values (infinity,
/// NaN) propagate as ordinary results rather than errors.
///
/// # Errors
/// Returns an `EvalError` if a literal's text is not a valid numeral, or if
/// an operator without a unary meaning was used in prefix position.
///
/// # Examples
/// ```
/// use exprcalc::{evaluate, parse};
///
/// let expr = parse("2*(2+3)").unwrap();
/// assert_eq!(evaluate(&expr).unwrap(), 10.0);
/// ```
pub fn evaluate(expr: &ast::Expr) -> Result<f64, EvalError> {
    evaluator::core::eval(expr)
}

/// Parses and evaluates an expression in one call.
///
/// This is the convenience entry point a driver actually needs: it composes
/// [`parse`] and [`evaluate`], boxing whichever phase's error occurs.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use exprcalc::parse_and_evaluate;
///
/// assert_eq!(parse_and_evaluate("1+2^2-5*2").unwrap(), -5.0);
/// assert!(parse_and_evaluate("1+").is_err());
/// ```
pub fn parse_and_evaluate(expression: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let expr = parse(expression)?;
    let value = evaluate(&expr)?;

    Ok(value)
}
