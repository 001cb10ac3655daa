use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::token_to_operator,
            core::{ParseResult, parse_expression},
        },
    },
};

/// Parses a simple expression: a single operand position.
///
/// A simple expression is one of:
/// - a numeric literal,
/// - a unary-prefixed simple expression,
/// - a parenthesized full expression.
///
/// The unary arm accepts *any* operator token, not just `+` and `-`: which
/// operators actually have a unary meaning is a semantic question, answered
/// at evaluation time. `*5` therefore parses here and fails later with an
/// invalid-unary-operator error.
///
/// Grammar:
/// ```text
///     simple := NUMBER
///             | operator simple
///             | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an operand.
///
/// # Returns
/// The parsed operand [`Expr`].
///
/// # Errors
/// Returns a `ParseError` if:
/// - the input ends where an operand was required,
/// - a parenthesized sub-expression is not closed by `)`,
/// - the token cannot start an operand.
pub fn parse_simple<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, pos) = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        Token::Number(text) => Ok(Expr::Literal { text: text.clone(),
                                                  pos:  *pos, }),
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { pos: *pos }),
            }
        },
        token => match token_to_operator(token) {
            Some(op) => {
                let operand = parse_simple(tokens)?;
                Ok(Expr::UnaryOp { op,
                                   expr: Box::new(operand),
                                   pos: *pos, })
            },
            None => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                      pos:   *pos, }),
        },
    }
}
