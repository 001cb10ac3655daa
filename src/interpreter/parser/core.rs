use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_binary},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It starts the precedence
/// climb at threshold 0, the sentinel rank below every real operator, which
/// guarantees the climb consumes tokens until the end of input or a closing
/// parenthesis halts it.
///
/// Grammar: `expression := binary(0)`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, pos)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_binary(tokens, 0)
}
