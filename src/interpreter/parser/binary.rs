use std::iter::Peekable;

use crate::{
    ast::{Expr, Operator},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, simple::parse_simple},
    },
};

/// Parses a binary-expression chain by precedence climbing.
///
/// The function parses a left operand, then repeatedly inspects the next
/// token: when its priority is at or below `min_priority` the accumulated
/// left operand is returned, leaving the token unconsumed so an enclosing
/// call at a coarser threshold (or the top level, or a parenthesis boundary)
/// can claim it. Otherwise the operator is consumed and the right operand is
/// parsed by climbing again with the threshold raised to the operator's own
/// priority.
///
/// Equal-priority chains therefore left-associate through the loop rather
/// than the recursion: `1-2+3` is `(1-2)+3`. The one exception is
/// exponentiation, whose recursive threshold is lowered by one so that
/// `2^3^2` groups right as `2^(3^2)`.
///
/// Grammar: `binary(p) := simple (operator[priority > p] binary(priority))*`
///
/// # Parameters
/// - `tokens`: Token stream with byte offsets.
/// - `min_priority`: Priority threshold the next operator must exceed.
///
/// # Returns
/// An `Expr` combining the parsed operands, or the bare left operand when no
/// operator binds at this level.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>, min_priority: u8) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_simple(tokens)?;

    loop {
        let priority = token_priority(tokens.peek().map(|(token, _)| token));
        if priority <= min_priority {
            return Ok(left);
        }

        // A non-zero priority implies the peeked token is an operator.
        let (token, pos) = match tokens.next() {
            Some(pair) => pair,
            None => unreachable!(),
        };
        let op = match token_to_operator(token) {
            Some(op) => op,
            None => unreachable!(),
        };

        let threshold = if op.is_right_associative() {
            priority - 1
        } else {
            priority
        };

        let right = parse_binary(tokens, threshold)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                pos: *pos, };
    }
}

/// Maps a token to its corresponding operator.
///
/// Returns `Some(Operator)` when the token is one of the five operator
/// symbols, and `None` for every other token.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(Operator)` if the token is an operator symbol, otherwise `None`.
///
/// # Example
/// ```
/// use exprcalc::{
///     ast::Operator,
///     interpreter::{lexer::Token, parser::binary::token_to_operator},
/// };
///
/// assert_eq!(token_to_operator(&Token::Plus), Some(Operator::Add));
/// assert_eq!(token_to_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Add),
        Token::Minus => Some(Operator::Sub),
        Token::Star => Some(Operator::Mul),
        Token::Slash => Some(Operator::Div),
        Token::Caret => Some(Operator::Pow),
        _ => None,
    }
}

/// Returns the priority rank of a peeked token.
///
/// Operator tokens rank 1 to 3 per [`Operator::priority`]; every other
/// token, and the absence of a token, ranks 0. Rank 0 acts as the sentinel
/// lower than any real operator, which is what terminates the climb at the
/// top level and at closing parentheses.
///
/// # Example
/// ```
/// use exprcalc::interpreter::{lexer::Token, parser::binary::token_priority};
///
/// assert_eq!(token_priority(Some(&Token::Caret)), 3);
/// assert_eq!(token_priority(Some(&Token::RParen)), 0);
/// assert_eq!(token_priority(None), 0);
/// ```
#[must_use]
pub fn token_priority(token: Option<&Token>) -> u8 {
    token.and_then(token_to_operator).map_or(0, Operator::priority)
}
