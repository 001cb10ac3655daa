use logos::Logos;

/// Represents a lexical token in the source expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression grammar.
///
/// There are no skip patterns: whitespace, letters, and every other
/// character outside this set are lexer errors, reported by the parser as
/// an unexpected token. End of input is signalled by the token stream
/// running out rather than by a sentinel token.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Numeric literal tokens: a maximal run of digits and decimal points
    /// starting with a digit, such as `42`, `1.5` or `0.25`.
    ///
    /// The run is scanned permissively; `1..2` and `1.2.3` are single
    /// tokens here, and their conversion to a number is deferred to
    /// evaluation, where it fails as a `NumberFormat` error.
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice().to_owned())]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}
