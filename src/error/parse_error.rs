#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character or token that cannot start or continue the
    /// expression at this position.
    UnexpectedToken {
        /// The offending source text.
        token: String,
        /// Byte offset in the source expression.
        pos:   usize,
    },
    /// Reached the end of input where a token was required.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the unmatched opening parenthesis.
        pos: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// Byte offset in the source expression.
        pos:   usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, pos } => {
                write!(f, "Error at offset {pos}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => {
                write!(f, "Error: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { pos } => write!(f,
                                                         "Error at offset {pos}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, pos } => write!(f,
                                                                    "Error at offset {pos}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
