/// Represents an arithmetic operator symbol.
///
/// A single `Operator` type is shared by unary and binary nodes: the grammar
/// allows any operator token to open an operand position, so which operators
/// are legal in unary position is decided at evaluation time, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Returns the binding priority of the operator.
    ///
    /// Additive operators bind weakest, exponentiation binds tightest. Rank 0
    /// is reserved as the sentinel below every real operator; see
    /// [`token_priority`](crate::interpreter::parser::binary::token_priority).
    ///
    /// # Example
    /// ```
    /// use exprcalc::ast::Operator;
    ///
    /// assert_eq!(Operator::Add.priority(), 1);
    /// assert_eq!(Operator::Div.priority(), 2);
    /// assert_eq!(Operator::Pow.priority(), 3);
    /// ```
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Returns `true` when the operator groups right-to-left.
    ///
    /// Only exponentiation is right-associative: `2^3^2` parses as
    /// `2^(3^2)`.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// Returns the source character for the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing a parsed expression.
///
/// `Expr` covers the three shapes an arithmetic expression can take: a bare
/// numeric literal, a unary prefix applied to an operand, and a binary
/// operator applied to two operands. Every node records the byte offset of
/// the token it was built from, for error reporting.
///
/// Literals store the scanned text rather than a converted number: the
/// scanner's numeral grammar is deliberately permissive (it accepts runs
/// like `1.2.3`), and conversion is deferred to evaluation where a bad
/// numeral fails with a `NumberFormat` error.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, kept as its source text.
    Literal {
        /// The scanned decimal text, converted during evaluation.
        text: String,
        /// Byte offset in the source expression.
        pos:  usize,
    },
    /// A unary prefix operation (e.g. negation).
    UnaryOp {
        /// The prefix operator.
        op:   Operator,
        /// The operand expression.
        expr: Box<Self>,
        /// Byte offset in the source expression.
        pos:  usize,
    },
    /// A binary operation (addition, exponentiation, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    Operator,
        /// Right operand.
        right: Box<Self>,
        /// Byte offset in the source expression.
        pos:   usize,
    },
}

impl Expr {
    /// Gets the source byte offset from `self`.
    /// ## Example
    /// ```
    /// use exprcalc::ast::Expr;
    ///
    /// let expr = Expr::Literal { text: "2.5".to_string(),
    ///                            pos:  4, };
    ///
    /// assert_eq!(expr.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { pos, .. } | Self::UnaryOp { pos, .. } | Self::BinaryOp { pos, .. } => {
                *pos
            },
        }
    }
}
