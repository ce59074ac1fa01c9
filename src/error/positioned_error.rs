/// Represents all errors that can occur while tokenizing or parsing a formula.
///
/// Each variant carries the zero-based character offset where the problem
/// was detected. The message is available through [`std::fmt::Display`].
///
/// Two cases go beyond the plain "unexpected token" of a classic calculator:
/// - [`Self::UnexpectedToken`] names what was needed instead, so its message
///   reads `Unexpected token: operator needed` after an operand and
///   `Unexpected token: operand needed` where an operand should start.
/// - [`Self::UnexpectedEndOfInput`] is returned when the formula ends right
///   after a binary operator (`3 +`). Its position points just past the last
///   token. An operator followed by `)` is an [`Self::UnexpectedToken`] at the
///   parenthesis instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionedError {
    /// The formula contained no tokens at all.
    #[error("Empty input")]
    EmptyInput {
        /// Always `0`.
        position: usize,
    },
    /// A numeric literal was malformed, or its value is not a normal number.
    #[error("Invalid number")]
    InvalidNumber {
        /// Offset of the first character of the literal.
        position: usize,
    },
    /// A character outside the recognized token set.
    #[error("Unexpected symbol")]
    UnexpectedSymbol {
        /// Offset of the character.
        position: usize,
    },
    /// A token appeared where the grammar forbids it.
    #[error("Unexpected token: {expected}")]
    UnexpectedToken {
        /// Offset of the token.
        position: usize,
        /// What the parser was looking for instead.
        expected: &'static str,
    },
    /// The formula ended where an operand was still needed.
    #[error("Unexpected end of input: operand needed")]
    UnexpectedEndOfInput {
        /// Offset just past the last token.
        position: usize,
    },
    /// A unary minus with nothing after it.
    #[error("Orphan minus")]
    OrphanMinus {
        /// Offset of the minus.
        position: usize,
    },
    /// An opening parenthesis without a matching close.
    #[error("Unclosed parenthesis")]
    UnclosedParenthesis {
        /// Offset of the opening parenthesis.
        position: usize,
    },
    /// A pair of parentheses with nothing inside.
    #[error("Empty parentheses")]
    EmptyParentheses {
        /// Offset of the opening parenthesis.
        position: usize,
    },
}

impl PositionedError {
    /// Gets the offset of the error in the source text.
    /// ## Example
    /// ```
    /// use formula::evaluate_formula;
    ///
    /// let err = evaluate_formula("3 + + 2").unwrap_err();
    ///
    /// assert_eq!(err.position(), 4);
    /// assert_eq!(err.to_string(), "Unexpected token: operand needed");
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::EmptyInput { position }
            | Self::InvalidNumber { position }
            | Self::UnexpectedSymbol { position }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::OrphanMinus { position }
            | Self::UnclosedParenthesis { position }
            | Self::EmptyParentheses { position } => *position,
        }
    }
}
