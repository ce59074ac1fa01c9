use tracing::debug;

use crate::{
    ast::Expr,
    error::PositionedError,
    interpreter::{lexer::Token, parser::binary::Priority},
};

pub type ParseResult<T> = Result<T, PositionedError>;

/// Precedence-climbing parser over a borrowed token sequence.
///
/// Every parsing routine works on a half-open index range `[start, end)` of
/// the token slice and returns the parsed subtree together with the index of
/// the first token it did not consume.
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) tokens: &'a [Token],
}

impl<'a> Parser<'a> {
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens }
    }

    /// Parses the whole token sequence into a single expression tree.
    ///
    /// # Errors
    /// - [`PositionedError::EmptyInput`] if there are no tokens.
    /// - Any syntax error found while parsing, positioned at the offending
    ///   token.
    pub fn parse(&self) -> ParseResult<Expr> {
        if self.tokens.is_empty() {
            return Err(PositionedError::EmptyInput { position: 0 });
        }

        let (expr, next) = self.parse_range(0, self.tokens.len(), Priority::Lowest)?;
        debug_assert_eq!(next, self.tokens.len(), "broken parser: trailing tokens left");
        debug!(tokens = expr.consumed_tokens(), "parsed expression");

        Ok(expr)
    }
}

/// Parses a token sequence into an expression tree.
///
/// This is the entry point for expression parsing. It is a shorthand for
/// [`Parser::new`] followed by [`Parser::parse`].
///
/// # Errors
/// Returns the first syntax error encountered; no partial tree is produced.
///
/// # Example
/// ```
/// use formula::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("1 - 2 - 3").unwrap();
/// let expr = parse(&tokens).unwrap();
///
/// // Left-associative: (1 - 2) - 3
/// let Expr::BinaryOp { left, op, .. } = &expr else { panic!() };
/// assert_eq!(*op, BinaryOperator::Sub);
/// assert!(matches!(**left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    Parser::new(tokens).parse()
}
