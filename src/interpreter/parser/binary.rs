use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::PositionedError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// Binding strength of binary operators.
///
/// Only used while parsing to decide whether an operator belongs to the
/// current recursion level or to one of its callers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// The root of an expression or the inside of parentheses.
    Lowest,
    /// `+` and `-`
    Additive,
    /// `*` and `/`
    Multiplicative,
}

impl BinaryOperator {
    /// Returns how tightly the operator binds its operands.
    ///
    /// # Example
    /// ```
    /// use formula::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.priority() > BinaryOperator::Sub.priority());
    /// assert_eq!(BinaryOperator::Add.priority(), BinaryOperator::Sub.priority());
    /// ```
    #[must_use]
    pub const fn priority(self) -> Priority {
        match self {
            Self::Add | Self::Sub => Priority::Additive,
            Self::Mul | Self::Div => Priority::Multiplicative,
        }
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers and parentheses.
///
/// # Example
/// ```
/// use formula::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&TokenKind::OpenParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        TokenKind::Number(_) | TokenKind::OpenParen | TokenKind::CloseParen => None,
    }
}

impl Parser<'_> {
    /// Parses the tokens in `[start, end)` into one expression.
    ///
    /// One operand is parsed first. After that every following token must be
    /// a binary operator. An operator that binds no tighter than
    /// `parent_priority` belongs to a caller, so parsing stops in front of
    /// it; this is what makes `7 - 3 - 2` group as `(7 - 3) - 2`. Tighter
    /// operators take the rest of the range, parsed at their own priority, as
    /// their right-hand side.
    ///
    /// # Returns
    /// The parsed expression and the index of the first unconsumed token.
    ///
    /// # Errors
    /// - [`PositionedError::UnexpectedToken`] when an operator is needed but
    ///   something else follows an operand.
    /// - Any error from operand parsing.
    pub(in crate::interpreter::parser) fn parse_range(&self,
                                                      start: usize,
                                                      end: usize,
                                                      parent_priority: Priority)
                                                      -> ParseResult<(Expr, usize)> {
        let (mut left, mut next) = self.parse_operand(start, end)?;

        while next < end {
            let token = &self.tokens[next];
            let op = operator_at(token)?;
            let priority = op.priority();

            if priority <= parent_priority {
                trace!(%op, ?parent_priority, position = token.start_position, "yield operator");
                break;
            }

            let (right, after) = self.parse_range(next + 1, end, priority)?;
            left = Expr::binary(left, op, right);
            next = after;
        }

        debug_assert_eq!(start + left.consumed_tokens(), next);
        Ok((left, next))
    }
}

fn operator_at(token: &Token) -> ParseResult<BinaryOperator> {
    token_to_binary_operator(&token.kind).ok_or(PositionedError::UnexpectedToken {
        position: token.start_position,
        expected: "operator needed",
    })
}
