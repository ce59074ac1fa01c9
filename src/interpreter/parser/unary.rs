use tracing::trace;

use crate::{
    ast::Expr,
    error::PositionedError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            binary::Priority,
            core::{ParseResult, Parser},
        },
    },
};

impl Parser<'_> {
    /// Parses a single operand starting at `start`.
    ///
    /// An operand is a number, a parenthesized group, or a minus followed by
    /// another operand. The minus is strictly a prefix and never reaches
    /// past the operand that follows it, so `-2 * 3` is `(-2) * 3`.
    ///
    /// Grammar:
    /// ```text
    ///     operand := number
    ///              | "(" range ")"
    ///              | "-" operand
    /// ```
    ///
    /// # Returns
    /// The operand and the index of the first token after it.
    ///
    /// # Errors
    /// - [`PositionedError::OrphanMinus`] if a minus is the last token of the
    ///   range.
    /// - [`PositionedError::UnexpectedToken`] if the token cannot start an
    ///   operand.
    /// - [`PositionedError::UnexpectedEndOfInput`] if the input ends where an
    ///   operand is needed.
    pub(in crate::interpreter::parser) fn parse_operand(&self,
                                                        start: usize,
                                                        end: usize)
                                                        -> ParseResult<(Expr, usize)> {
        if start >= end {
            return Err(self.missing_operand(start));
        }

        let token = &self.tokens[start];
        trace!(kind = ?token.kind, position = token.start_position, "operand");

        match token.kind {
            TokenKind::OpenParen => self.parse_grouping(start, end),
            TokenKind::Minus => {
                if start + 1 == end {
                    return Err(PositionedError::OrphanMinus { position: token.start_position });
                }
                let (expr, next) = self.parse_operand(start + 1, end)?;
                Ok((Expr::Negation { expr: Box::new(expr) }, next))
            },
            TokenKind::Number(_) => Ok((Expr::Number { value: token.value() }, start + 1)),
            TokenKind::CloseParen | TokenKind::Multiply | TokenKind::Divide | TokenKind::Plus => {
                Err(PositionedError::UnexpectedToken { position: token.start_position,
                                                       expected: "operand needed", })
            },
        }
    }

    /// Parses a parenthesized group whose opening parenthesis is at `start`.
    ///
    /// The matching close is searched for inside `[start, end)` only, so a
    /// parenthesis that closes outside the current range counts as unclosed.
    ///
    /// # Errors
    /// - [`PositionedError::UnclosedParenthesis`] if no matching `)` exists.
    /// - [`PositionedError::EmptyParentheses`] for `()`.
    /// - Any error from parsing the enclosed range.
    fn parse_grouping(&self, start: usize, end: usize) -> ParseResult<(Expr, usize)> {
        let position = self.tokens[start].start_position;
        let close = self.find_closing_parenthesis(start + 1, end)
                        .ok_or(PositionedError::UnclosedParenthesis { position })?;

        if close == start + 1 {
            return Err(PositionedError::EmptyParentheses { position });
        }

        let (expr, next) = self.parse_range(start + 1, close, Priority::Lowest)?;
        debug_assert_eq!(next, close, "broken parser: group not fully consumed");

        Ok((Expr::Parenthesized { expr: Box::new(expr) }, close + 1))
    }
}
