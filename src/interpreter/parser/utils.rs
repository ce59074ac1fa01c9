use crate::{
    error::PositionedError,
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Finds the `)` that closes a group whose contents begin at `start`.
    ///
    /// Nested groups are skipped by tracking depth. Only `[start, end)` is
    /// searched.
    ///
    /// # Returns
    /// The index of the closing token, or `None` if the group is unclosed.
    pub(in crate::interpreter::parser) fn find_closing_parenthesis(&self,
                                                                   start: usize,
                                                                   end: usize)
                                                                   -> Option<usize> {
        let mut depth = 0_usize;

        for (index, token) in self.tokens[start..end].iter().enumerate() {
            match token.kind {
                TokenKind::OpenParen => depth += 1,
                TokenKind::CloseParen if depth == 0 => return Some(start + index),
                TokenKind::CloseParen => depth -= 1,
                _ => {},
            }
        }

        None
    }

    /// Builds the error for an operand that is missing at index `start`.
    ///
    /// A range can run out before the token sequence does, as in `(3 +)`,
    /// where the `)` is the token that stands in the operand's place. When
    /// the sequence itself is exhausted the error points just past its last
    /// token.
    pub(in crate::interpreter::parser) fn missing_operand(&self, start: usize) -> PositionedError {
        match self.tokens.get(start) {
            Some(token) => PositionedError::UnexpectedToken { position: token.start_position,
                                                              expected: "operand needed", },
            None => {
                let position = self.tokens.last().map_or(0, |token| token.end_position);
                PositionedError::UnexpectedEndOfInput { position }
            },
        }
    }
}
