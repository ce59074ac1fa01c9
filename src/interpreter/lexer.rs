use logos::Logos;
use tracing::trace;

use crate::error::PositionedError;

/// The kind of a lexical token.
///
/// Numbers carry their parsed value; every other kind is a single character.
/// Only the space character separates tokens. Anything else that does not
/// match a variant is reported as an unexpected symbol.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = LexError)]
#[logos(skip r" +")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    ///
    /// Any run of digits and dots is taken as one literal, so `3.3.3` is a
    /// single malformed number rather than two tokens.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
}

/// Why the lexer rejected a slice of input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// The character is not part of the language.
    #[default]
    UnexpectedSymbol,
    /// A run of digits and dots that is not a usable number.
    InvalidNumber,
}

impl LexError {
    const fn at(self, position: usize) -> PositionedError {
        match self {
            Self::UnexpectedSymbol => PositionedError::UnexpectedSymbol { position },
            Self::InvalidNumber => PositionedError::InvalidNumber { position },
        }
    }
}

/// A token together with where it starts in the source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What was matched.
    pub kind:           TokenKind,
    /// Zero-based offset of the first character of the token.
    pub start_position: usize,
    /// Offset just past the last character of the token.
    pub end_position:   usize,
}

impl Token {
    /// Returns the numeric value of a number token.
    ///
    /// # Panics
    /// Panics if the token is not a number. The parser only asks number
    /// tokens for their value, so reaching the panic means the parser itself
    /// is broken; no input can trigger it.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self.kind {
            TokenKind::Number(value) => value,
            kind => panic!("broken parser: {kind:?} token at {} has no numeric value",
                           self.start_position),
        }
    }
}

/// Converts a formula into an ordered sequence of tokens.
///
/// Empty input gives an empty sequence. Scanning stops at the first lexeme
/// that cannot be turned into a token.
///
/// # Errors
/// - [`PositionedError::InvalidNumber`] at the first character of a literal
///   that does not parse in full or whose value is not a normal number.
/// - [`PositionedError::UnexpectedSymbol`] at any other unrecognized
///   character, including tabs and newlines.
///
/// # Example
/// ```
/// use formula::{
///     error::PositionedError,
///     interpreter::lexer::{TokenKind, tokenize},
/// };
///
/// let tokens = tokenize("(1.5 + 2)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::OpenParen,
///             TokenKind::Number(1.5),
///             TokenKind::Plus,
///             TokenKind::Number(2.0),
///             TokenKind::CloseParen]);
/// assert_eq!(tokens[2].start_position, 5);
///
/// assert_eq!(tokenize("3a"),
///            Err(PositionedError::UnexpectedSymbol { position: 1 }));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, PositionedError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    // Every accepted lexeme is ASCII, so byte spans equal character offsets up
    // to and including the first error.
    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        let kind = kind.map_err(|e| e.at(span.start))?;
        trace!(?kind, start = span.start, "token");
        tokens.push(Token { kind,
                            start_position: span.start,
                            end_position: span.end });
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// Zero, subnormal and infinite values are rejected along with anything that
/// is not a well-formed float, such as `1.2.3` or a lone `.`.
fn parse_number(lex: &mut logos::Lexer<TokenKind>) -> Result<f64, LexError> {
    match lex.slice().parse::<f64>() {
        Ok(value) if value.is_normal() => Ok(value),
        _ => Err(LexError::InvalidNumber),
    }
}
