/// Syntax errors tied to a character offset in the source text.
///
/// Every failure the tokenizer or parser can report carries the zero-based
/// offset at which the problem was detected, so callers can point at it.
pub mod positioned_error;

pub use positioned_error::PositionedError;
