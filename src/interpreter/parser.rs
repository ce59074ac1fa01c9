/// Entry point and shared state for expression parsing.
///
/// Declares the [`core::Parser`] type, the `ParseResult` alias and the
/// top-level `parse` function that turns a token sequence into a tree.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence-climbing loop, operator classification and the
/// priority levels that drive it.
pub mod binary;

/// Operand parsing.
///
/// Handles numbers, prefix minus and parenthesized groups.
pub mod unary;

/// Helpers shared by the parsing routines, such as parenthesis matching.
pub mod utils;

pub use self::core::{Parser, parse};
