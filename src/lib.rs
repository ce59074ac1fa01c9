//! # formula
//!
//! formula evaluates arithmetic expressions written as text. It supports
//! numbers, the four binary operators `+ - * /`, unary minus and
//! parentheses, with the usual precedence and left-associativity. Every
//! syntax error is reported together with the exact character offset that
//! caused it.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Expr,
    error::PositionedError,
    interpreter::{lexer::tokenize, parser::parse},
};

/// Defines the expression tree built by the parser.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type. The
/// tree is built by the parser and evaluated in place.
///
/// # Responsibilities
/// - Defines one node variant per syntactic construct.
/// - Reports how many source tokens a subtree spans.
pub mod ast;
/// Provides the error type for tokenizing and parsing.
///
/// All user-facing failures carry the character offset at which they were
/// detected, so a front end can point at the offending character.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// This module ties together the lexer, the parser and the evaluator.
///
/// # Responsibilities
/// - Coordinates the three phases.
/// - Manages the flow of data and errors between them.
pub mod interpreter;

/// Tokenizes and parses a formula into an expression tree.
///
/// # Errors
/// Returns the first tokenizing or parsing error, with its offset.
///
/// # Examples
/// ```
/// use formula::{ast::Expr, parse_formula};
///
/// let expr = parse_formula("(7)").unwrap();
/// assert!(matches!(expr, Expr::Parenthesized { .. }));
///
/// assert_eq!(parse_formula("()").unwrap_err().position(), 0);
/// ```
pub fn parse_formula(source: &str) -> Result<Expr, PositionedError> {
    let tokens = tokenize(source)?;
    debug!(count = tokens.len(), "tokenized formula");
    parse(&tokens)
}

/// Evaluates a formula and returns its numeric result.
///
/// Each call is independent: nothing is cached or shared between calls.
/// The text is taken as is, so callers reading a line of input must strip
/// its trailing newline first.
///
/// # Errors
/// Returns a [`PositionedError`] if the formula is empty or not
/// syntactically valid. Arithmetic itself never fails; division by zero
/// yields an infinity or NaN.
///
/// # Examples
/// ```
/// use formula::evaluate_formula;
///
/// assert_eq!(evaluate_formula("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate_formula("-2*3").unwrap(), -6.0);
///
/// // The second `+` stands where an operand belongs.
/// let err = evaluate_formula("3 + + 2").unwrap_err();
/// assert_eq!(err.position(), 4);
/// ```
pub fn evaluate_formula(source: &str) -> Result<f64, PositionedError> {
    let value = parse_formula(source)?.evaluate();
    debug!(value, "evaluated formula");
    Ok(value)
}
