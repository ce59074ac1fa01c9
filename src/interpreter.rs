/// The evaluator module computes the value of a parsed expression tree.
///
/// Evaluation is a pure recursive walk over the tree. There is no runtime
/// error class: only syntax errors are reported, and arithmetic follows
/// IEEE 754 floating-point rules.
pub mod evaluator;
/// The lexer module tokenizes formula text for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each tagged with the character offset it starts at.
///
/// # Responsibilities
/// - Converts the input characters into numbers, operators and parentheses.
/// - Validates numeric literals.
/// - Reports unexpected symbols and malformed numbers with their offset.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs a tree that respects operator precedence and
/// left-associativity.
///
/// # Responsibilities
/// - Converts tokens into tree nodes.
/// - Validates the grammar, reporting errors with their source offset.
pub mod parser;
