use std::fs;

use formula::{error::PositionedError, evaluate_formula, parse_formula};
use walkdir::WalkDir;

#[test]
fn formula_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/formulas").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_number, case) in parse_cases(&content) {
            count += 1;
            match (case.expected, evaluate_formula(&case.formula)) {
                (Expected::Value(expected), Ok(value)) => {
                    assert!(same_value(expected, value),
                            "{path:?}:{line_number}: '{}' gave {value}, expected {expected}",
                            case.formula);
                },
                (Expected::ErrorAt(expected), Err(e)) => {
                    assert_eq!(e.position(),
                               expected,
                               "{path:?}:{line_number}: '{}' failed with '{e}' at the wrong offset",
                               case.formula);
                },
                (expected, result) => {
                    panic!("{path:?}:{line_number}: '{}' gave {result:?}, expected {expected:?}",
                           case.formula)
                },
            }
        }
    }

    assert!(count > 0, "No formula cases found in tests/formulas");
}

#[derive(Debug)]
enum Expected {
    Value(f64),
    ErrorAt(usize),
}

struct Case {
    formula:  String,
    expected: Expected,
}

/// Reads `formula => value` and `formula => error @ offset` lines.
fn parse_cases(content: &str) -> Vec<(usize, Case)> {
    let mut cases = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let (formula, expected) =
            line.rsplit_once(" => ")
                .unwrap_or_else(|| panic!("Malformed case on line {}: {line}", i + 1));

        let expected = match expected.strip_prefix("error @ ") {
            Some(offset) => Expected::ErrorAt(offset.parse().expect("bad error offset")),
            None => Expected::Value(expected.parse().expect("bad expected value")),
        };

        cases.push((i + 1,
                    Case { formula: formula.to_string(),
                           expected }));
    }

    cases
}

fn same_value(expected: f64, actual: f64) -> bool {
    expected == actual || (expected.is_nan() && actual.is_nan())
}

fn assert_value(src: &str, expected: f64) {
    match evaluate_formula(src) {
        Ok(value) => assert_eq!(value, expected, "'{src}'"),
        Err(e) => panic!("'{src}' failed at {}: {e}", e.position()),
    }
}

fn assert_error(src: &str, expected: &PositionedError) {
    match evaluate_formula(src) {
        Ok(value) => panic!("'{src}' gave {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "'{src}'"),
    }
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("1 + 6 / 2", 4.0);
}

#[test]
fn left_associativity() {
    assert_value("7 - 3 - 2", 2.0);
    assert_value("100 / 10 / 5", 2.0);
    assert_value("1 - 2 + 3", 2.0);
}

#[test]
fn nested_parentheses() {
    assert_value("2 * (3 * ((3 + 1) + 1) + 2)", 34.0);
    assert_value("((3 + 2) * (1 + 1))", 10.0);
}

#[test]
fn unary_minus_is_prefix_only() {
    assert_value("-2*3", -6.0);
    assert_value("-2 + 3", 1.0);
    assert_value("3 - -2", 5.0);
    assert_value("-(2 * 3)", -6.0);
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_value("1 / (3 - 3)", f64::INFINITY);
    assert_value("-1 / (3 - 3)", f64::NEG_INFINITY);
    assert!(evaluate_formula("(3 - 3) / (3 - 3)").unwrap().is_nan());
}

#[test]
fn evaluation_is_idempotent() {
    let src = "7 + (((5 * 2) + 5) / (2 + 3) + 1) / 2 - 1";
    assert_eq!(evaluate_formula(src).unwrap(), evaluate_formula(src).unwrap());
}

#[test]
fn subexpression_evaluates_standalone() {
    let inner = "(3 + 1) * 2.5";
    let whole = evaluate_formula(&format!("4 + ({inner}) - 1")).unwrap();
    assert_eq!(whole, 4.0 + evaluate_formula(inner).unwrap() - 1.0);
}

#[test]
fn error_variants_and_positions() {
    assert_error("", &PositionedError::EmptyInput { position: 0 });
    assert_error("   ", &PositionedError::EmptyInput { position: 0 });
    assert_error("3a", &PositionedError::UnexpectedSymbol { position: 1 });
    assert_error("3 + + 2",
                 &PositionedError::UnexpectedToken { position: 4,
                                                     expected: "operand needed", });
    assert_error("5)",
                 &PositionedError::UnexpectedToken { position: 1,
                                                     expected: "operator needed", });
    assert_error("(5", &PositionedError::UnclosedParenthesis { position: 0 });
    assert_error("()", &PositionedError::EmptyParentheses { position: 0 });
    assert_error("(-)", &PositionedError::OrphanMinus { position: 1 });
    assert_error("3.3.3", &PositionedError::InvalidNumber { position: 0 });
    assert_error("2 *", &PositionedError::UnexpectedEndOfInput { position: 3 });
}

#[test]
fn overflowing_literal_is_invalid() {
    let huge = "3".repeat(500);
    assert_error(&huge, &PositionedError::InvalidNumber { position: 0 });
}

#[test]
fn zero_literal_is_rejected() {
    // Only normal floating-point values are accepted as literals, which
    // excludes zero and subnormals.
    assert_error("0", &PositionedError::InvalidNumber { position: 0 });
    assert_error("1 + 0.0", &PositionedError::InvalidNumber { position: 4 });
    assert_error("1e-310", &PositionedError::UnexpectedSymbol { position: 1 });
    assert_error(&format!("0.{}1", "0".repeat(310)),
                 &PositionedError::InvalidNumber { position: 0 });
}

#[test]
fn only_spaces_separate_tokens() {
    assert_value(" 1 +   2 ", 3.0);
    assert_error("1 +\t2", &PositionedError::UnexpectedSymbol { position: 3 });
    assert_error("1 + 2\n", &PositionedError::UnexpectedSymbol { position: 5 });
}

#[test]
fn long_operator_chains_evaluate() {
    let terms = 100_000;

    let sum = vec!["1"; terms].join(" + ");
    assert_value(&sum, 100_000.0);

    let mixed = vec!["2 * 3 - 5"; terms].join(" + ");
    assert_value(&mixed, 100_000.0);

    let quotient = format!("1{}", " / 1".repeat(terms));
    assert_value(&quotient, 1.0);
}

#[test]
fn long_chain_tree_spans_every_token() {
    let src = vec!["4"; 100_000].join(" - ");
    let expr = parse_formula(&src).unwrap();

    assert_eq!(expr.consumed_tokens(), 199_999);
    assert_eq!(expr.evaluate(), evaluate_formula(&src).unwrap());
    assert_eq!(expr.evaluate(), 4.0 - 4.0 * 99_999.0);
}

#[test]
fn error_messages_name_what_was_needed() {
    let message = |src: &str| evaluate_formula(src).unwrap_err().to_string();

    assert_eq!(message("3 2"), "Unexpected token: operator needed");
    assert_eq!(message("*"), "Unexpected token: operand needed");
    assert_eq!(message("3 +"), "Unexpected end of input: operand needed");
    assert_eq!(message("(3 +)"), "Unexpected token: operand needed");
}
