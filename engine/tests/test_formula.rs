//! FILENAME: tests/test_formula.rs
//! Integration tests for parsing, evaluating and enumerating formulas.

mod common;

use common::{assignment, chain, formula};
use logic_engine::{EvalError, Formula, Limits, ParseError};
use logic_parser::{FormulaError, TokenizeError, Unmatched, UnmatchedParenthesisError};
use std::collections::{BTreeMap, HashMap};

// ============================================================================
// PARSING
// ============================================================================

#[test]
fn test_parse_propagates_stage_errors() {
    assert_eq!(
        Formula::parse("a AND b c"),
        Err(ParseError::Formula(FormulaError::DanglingOperands(2)))
    );
    assert_eq!(
        Formula::parse("a & b"),
        Err(ParseError::Tokenize(TokenizeError { cursor: 2 }))
    );
    assert_eq!(
        Formula::parse("(a OR b"),
        Err(ParseError::UnmatchedParenthesis(UnmatchedParenthesisError {
            kind: Unmatched::MissingRight,
            offset: 0,
        }))
    );
    assert_eq!(Formula::parse(""), Err(ParseError::Formula(FormulaError::Empty)));
}

#[test]
fn test_from_str_and_display() {
    let parsed: Formula = "a -> b -> c".parse().unwrap();
    assert_eq!(parsed.to_string(), "(a -> (b -> c))");
    assert_eq!(formula(&parsed.to_string()), parsed);
}

// ============================================================================
// VARIABLES
// ============================================================================

#[test]
fn test_variables_keep_order_and_duplicates() {
    let f = formula("b AND (a OR NOT b) -> c");
    assert_eq!(f.variables(), vec!["b", "a", "b", "c"]);
    assert_eq!(f.distinct_variables(), vec!["b", "a", "c"]);
}

#[test]
fn test_missing_variables_reports_each_once() {
    let f = formula("x AND y OR x");
    assert_eq!(f.missing_variables(&assignment(&[("y", true)])), vec!["x"]);
    assert!(f.missing_variables(&assignment(&[("x", true), ("y", false)])).is_empty());
}

// ============================================================================
// EVALUATION
// ============================================================================

#[test]
fn test_evaluate_scenarios() {
    let cases: [(&str, &[(&str, bool)], bool); 12] = [
        ("var", &[("var", true)], true),
        ("var", &[("var", false)], false),
        ("NOT var", &[("var", true)], false),
        ("NOT var", &[("var", false)], true),
        ("a -> b", &[("a", true), ("b", false)], false),
        ("a OR b", &[("a", false), ("b", false)], false),
        ("a AND b", &[("a", true), ("b", true)], true),
        ("a -> a -> a", &[("a", false)], true),
        ("a OR b -> NOT c", &[("a", true), ("b", true), ("c", true)], false),
        ("a OR b -> NOT c", &[("a", false), ("b", false), ("c", true)], true),
        ("a OR b -> NOT c", &[("a", true), ("b", false), ("c", false)], true),
        ("NOT (a AND b) OR c", &[("a", true), ("b", true), ("c", false)], false),
    ];
    for (input, values, expected) in cases {
        assert_eq!(
            formula(input).evaluate(&assignment(values)),
            Ok(expected),
            "formula {:?} with {:?}",
            input,
            values
        );
    }
}

#[test]
fn test_evaluate_accepts_any_map_type() {
    let f = formula("a AND NOT b");

    let mut hash: HashMap<String, bool> = HashMap::new();
    hash.insert("a".to_string(), true);
    hash.insert("b".to_string(), false);
    assert_eq!(f.evaluate(&hash), Ok(true));

    let borrowed: BTreeMap<&str, bool> = [("a", true), ("b", true)].into_iter().collect();
    assert_eq!(f.evaluate(&borrowed), Ok(false));
}

#[test]
fn test_evaluate_ignores_unused_and_fails_on_missing() {
    let f = formula("a OR b");
    assert_eq!(
        f.evaluate(&assignment(&[("a", false), ("b", true), ("zzz", false)])),
        Ok(true)
    );
    assert_eq!(
        f.evaluate(&assignment(&[("b", true)])),
        Err(EvalError::MissingVariable("a".to_string()))
    );
}

// ============================================================================
// TAUTOLOGY AND FRIENDS
// ============================================================================

#[test]
fn test_tautology_scenarios() {
    assert_eq!(formula("a OR NOT a").is_tautology(), Ok(true));
    assert_eq!(formula("a AND NOT a").is_tautology(), Ok(false));
    assert_eq!(formula("a -> (b -> a)").is_tautology(), Ok(true));
    assert_eq!(formula("(a -> b) -> (NOT b -> NOT a)").is_tautology(), Ok(true));
    assert_eq!(formula("a -> b").is_tautology(), Ok(false));
    assert_eq!(formula("NOT (a AND b) -> NOT a OR NOT b").is_tautology(), Ok(true));
}

#[test]
fn test_counterexample_is_first_in_counting_order() {
    // Rows: a is bit 0, b is bit 1. `a -> b` first fails at a=1, b=0.
    let f = formula("a -> b");
    assert_eq!(
        f.find_counterexample(),
        Ok(Some(assignment(&[("a", true), ("b", false)])))
    );
    assert_eq!(formula("a OR NOT a").find_counterexample(), Ok(None));
}

#[test]
fn test_satisfiability_and_contradiction() {
    assert_eq!(formula("a AND NOT a").is_satisfiable(), Ok(false));
    assert_eq!(formula("a AND NOT a").is_contradiction(), Ok(true));
    assert_eq!(formula("a AND b").is_satisfiable(), Ok(true));
    assert_eq!(formula("a AND b").is_contradiction(), Ok(false));
}

#[test]
fn test_contradiction_with_limits() {
    let f = formula("(a OR b) AND NOT a AND NOT b");
    assert_eq!(f.is_contradiction_with(&Limits::strict()), Ok(true));
    assert_eq!(
        f.is_contradiction_with(&Limits::new(1)),
        Err(EvalError::TooManyVariables { count: 2, limit: 1 })
    );
}

#[test]
fn test_truth_table_rows_in_counting_order() {
    let rows = formula("a AND b").truth_table().unwrap();
    assert_eq!(
        rows,
        vec![
            (assignment(&[("a", false), ("b", false)]), false),
            (assignment(&[("a", true), ("b", false)]), false),
            (assignment(&[("a", false), ("b", true)]), false),
            (assignment(&[("a", true), ("b", true)]), true),
        ]
    );
}

// ============================================================================
// LIMITS
// ============================================================================

#[test]
fn test_fifty_one_variables_are_rejected() {
    let f = formula(&chain(51, "AND"));
    assert_eq!(f.distinct_variables().len(), 51);
    assert_eq!(
        f.is_tautology(),
        Err(EvalError::TooManyVariables { count: 51, limit: 50 })
    );
    assert!(matches!(
        f.truth_table(),
        Err(EvalError::TooManyVariables { count: 51, .. })
    ));
}

#[test]
fn test_fifty_variables_stop_at_first_falsifying_row() {
    // The all-false row comes first and already falsifies both chains.
    assert_eq!(formula(&chain(50, "AND")).is_tautology(), Ok(false));
    assert_eq!(formula(&chain(50, "OR")).is_tautology(), Ok(false));
    assert_eq!(formula(&chain(50, "OR")).is_satisfiable(), Ok(true));
}

#[test]
fn test_duplicates_do_not_count_toward_limit() {
    let repeated = format!("{} AND {}", chain(50, "AND"), chain(50, "AND"));
    let f = formula(&repeated);
    assert_eq!(f.variables().len(), 100);
    assert_eq!(f.is_tautology(), Ok(false));
}

#[test]
fn test_custom_limits() {
    let f = formula("a OR b OR c");
    assert_eq!(
        f.is_tautology_with(&Limits::new(2)),
        Err(EvalError::TooManyVariables { count: 3, limit: 2 })
    );
    assert_eq!(f.is_tautology_with(&Limits::strict()), Ok(false));
    assert_eq!(
        f.find_counterexample_with(&Limits::permissive()),
        Ok(Some(assignment(&[("a", false), ("b", false), ("c", false)])))
    );
}

#[test]
fn test_truth_table_has_its_own_smaller_bound() {
    // 26 variables pass the search bound but would mean 2^26 stored rows.
    let f = formula(&chain(26, "AND"));
    assert_eq!(
        f.truth_table(),
        Err(EvalError::TooManyVariables { count: 26, limit: 16 })
    );
    // The search queries still accept the same formula.
    assert_eq!(f.is_tautology(), Ok(false));
}

#[test]
fn test_truth_table_respects_custom_table_bound() {
    let f = formula("a AND b AND c");
    let limits = Limits::default().with_max_table_variables(2);
    assert_eq!(
        f.truth_table_with(&limits),
        Err(EvalError::TooManyVariables { count: 3, limit: 2 })
    );
    assert_eq!(f.is_tautology_with(&limits), Ok(false));
    assert_eq!(f.truth_table_with(&Limits::strict()).map(|rows| rows.len()), Ok(8));
}
