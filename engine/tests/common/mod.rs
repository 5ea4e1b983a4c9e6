//! FILENAME: tests/common/mod.rs
//! Fixtures shared by the engine integration tests.

#![allow(dead_code)]

use logic_engine::{Assignment, Formula};
use logic_parser::{BinaryOperator, Node, UnaryOperator};

/// Parses a formula the tests know to be well formed.
pub fn formula(input: &str) -> Formula {
    Formula::parse(input).unwrap_or_else(|err| panic!("failed to parse {:?}: {}", input, err))
}

pub fn assignment(pairs: &[(&str, bool)]) -> Assignment {
    pairs.iter().map(|(name, value)| (name.to_string(), *value)).collect()
}

/// Distinct lowercase names: a..z, aa, ab, ...
pub fn var_name(index: usize) -> String {
    let mut name = String::new();
    let mut n = index;
    loop {
        name.insert(0, (b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break;
        }
        n -= 1;
    }
    name
}

/// `v0 <op> v1 <op> ... <op> v(count-1)` over distinct variables.
pub fn chain(count: usize, keyword: &str) -> String {
    (0..count)
        .map(var_name)
        .collect::<Vec<_>>()
        .join(&format!(" {} ", keyword))
}

/// Truth value straight from the connective definitions, independent of the
/// engine's evaluator.
pub fn reference_truth(node: &Node, assignment: &Assignment) -> bool {
    match node {
        Node::Variable { name } => assignment[name],
        Node::UnaryOp { op: UnaryOperator::Not, operand } => !reference_truth(operand, assignment),
        Node::BinaryOp { op, left, right } => {
            let l = reference_truth(left, assignment);
            let r = reference_truth(right, assignment);
            match op {
                BinaryOperator::And => l && r,
                BinaryOperator::Or => l || r,
                BinaryOperator::Implies => {
                    if l {
                        r
                    } else {
                        true
                    }
                }
            }
        }
    }
}

/// All 2^n assignments over `names`.
pub fn all_assignments(names: &[&str]) -> Vec<Assignment> {
    (0..1u32 << names.len())
        .map(|bits| {
            names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.to_string(), (bits >> i) & 1 == 1))
                .collect()
        })
        .collect()
}
