//! FILENAME: engine/src/evaluator.rs
//! PURPOSE: Evaluates a formula tree to a boolean.
//! CONTEXT: Recursive walk over the parser's `Node`. Both operands of a
//! binary operator are always evaluated, left first, so a missing variable
//! on either side is reported even when the result is already decided.

use crate::error::{EvalError, EvalResult};
use crate::valuation::Valuation;
use logic_parser::{BinaryOperator, Node, UnaryOperator};

pub fn evaluate<V: Valuation + ?Sized>(node: &Node, valuation: &V) -> EvalResult<bool> {
    match node {
        Node::Variable { name } => valuation
            .value(name)
            .ok_or_else(|| EvalError::MissingVariable(name.clone())),
        Node::UnaryOp { op, operand } => {
            let value = evaluate(operand, valuation)?;
            Ok(apply_unary(*op, value))
        }
        Node::BinaryOp { op, left, right } => {
            let left = evaluate(left, valuation)?;
            let right = evaluate(right, valuation)?;
            Ok(apply_binary(*op, left, right))
        }
    }
}

fn apply_unary(op: UnaryOperator, value: bool) -> bool {
    match op {
        UnaryOperator::Not => !value,
    }
}

fn apply_binary(op: BinaryOperator, left: bool, right: bool) -> bool {
    match op {
        BinaryOperator::And => left && right,
        BinaryOperator::Or => left || right,
        // Material implication: NOT left OR right
        BinaryOperator::Implies => !left || right,
    }
}
