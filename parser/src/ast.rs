//! FILENAME: parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree for propositional formulas and
//! assembles it from postfix tokens.
//! CONTEXT: The RPN stage hands over tokens in postfix order; `parse_ast`
//! folds them into a tree with an operand stack. The engine then walks
//! this tree to evaluate it.
//!
//! SUPPORTED EXPRESSIONS:
//! - Variables: a, foo
//! - Unary operations: NOT
//! - Binary operations: AND, OR, -> (material implication)

use crate::error::FormulaError;
use crate::token::{Token, TokenKind};
use serde::{Deserialize, Serialize};

/// A parsed formula. Every child is owned by exactly one parent.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub enum Node {
    /// A propositional variable such as `a`.
    Variable { name: String },

    /// A unary operation: op operand (e.g. NOT a).
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Node>,
    },

    /// A binary operation: left op right (e.g. a AND b).
    BinaryOp {
        op: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Binary connectives.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    And,     // AND
    Or,      // OR
    Implies, // ->
}

/// Unary connectives.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    Not, // NOT
}

impl Node {
    pub fn variable(name: impl Into<String>) -> Self {
        Node::Variable { name: name.into() }
    }

    pub fn not(operand: Node) -> Self {
        Node::UnaryOp {
            op: UnaryOperator::Not,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOperator, left: Node, right: Node) -> Self {
        Node::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Variable names in left-to-right order, duplicates included.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Node::Variable { name } => names.push(name),
            Node::UnaryOp { operand, .. } => operand.collect_variables(names),
            Node::BinaryOp { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }
}

/// Builds a tree from a postfix token sequence.
///
/// Exactly one node must remain once every token is consumed. A binary
/// operator pops its right operand first, then its left.
pub fn parse_ast(tokens: Vec<Token>) -> Result<Node, FormulaError> {
    let mut stack: Vec<Node> = Vec::new();

    for token in tokens {
        let node = match token.kind {
            TokenKind::Variable(name) => Node::Variable { name },
            TokenKind::Negation => {
                let operand = stack.pop().ok_or(FormulaError::StackEmpty)?;
                Node::not(operand)
            }
            TokenKind::Conjunction => pop_binary(&mut stack, BinaryOperator::And)?,
            TokenKind::Disjunction => pop_binary(&mut stack, BinaryOperator::Or)?,
            TokenKind::Implication => pop_binary(&mut stack, BinaryOperator::Implies)?,
            kind @ (TokenKind::LeftParen | TokenKind::RightParen) => {
                return Err(FormulaError::UnexpectedToken(kind.to_string()));
            }
        };
        stack.push(node);
    }

    match stack.len() {
        0 => Err(FormulaError::Empty),
        1 => stack.pop().ok_or(FormulaError::Empty),
        n => Err(FormulaError::DanglingOperands(n)),
    }
}

fn pop_binary(stack: &mut Vec<Node>, op: BinaryOperator) -> Result<Node, FormulaError> {
    let right = stack.pop().ok_or(FormulaError::StackEmpty)?;
    let left = stack.pop().ok_or(FormulaError::StackEmpty)?;
    Ok(Node::binary(op, left, right))
}

// ============================================================================
// DISPLAY
// ============================================================================

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::And => write!(f, "AND"),
            BinaryOperator::Or => write!(f, "OR"),
            BinaryOperator::Implies => write!(f, "->"),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Not => write!(f, "NOT"),
        }
    }
}

/// Renders fully parenthesized infix that parses back to the same tree.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Variable { name } => write!(f, "{}", name),
            Node::UnaryOp { op, operand } => write!(f, "{} {}", op, operand),
            Node::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
