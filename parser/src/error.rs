//! FILENAME: parser/src/error.rs
//! PURPOSE: Failure kinds for each stage of the parsing pipeline.

use thiserror::Error;

/// The lexer found no valid token at `cursor`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unexpected token at {cursor}")]
pub struct TokenizeError {
    pub cursor: usize,
}

/// Which side of a parenthesis pair is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmatched {
    /// A `)` with no `(` before it.
    MissingLeft,
    /// A `(` that is never closed.
    MissingRight,
}

impl std::fmt::Display for Unmatched {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unmatched::MissingLeft => write!(f, "Left parenthesis not found"),
            Unmatched::MissingRight => write!(f, "Unexpected left parenthesis"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {offset}")]
pub struct UnmatchedParenthesisError {
    pub kind: Unmatched,
    /// Start of the offending parenthesis token.
    pub offset: usize,
}

/// Structural failures while assembling a tree from postfix tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("Stack empty: operator is missing an operand")]
    StackEmpty,

    #[error("Unexpected token in postfix input: {0}")]
    UnexpectedToken(String),

    #[error("Empty expression")]
    Empty,

    #[error("Expected a single expression, found {0}")]
    DanglingOperands(usize),
}

/// Any failure from `parse`: the first stage that failed wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    UnmatchedParenthesis(#[from] UnmatchedParenthesisError),

    #[error(transparent)]
    Formula(#[from] FormulaError),
}

pub type ParseResult<T> = Result<T, ParseError>;
