//! FILENAME: engine/src/error.rs

use thiserror::Error;

/// Failures while evaluating a parsed formula.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Value of variable \"{0}\" is not given")]
    MissingVariable(String),

    #[error("Too many variables: {count} distinct, limit is {limit}")]
    TooManyVariables { count: usize, limit: usize },
}

pub type EvalResult<T> = Result<T, EvalError>;
