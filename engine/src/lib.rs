//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the formula engine.
//! CONTEXT: Wraps parsed trees in `Formula` and answers evaluation,
//! tautology and satisfiability queries over them.

pub mod error;
pub mod evaluator;
pub mod formula;
pub mod limits;
mod truth_table;
pub mod valuation;

// Re-export commonly used types at the crate root
pub use error::{EvalError, EvalResult};
pub use evaluator::evaluate;
pub use formula::Formula;
pub use limits::{
    Limits, DEFAULT_MAX_TABLE_VARIABLES, DEFAULT_MAX_VARIABLES, MAX_ENUMERABLE_VARIABLES,
};
pub use logic_parser::{Node, ParseError};
pub use valuation::{Assignment, Valuation};
