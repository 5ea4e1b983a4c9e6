//! FILENAME: engine/src/truth_table.rs
//! PURPOSE: Exhaustive enumeration of variable assignments.
//! CONTEXT: Row `bits` of the table assigns the distinct variable with index
//! `i` (first-appearance order) the value of bit `i` of `bits`. Rows are
//! visited in counting order, 0 to 2^N - 1.

use crate::error::{EvalError, EvalResult};
use crate::evaluator::evaluate;
use crate::valuation::{Assignment, CounterValuation};
use logic_parser::Node;
use std::collections::HashMap;

pub(crate) struct TruthTable<'a> {
    node: &'a Node,
    names: Vec<&'a str>,
    index: HashMap<&'a str, usize>,
}

impl<'a> TruthTable<'a> {
    /// Fails before any enumeration if the variable count exceeds `limit`.
    pub fn new(node: &'a Node, names: Vec<&'a str>, limit: usize) -> EvalResult<Self> {
        if names.len() > limit {
            return Err(EvalError::TooManyVariables {
                count: names.len(),
                limit,
            });
        }
        let index = names.iter().enumerate().map(|(i, &name)| (name, i)).collect();
        Ok(TruthTable { node, names, index })
    }

    pub fn row_count(&self) -> u64 {
        1u64 << self.names.len()
    }

    pub fn value_at(&self, bits: u64) -> EvalResult<bool> {
        let valuation = CounterValuation {
            index: &self.index,
            bits,
        };
        evaluate(self.node, &valuation)
    }

    /// First row whose value equals `wanted`, stopping as soon as one is found.
    pub fn find(&self, wanted: bool) -> EvalResult<Option<u64>> {
        log::debug!(
            "searching {} rows over {} variables for a {} row",
            self.row_count(),
            self.names.len(),
            wanted
        );
        for bits in 0..self.row_count() {
            if self.value_at(bits)? == wanted {
                log::debug!("row {} evaluates to {}", bits, wanted);
                return Ok(Some(bits));
            }
        }
        Ok(None)
    }

    pub fn assignment(&self, bits: u64) -> Assignment {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), (bits >> i) & 1 == 1))
            .collect()
    }

    pub fn rows(&self) -> EvalResult<Vec<(Assignment, bool)>> {
        (0..self.row_count())
            .map(|bits| Ok((self.assignment(bits), self.value_at(bits)?)))
            .collect()
    }
}
