//! FILENAME: engine/src/formula.rs
//! PURPOSE: The parsed-formula handle that callers hold.
//! CONTEXT: A `Formula` can only be obtained by parsing, owns its tree for
//! its whole lifetime and exposes no mutation. All queries are pure
//! functions of the tree and their arguments.

use crate::error::EvalResult;
use crate::evaluator::evaluate;
use crate::limits::Limits;
use crate::truth_table::TruthTable;
use crate::valuation::{Assignment, Valuation};
use logic_parser::{parse, Node, ParseError, ParseResult};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Formula {
    root: Node,
}

impl Formula {
    /// Parses `input` through the lexer, RPN and AST stages.
    pub fn parse(input: &str) -> ParseResult<Self> {
        Ok(Formula { root: parse(input)? })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Variable names in left-to-right order, duplicates included.
    pub fn variables(&self) -> Vec<&str> {
        self.root.variables()
    }

    /// Variable names in first-appearance order, each once.
    pub fn distinct_variables(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.variables()
            .into_iter()
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Distinct variables that `valuation` does not assign.
    pub fn missing_variables<V: Valuation + ?Sized>(&self, valuation: &V) -> Vec<&str> {
        self.distinct_variables()
            .into_iter()
            .filter(|name| valuation.value(name).is_none())
            .collect()
    }

    /// Evaluates the formula. Unused entries in `valuation` are ignored; the
    /// first missing lookup fails the call.
    pub fn evaluate<V: Valuation + ?Sized>(&self, valuation: &V) -> EvalResult<bool> {
        evaluate(&self.root, valuation)
    }

    pub fn is_tautology(&self) -> EvalResult<bool> {
        self.is_tautology_with(&Limits::default())
    }

    pub fn is_tautology_with(&self, limits: &Limits) -> EvalResult<bool> {
        Ok(self.find_counterexample_with(limits)?.is_none())
    }

    /// The first assignment, in counting order, under which the formula is false.
    pub fn find_counterexample(&self) -> EvalResult<Option<Assignment>> {
        self.find_counterexample_with(&Limits::default())
    }

    pub fn find_counterexample_with(&self, limits: &Limits) -> EvalResult<Option<Assignment>> {
        let table = self.table(limits)?;
        Ok(table.find(false)?.map(|bits| table.assignment(bits)))
    }

    pub fn is_satisfiable(&self) -> EvalResult<bool> {
        self.is_satisfiable_with(&Limits::default())
    }

    pub fn is_satisfiable_with(&self, limits: &Limits) -> EvalResult<bool> {
        Ok(self.table(limits)?.find(true)?.is_some())
    }

    pub fn is_contradiction(&self) -> EvalResult<bool> {
        self.is_contradiction_with(&Limits::default())
    }

    pub fn is_contradiction_with(&self, limits: &Limits) -> EvalResult<bool> {
        Ok(!self.is_satisfiable_with(limits)?)
    }

    /// Every assignment with its value, in counting order. All rows are held
    /// in memory, so this uses the tighter `max_table_variables` bound.
    pub fn truth_table(&self) -> EvalResult<Vec<(Assignment, bool)>> {
        self.truth_table_with(&Limits::default())
    }

    pub fn truth_table_with(&self, limits: &Limits) -> EvalResult<Vec<(Assignment, bool)>> {
        let limit = limits.effective_max_table_variables();
        TruthTable::new(&self.root, self.distinct_variables(), limit)?.rows()
    }

    fn table(&self, limits: &Limits) -> EvalResult<TruthTable<'_>> {
        TruthTable::new(&self.root, self.distinct_variables(), limits.effective_max_variables())
    }
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root)
    }
}
