//! FILENAME: engine/src/limits.rs
//! PURPOSE: Bounds on exhaustive enumeration.
//! CONTEXT: Tautology, satisfiability and truth-table queries enumerate
//! 2^N assignments. These limits reject formulas whose variable count would
//! make that enumeration unreasonable before any work is done.

use serde::{Deserialize, Serialize};

/// Largest variable count a `u64` assignment counter can enumerate.
pub const MAX_ENUMERABLE_VARIABLES: usize = 63;

/// Default bound on distinct variables for enumeration queries.
pub const DEFAULT_MAX_VARIABLES: usize = 50;

/// Default bound for queries that materialize every row at once.
pub const DEFAULT_MAX_TABLE_VARIABLES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of distinct variables. Values above
    /// `MAX_ENUMERABLE_VARIABLES` are clamped.
    pub max_variables: usize,
    /// Maximum number of distinct variables for a full truth table, which
    /// holds all 2^N rows in memory. Never exceeds `max_variables`.
    pub max_table_variables: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_VARIABLES,
            max_table_variables: DEFAULT_MAX_TABLE_VARIABLES,
        }
    }
}

impl Limits {
    /// Sets the search bound; the table bound keeps its default.
    pub fn new(max_variables: usize) -> Self {
        Self {
            max_variables,
            max_table_variables: DEFAULT_MAX_TABLE_VARIABLES,
        }
    }

    pub fn with_max_table_variables(mut self, max_table_variables: usize) -> Self {
        self.max_table_variables = max_table_variables;
        self
    }

    /// The widest search bound the enumerator supports.
    pub fn permissive() -> Self {
        Self {
            max_variables: MAX_ENUMERABLE_VARIABLES,
            max_table_variables: 24,
        }
    }

    /// Small bound for callers that need interactive response times.
    pub fn strict() -> Self {
        Self {
            max_variables: 16,
            max_table_variables: 10,
        }
    }

    /// The search bound actually applied.
    pub fn effective_max_variables(&self) -> usize {
        self.max_variables.min(MAX_ENUMERABLE_VARIABLES)
    }

    /// The truth-table bound actually applied.
    pub fn effective_max_table_variables(&self) -> usize {
        self.max_table_variables.min(self.effective_max_variables())
    }
}
