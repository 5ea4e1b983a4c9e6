//! FILENAME: engine/src/valuation.rs
//! PURPOSE: Variable lookups used during evaluation.
//! CONTEXT: `Formula::evaluate` reads variable values through `Valuation`,
//! so callers can pass whichever map they already hold. The enumeration
//! code uses its own bit-counter valuation.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// An assignment of truth values, ordered by variable name.
pub type Assignment = BTreeMap<String, bool>;

/// Source of truth values for variables.
pub trait Valuation {
    /// Value of `name`, or `None` if it is not assigned.
    fn value(&self, name: &str) -> Option<bool>;
}

impl<K, S> Valuation for HashMap<K, bool, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl<K> Valuation for BTreeMap<K, bool>
where
    K: Borrow<str> + Ord,
{
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl<T: Valuation + ?Sized> Valuation for &T {
    fn value(&self, name: &str) -> Option<bool> {
        (**self).value(name)
    }
}

/// Assigns distinct variable `i` the value of bit `i` of a counter.
pub(crate) struct CounterValuation<'a> {
    pub index: &'a HashMap<&'a str, usize>,
    pub bits: u64,
}

impl Valuation for CounterValuation<'_> {
    fn value(&self, name: &str) -> Option<bool> {
        self.index.get(name).map(|&i| (self.bits >> i) & 1 == 1)
    }
}
