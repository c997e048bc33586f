//! Source patterns referenced by terminal matchers.

use mapper_core::PredicateId;

/// One selection pattern the table was generated from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Position in the pattern collection (document order).
    pub index: usize,
    /// Named predicates this pattern depends on, in check order.
    pub named_predicates: Vec<PredicateId>,
    /// Source file the pattern was defined in, when the generator recorded it.
    pub path: Option<String>,
    /// Pattern text, when the generator recorded it.
    pub source: Option<String>,
}

impl Pattern {
    pub fn has_provenance(&self) -> bool {
        self.path.is_some() || self.source.is_some()
    }
}
