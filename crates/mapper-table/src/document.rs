//! Deserialization layer: 1:1 mapping to the generator's JSON document.
//!
//! Only shape is checked here. Kind ordinals, sizes and cross references are
//! validated when the records are decoded in `lookup`.

use mapper_core::PredicateId;

#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct RawTable {
    pub matchers: Vec<RawMatcher>,
    pub patterns: Vec<RawPattern>,
    pub predicates: Vec<String>,
    pub pat_predicates: Vec<String>,
    pub table_size: usize,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct RawMatcher {
    /// Byte offset of the instruction.
    pub index: usize,
    pub size: usize,
    pub kind: i64,
    /// Present on terminal kinds only.
    pub pattern: Option<usize>,
    /// Present on `CheckPatternPredicate` only.
    pub predicate: Option<PredicateId>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct RawPattern {
    pub predicates: Vec<PredicateId>,
    pub path: Option<String>,
    #[serde(rename = "pattern")]
    pub source: Option<String>,
}

pub(crate) fn parse_table(line: &[u8]) -> Result<RawTable, serde_json::Error> {
    serde_json::from_slice(line)
}
