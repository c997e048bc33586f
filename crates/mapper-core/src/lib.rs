#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the matcher table mapper.
//!
//! - [`PredicateRegistry`]: the two predicate string tables referenced by index
//!   from matchers and patterns
//! - [`Colors`]: terminal palette shared by dump and CLI output

mod colors;
mod registry;


pub use colors::Colors;
pub use registry::{PredicateId, PredicateKind, PredicateRegistry};
