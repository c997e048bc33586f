//! Matcher table decoding for offline inspection.
//!
//! This crate contains:
//! - The matcher interval model (`Matcher`, `MatcherKind`) and its ordering
//! - The loader that turns the generator's JSON line into a `LookupTable`
//! - Nesting queries over the sorted matcher arena
//! - A human-readable dump

mod document;
mod error;
mod kind;
mod lookup;
mod matcher;
mod nesting;
mod pattern;

pub mod dump;

#[cfg(test)]
mod lookup_tests;

pub use dump::{Dump, dump, width_for_count};
pub use error::LoadError;
pub use kind::MatcherKind;
pub use lookup::{LoadOptions, LookupTable, load_lookup_table};
pub use matcher::{Matcher, MatcherRef};
pub use pattern::Pattern;

pub use mapper_core::{Colors, PredicateId, PredicateKind, PredicateRegistry};
