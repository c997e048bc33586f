use std::io;
use std::path::PathBuf;

use mapper_core::{PredicateId, PredicateKind};

use crate::kind::MatcherKind;

/// Lookup table load error.
///
/// Every variant is raised before a [`LookupTable`](crate::LookupTable) is
/// assembled, so a partially decoded table is never observable.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open lookup file '{}': {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("empty lookup table")]
    EmptyInput,
    #[error("malformed lookup table: {0}")]
    MalformedDocument(#[from] serde_json::Error),
    #[error("matcher at {offset}: unknown kind {kind}")]
    UnknownKind { offset: usize, kind: i64 },
    #[error("matcher at {offset}: size must be at least 1")]
    ZeroSize { offset: usize },
    #[error("matcher at {offset}: end offset does not fit in the address range")]
    OffsetOverflow { offset: usize },
    #[error("matcher at {offset} ({kind}): missing `{field}` field")]
    MissingField {
        offset: usize,
        kind: MatcherKind,
        field: &'static str,
    },
    #[error("matcher at {offset}: pattern {pattern} out of range ({count} patterns)")]
    PatternOutOfRange {
        offset: usize,
        pattern: usize,
        count: usize,
    },
    #[error("{} {id} out of range ({count} defined)", .kind.as_str())]
    PredicateOutOfRange {
        kind: PredicateKind,
        id: PredicateId,
        count: usize,
    },
}
