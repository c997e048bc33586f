//! Lookup table loading and normalization.
//!
//! The generator writes the table description as a single JSON line. Loading
//! decodes every record, sorts matchers so that containing intervals precede
//! the intervals they contain, and widens the root to cover the whole table.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mapper_core::{PredicateId, PredicateKind, PredicateRegistry};

use crate::document::{RawMatcher, RawPattern, RawTable, parse_table};
use crate::error::LoadError;
use crate::kind::MatcherKind;
use crate::matcher::{Matcher, MatcherRef};
use crate::pattern::Pattern;

/// Settings stored in the predicate registry of a loaded table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub case_sensitive: bool,
    pub verbosity: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            verbosity: 0,
        }
    }
}

/// Decoded matcher table: sorted matchers, patterns and predicates.
///
/// Immutable once loaded. Nesting queries live in `nesting.rs`.
#[derive(Debug, Clone)]
pub struct LookupTable {
    pub(crate) matchers: Vec<Matcher>,
    pub(crate) patterns: Vec<Pattern>,
    pub(crate) predicates: PredicateRegistry,
    pub(crate) table_size: usize,
}

/// Load a lookup table from `path`.
pub fn load_lookup_table(
    path: impl AsRef<Path>,
    case_sensitive: bool,
    verbosity: u8,
) -> Result<LookupTable, LoadError> {
    LookupTable::from_path(
        path,
        LoadOptions {
            case_sensitive,
            verbosity,
        },
    )
}

impl LookupTable {
    /// Load from the first line of the file at `path`.
    pub fn from_path(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let unreadable = |source| LoadError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unreadable)?;
        // Not decoded here: the JSON parser validates UTF-8.
        let mut line = Vec::new();
        BufReader::new(file)
            .read_until(b'\n', &mut line)
            .map_err(unreadable)?;

        tracing::debug!(path = %path.display(), bytes = line.len(), "read lookup table");
        Self::from_json_bytes(&line, options)
    }

    /// Load from the first line of `text`. Anything after it is ignored.
    pub fn from_json_line(text: &str, options: LoadOptions) -> Result<Self, LoadError> {
        Self::from_json_bytes(text.as_bytes(), options)
    }

    /// Load from the first line of `bytes`. Invalid UTF-8 is reported as a
    /// malformed document.
    pub fn from_json_bytes(bytes: &[u8], options: LoadOptions) -> Result<Self, LoadError> {
        let line = bytes.split(|&b| b == b'\n').next().unwrap_or_default();
        if line.trim_ascii().is_empty() {
            return Err(LoadError::EmptyInput);
        }

        let raw = parse_table(line)?;
        Self::from_raw(raw, options)
    }

    fn from_raw(raw: RawTable, options: LoadOptions) -> Result<Self, LoadError> {
        let patterns = decode_patterns(raw.patterns, raw.predicates.len())?;
        let mut matchers =
            decode_matchers(&raw.matchers, patterns.len(), raw.pat_predicates.len())?;
        tracing::debug!(
            matchers = matchers.len(),
            patterns = patterns.len(),
            "decoded table records"
        );

        matchers.sort();

        // The generator sizes the root scope without the table's terminating
        // byte. Widen it so the root contains every offset of the table.
        if let Some(root) = matchers.first_mut() {
            root.extend_end().ok_or(LoadError::OffsetOverflow {
                offset: root.begin(),
            })?;
        }

        let mut predicates = PredicateRegistry::new(options.case_sensitive, options.verbosity);
        tracing::debug!(count = raw.predicates.len(), "adding named predicates");
        predicates.add_named_predicates(raw.predicates);
        tracing::debug!(count = raw.pat_predicates.len(), "adding pattern predicates");
        predicates.add_pattern_predicates(raw.pat_predicates);

        Ok(Self {
            matchers,
            patterns,
            predicates,
            table_size: raw.table_size,
        })
    }

    /// Matchers in nesting order: parents before the children they contain.
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn predicates(&self) -> &PredicateRegistry {
        &self.predicates
    }

    /// Table size declared by the generator. Not checked against matcher sizes.
    pub fn table_size(&self) -> usize {
        self.table_size
    }

    /// Outermost matcher, if the table has any.
    pub fn root(&self) -> Option<&Matcher> {
        self.matchers.first()
    }

    pub fn pattern_of(&self, matcher: &Matcher) -> Option<&Pattern> {
        matcher.pattern_idx().and_then(|idx| self.patterns.get(idx))
    }

    pub fn pattern_predicate_of(&self, matcher: &Matcher) -> Option<&str> {
        matcher
            .pattern_predicate()
            .and_then(|id| self.predicates.pattern(id))
    }

    /// Names of the named predicates `pattern` depends on, in check order.
    pub fn predicate_names<'a>(&'a self, pattern: &'a Pattern) -> impl Iterator<Item = &'a str> {
        pattern
            .named_predicates
            .iter()
            .filter_map(|&id| self.predicates.named(id))
    }
}

fn decode_patterns(raw: Vec<RawPattern>, named_count: usize) -> Result<Vec<Pattern>, LoadError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, p)| {
            for &id in &p.predicates {
                check_predicate(PredicateKind::Named, id, named_count)?;
            }
            Ok(Pattern {
                index,
                named_predicates: p.predicates,
                path: p.path,
                source: p.source,
            })
        })
        .collect()
}

fn decode_matchers(
    raw: &[RawMatcher],
    pattern_count: usize,
    pat_predicate_count: usize,
) -> Result<Vec<Matcher>, LoadError> {
    raw.iter()
        .map(|m| decode_matcher(m, pattern_count, pat_predicate_count))
        .collect()
}

fn decode_matcher(
    raw: &RawMatcher,
    pattern_count: usize,
    pat_predicate_count: usize,
) -> Result<Matcher, LoadError> {
    let offset = raw.index;
    let kind = MatcherKind::from_ordinal(raw.kind).ok_or(LoadError::UnknownKind {
        offset,
        kind: raw.kind,
    })?;
    if raw.size == 0 {
        return Err(LoadError::ZeroSize { offset });
    }

    let reference = if kind.has_pattern() {
        let pattern = raw.pattern.ok_or(LoadError::MissingField {
            offset,
            kind,
            field: "pattern",
        })?;
        if pattern >= pattern_count {
            return Err(LoadError::PatternOutOfRange {
                offset,
                pattern,
                count: pattern_count,
            });
        }
        MatcherRef::Pattern(pattern)
    } else if kind.has_pattern_predicate() {
        let id = raw.predicate.ok_or(LoadError::MissingField {
            offset,
            kind,
            field: "predicate",
        })?;
        check_predicate(PredicateKind::Pattern, id, pat_predicate_count)?;
        MatcherRef::PatternPredicate(id)
    } else {
        MatcherRef::None
    };

    Matcher::with_size(kind, offset, raw.size, reference)
        .ok_or(LoadError::OffsetOverflow { offset })
}

fn check_predicate(kind: PredicateKind, id: PredicateId, count: usize) -> Result<(), LoadError> {
    if id.index() < count {
        Ok(())
    } else {
        Err(LoadError::PredicateOutOfRange { kind, id, count })
    }
}
