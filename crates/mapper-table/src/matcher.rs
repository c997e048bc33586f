//! Matcher interval model.
//!
//! Each matcher is one instruction of the table, stored as the inclusive
//! byte interval `[begin, end]` it occupies. Nesting is never stored: it
//! follows from [`Matcher::contains`] over the sorted arena.

use std::cmp::Ordering;

use mapper_core::PredicateId;

use crate::kind::MatcherKind;

/// Back-reference carried by a matcher, selected by its kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MatcherRef {
    #[default]
    None,
    /// Index into the pattern collection (terminal kinds).
    Pattern(usize),
    /// Index into the pattern predicate table (`CheckPatternPredicate`).
    PatternPredicate(PredicateId),
}

/// One instruction of the matcher table.
///
/// Equality and ordering look only at the interval: two records covering the
/// same bytes are the same interval regardless of kind.
#[derive(Clone, Copy, Debug)]
pub struct Matcher {
    kind: MatcherKind,
    begin: usize,
    end: usize,
    reference: MatcherRef,
}

impl Matcher {
    /// Build a matcher from its inclusive bounds. No validation happens here;
    /// callers guarantee `end >= begin`.
    pub fn new(kind: MatcherKind, begin: usize, end: usize, reference: MatcherRef) -> Self {
        Self {
            kind,
            begin,
            end,
            reference,
        }
    }

    /// Build a matcher from its start offset and encoded byte length.
    ///
    /// Returns `None` for an empty instruction or when the exclusive end
    /// `begin + size` does not fit in `usize`.
    pub fn with_size(
        kind: MatcherKind,
        begin: usize,
        size: usize,
        reference: MatcherRef,
    ) -> Option<Self> {
        let end = begin.checked_add(size)?.checked_sub(1)?;
        if end < begin {
            return None;
        }
        Some(Self::new(kind, begin, end, reference))
    }

    pub fn kind(&self) -> MatcherKind {
        self.kind
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn reference(&self) -> MatcherRef {
        self.reference
    }

    /// Byte length of the instruction, always at least 1.
    #[inline]
    pub fn size(&self) -> usize {
        self.end - self.begin + 1
    }

    /// Whether the byte at `offset` belongs to this instruction.
    #[inline]
    pub fn contains_offset(&self, offset: usize) -> bool {
        self.begin <= offset && offset <= self.end
    }

    /// Whether `other` is nested inside (or equal to) this interval.
    #[inline]
    pub fn contains(&self, other: &Matcher) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }

    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    pub fn has_pattern(&self) -> bool {
        self.kind.has_pattern()
    }

    pub fn has_pattern_predicate(&self) -> bool {
        self.kind.has_pattern_predicate()
    }

    pub fn pattern_idx(&self) -> Option<usize> {
        match self.reference {
            MatcherRef::Pattern(idx) => Some(idx),
            _ => None,
        }
    }

    pub fn pattern_predicate(&self) -> Option<PredicateId> {
        match self.reference {
            MatcherRef::PatternPredicate(id) => Some(id),
            _ => None,
        }
    }

    /// Root-bound correction, applied once by the loader to the outermost
    /// matcher after sorting. Fails if the widened interval's exclusive end
    /// would not fit in `usize`.
    pub(crate) fn extend_end(&mut self) -> Option<()> {
        self.end.checked_add(2)?;
        self.end += 1;
        Some(())
    }
}

impl PartialEq for Matcher {
    fn eq(&self, other: &Self) -> bool {
        self.begin == other.begin && self.end == other.end
    }
}

impl Eq for Matcher {}

impl PartialOrd for Matcher {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Matcher {
    /// `begin` ascending, then `end` descending: on a shared start offset the
    /// wider interval is the parent and must come first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.begin
            .cmp(&other.begin)
            .then_with(|| other.end.cmp(&self.end))
    }
}
