//! Predicate string tables.
//!
//! A matcher table refers to predicates by position only. Two independent
//! tables exist: named predicates (checked by patterns at runtime) and
//! pattern predicates (checked by `CheckPatternPredicate` instructions).
//! The registry keeps both exactly as the table generator wrote them.

/// Index into one of the two predicate tables.
///
/// Which table it points into is decided by the referrer, not by the id:
/// pattern predicate lists index named predicates, `CheckPatternPredicate`
/// matchers index pattern predicates.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Deserialize)]
#[serde(transparent)]
pub struct PredicateId(u32);

impl PredicateId {
    #[inline]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PredicateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The table a [`PredicateId`] resolves against.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PredicateKind {
    Named,
    Pattern,
}

impl PredicateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Named => "named predicate",
            Self::Pattern => "pattern predicate",
        }
    }
}

/// Append-only predicate tables plus the name matching configuration.
///
/// `case_sensitive` and `verbosity` only affect how callers look up and
/// present names; stored strings are never rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateRegistry {
    named: Vec<String>,
    pattern: Vec<String>,
    case_sensitive: bool,
    verbosity: u8,
}

impl Default for PredicateRegistry {
    fn default() -> Self {
        Self::new(true, 0)
    }
}

impl PredicateRegistry {
    pub fn new(case_sensitive: bool, verbosity: u8) -> Self {
        Self {
            named: Vec::new(),
            pattern: Vec::new(),
            case_sensitive,
            verbosity,
        }
    }

    pub fn add_named_predicates<I>(&mut self, predicates: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.named.extend(predicates);
    }

    pub fn add_pattern_predicates<I>(&mut self, predicates: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.pattern.extend(predicates);
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    #[inline]
    pub fn named(&self, id: PredicateId) -> Option<&str> {
        self.named.get(id.index()).map(String::as_str)
    }

    #[inline]
    pub fn pattern(&self, id: PredicateId) -> Option<&str> {
        self.pattern.get(id.index()).map(String::as_str)
    }

    pub fn named_len(&self) -> usize {
        self.named.len()
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    pub fn iter_named(&self) -> impl Iterator<Item = (PredicateId, &str)> {
        enumerate(&self.named)
    }

    pub fn iter_pattern(&self) -> impl Iterator<Item = (PredicateId, &str)> {
        enumerate(&self.pattern)
    }

    /// First named predicate whose text equals `name` under the configured
    /// case sensitivity.
    pub fn find_named(&self, name: &str) -> Option<PredicateId> {
        self.find(&self.named, name)
    }

    /// First pattern predicate whose text equals `name` under the configured
    /// case sensitivity.
    pub fn find_pattern(&self, name: &str) -> Option<PredicateId> {
        self.find(&self.pattern, name)
    }

    fn find(&self, table: &[String], name: &str) -> Option<PredicateId> {
        table
            .iter()
            .position(|s| {
                if self.case_sensitive {
                    s == name
                } else {
                    s.eq_ignore_ascii_case(name)
                }
            })
            .map(|i| PredicateId(i as u32))
    }
}

fn enumerate(table: &[String]) -> impl Iterator<Item = (PredicateId, &str)> {
    table
        .iter()
        .enumerate()
        .map(|(i, s)| (PredicateId(i as u32), s.as_str()))
}
