//! Human-readable lookup table dump.
//!
//! Matchers are listed in table order, indented by nesting depth:
//! ```text
//! [matchers]
//! 00..=10  Scope
//! 01..=03    CheckOpcode
//! ```

use std::fmt;

use mapper_core::{Colors, PredicateId};

use crate::lookup::LookupTable;
use crate::matcher::{Matcher, MatcherRef};
use crate::pattern::Pattern;

/// Render a lookup table as text.
pub fn dump(table: &LookupTable, colors: Colors) -> String {
    Dump::new(table, colors).to_string()
}

/// Display adapter behind [`dump`].
pub struct Dump<'a> {
    table: &'a LookupTable,
    colors: Colors,
    /// Width for byte offsets.
    offset_width: usize,
    /// Width for pattern indices (#).
    pattern_width: usize,
    /// Width for named predicate indices (P#).
    named_width: usize,
    /// Width for pattern predicate indices (Q#).
    pat_pred_width: usize,
}

impl<'a> Dump<'a> {
    pub fn new(table: &'a LookupTable, colors: Colors) -> Self {
        let last_offset = table.matchers().iter().map(Matcher::end).max().unwrap_or(0);
        let predicates = table.predicates();
        Self {
            table,
            colors,
            offset_width: width_for_count(table.table_size().max(last_offset + 1)),
            pattern_width: width_for_count(table.patterns().len()),
            named_width: width_for_count(predicates.named_len()),
            pat_pred_width: width_for_count(predicates.pattern_len()),
        }
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.colors;
        writeln!(f, "{}[table]{}", c.header, c.reset)?;
        writeln!(f, "size = {}", self.table.table_size())?;
        writeln!(f, "matchers = {}", self.table.matchers().len())?;
        writeln!(f, "patterns = {}", self.table.patterns().len())?;
        writeln!(f)
    }

    fn write_predicates(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.colors;
        let predicates = self.table.predicates();

        writeln!(f, "{}[predicates]{}", c.header, c.reset)?;
        for (id, name) in predicates.iter_named() {
            writeln!(f, "{}  {}{name:?}{}", self.named_label(id), c.text, c.reset)?;
        }
        writeln!(f)?;

        writeln!(f, "{}[pattern_predicates]{}", c.header, c.reset)?;
        for (id, code) in predicates.iter_pattern() {
            writeln!(f, "{}  {}{code:?}{}", self.pat_pred_label(id), c.text, c.reset)?;
        }
        writeln!(f)
    }

    fn write_patterns(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.colors;
        let verbose = self.table.predicates().verbosity() > 0;

        writeln!(f, "{}[patterns]{}", c.header, c.reset)?;
        for pattern in self.table.patterns() {
            self.write_pattern(f, pattern, verbose)?;
        }
        writeln!(f)
    }

    fn write_matchers(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.colors;
        let depths = self.table.depths();

        writeln!(f, "{}[matchers]{}", c.header, c.reset)?;
        for (m, depth) in self.table.matchers().iter().zip(depths) {
            let indent = "  ".repeat(depth);
            writeln!(
                f,
                "{}  {indent}{}{}{}{}",
                self.interval(m),
                c.header,
                m.kind(),
                c.reset,
                self.reference(m)
            )?;
        }
        Ok(())
    }

    /// `begin..=end`, zero-padded to the widest offset.
    pub fn interval(&self, m: &Matcher) -> String {
        let c = &self.colors;
        let ow = self.offset_width;
        format!(
            "{}{:0ow$}..={:0ow$}{}",
            c.dim,
            m.begin(),
            m.end(),
            c.reset
        )
    }

    /// Resolved back-reference of `m`, with a leading gap, or empty.
    pub fn reference(&self, m: &Matcher) -> String {
        let c = &self.colors;
        let pw = self.pattern_width;
        match m.reference() {
            MatcherRef::None => String::new(),
            MatcherRef::Pattern(idx) => format!("  #{idx:0pw$}"),
            MatcherRef::PatternPredicate(id) => {
                let label = self.pat_pred_label(id);
                match self.table.predicates().pattern(id) {
                    Some(code) => format!("  {label} {}{code:?}{}", c.text, c.reset),
                    None => format!("  {label}"),
                }
            }
        }
    }

    /// `#idx = (P.., P..)  ; names` line, followed by indented provenance
    /// lines when `with_provenance` is set.
    pub fn write_pattern(
        &self,
        w: &mut impl fmt::Write,
        pattern: &Pattern,
        with_provenance: bool,
    ) -> fmt::Result {
        let c = &self.colors;
        let pw = self.pattern_width;
        let ids: Vec<String> = pattern
            .named_predicates
            .iter()
            .map(|&id| self.named_label(id))
            .collect();

        write!(w, "#{:0pw$} = ({})", pattern.index, ids.join(", "))?;
        let names: Vec<&str> = self.table.predicate_names(pattern).collect();
        if !names.is_empty() {
            write!(w, "{}  ; {}{}", c.dim, names.join(", "), c.reset)?;
        }
        writeln!(w)?;

        if with_provenance {
            if let Some(path) = &pattern.path {
                writeln!(w, "    {}{path}{}", c.dim, c.reset)?;
            }
            if let Some(source) = &pattern.source {
                writeln!(w, "    {}{source}{}", c.text, c.reset)?;
            }
        }
        Ok(())
    }

    /// `P{id}`, zero-padded to the widest named predicate index.
    pub fn named_label(&self, id: PredicateId) -> String {
        let w = self.named_width;
        format!("P{:0w$}", id.as_u32())
    }

    /// `Q{id}`, zero-padded to the widest pattern predicate index.
    pub fn pat_pred_label(&self, id: PredicateId) -> String {
        let w = self.pat_pred_width;
        format!("Q{:0w$}", id.as_u32())
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_summary(f)?;
        self.write_predicates(f)?;
        self.write_patterns(f)?;
        self.write_matchers(f)
    }
}

/// Digits needed to print every index below `count`.
pub fn width_for_count(count: usize) -> usize {
    let mut last = count.saturating_sub(1);
    let mut width = 1;
    while last >= 10 {
        last /= 10;
        width += 1;
    }
    width
}
