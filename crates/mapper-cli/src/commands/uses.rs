use std::fmt;
use std::path::PathBuf;

use mapper_table::{Colors, Dump, LoadOptions, LookupTable, MatcherRef, PredicateId};

use super::table_loader::load_table_or_exit;
use super::{CommandError, exit_with};

pub struct UsesArgs {
    pub table_path: PathBuf,
    pub name: String,
    pub options: LoadOptions,
    pub color: bool,
}

pub fn run(args: UsesArgs) {
    let table = load_table_or_exit(&args.table_path, args.options);
    match render(&table, &args.name, Colors::new(args.color)) {
        Ok(out) => print!("{out}"),
        Err(err) => exit_with(err),
    }
}

/// Patterns and matchers that check the predicate called `name`.
///
/// The name is looked up in both predicate tables with the table's case
/// sensitivity.
pub fn render(table: &LookupTable, name: &str, colors: Colors) -> Result<String, CommandError> {
    let predicates = table.predicates();
    let named = predicates.find_named(name);
    let pattern = predicates.find_pattern(name);
    tracing::debug!(
        predicate = name,
        case_sensitive = predicates.is_case_sensitive(),
        ?named,
        ?pattern,
        "resolved predicate name"
    );

    if named.is_none() && pattern.is_none() {
        let hint = if predicates.is_case_sensitive() {
            " (names are case-sensitive, try -i)"
        } else {
            ""
        };
        return Err(CommandError::UnknownPredicate {
            name: name.to_owned(),
            hint,
        });
    }

    let report = UsesReport {
        table,
        view: Dump::new(table, colors),
        colors,
        name,
        named,
        pattern,
    };
    Ok(report.to_string())
}

struct UsesReport<'a> {
    table: &'a LookupTable,
    view: Dump<'a>,
    colors: Colors,
    name: &'a str,
    named: Option<PredicateId>,
    pattern: Option<PredicateId>,
}

impl UsesReport<'_> {
    fn checks_named(&self, pattern_idx: usize) -> bool {
        let Some(id) = self.named else {
            return false;
        };
        self.table
            .patterns()
            .get(pattern_idx)
            .is_some_and(|p| p.named_predicates.contains(&id))
    }
}

impl fmt::Display for UsesReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.colors;
        let predicates = self.table.predicates();

        writeln!(f, "{}[predicate {:?}]{}", c.header, self.name, c.reset)?;
        if let Some(id) = self.named {
            let text = predicates.named(id).unwrap_or_default();
            writeln!(f, "{}  {}{text:?}{}", self.view.named_label(id), c.text, c.reset)?;
        }
        if let Some(id) = self.pattern {
            let text = predicates.pattern(id).unwrap_or_default();
            writeln!(f, "{}  {}{text:?}{}", self.view.pat_pred_label(id), c.text, c.reset)?;
        }

        if let Some(id) = self.named {
            writeln!(f, "\n{}[patterns]{}", c.header, c.reset)?;
            for p in self.table.patterns() {
                if p.named_predicates.contains(&id) {
                    self.view.write_pattern(f, p, false)?;
                }
            }
        }

        writeln!(f, "\n{}[matchers]{}", c.header, c.reset)?;
        for m in self.table.matchers() {
            let uses = match m.reference() {
                MatcherRef::Pattern(idx) => self.checks_named(idx),
                MatcherRef::PatternPredicate(id) => self.pattern == Some(id),
                MatcherRef::None => false,
            };
            if uses {
                writeln!(
                    f,
                    "{}  {}{}{}{}",
                    self.view.interval(m),
                    c.header,
                    m.kind(),
                    c.reset,
                    self.view.reference(m)
                )?;
            }
        }
        Ok(())
    }
}
