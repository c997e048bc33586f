use std::fmt;
use std::path::PathBuf;

use mapper_table::{Colors, Dump, LoadOptions, LookupTable};

use super::table_loader::load_table_or_exit;
use super::{CommandError, exit_with};

pub struct AtArgs {
    pub table_path: PathBuf,
    pub offset: usize,
    pub options: LoadOptions,
    pub color: bool,
}

pub fn run(args: AtArgs) {
    let table = load_table_or_exit(&args.table_path, args.options);
    match render(&table, args.offset, Colors::new(args.color)) {
        Ok(out) => print!("{out}"),
        Err(err) => exit_with(err),
    }
}

/// Enclosing matchers of `offset`, outermost first, followed by the patterns
/// of any terminal matcher among them.
pub fn render(table: &LookupTable, offset: usize, colors: Colors) -> Result<String, CommandError> {
    let chain = table.enclosing(offset);
    if chain.is_empty() {
        return Err(CommandError::OffsetOutOfRange {
            offset,
            size: table.table_size(),
        });
    }

    let report = OffsetReport {
        table,
        view: Dump::new(table, colors),
        colors,
        offset,
        chain,
    };
    Ok(report.to_string())
}

struct OffsetReport<'a> {
    table: &'a LookupTable,
    view: Dump<'a>,
    colors: Colors,
    offset: usize,
    /// Non-empty, outermost first.
    chain: Vec<usize>,
}

impl fmt::Display for OffsetReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.colors;
        let matchers = self.table.matchers();

        writeln!(f, "{}[offset {}]{}", c.header, self.offset, c.reset)?;
        let innermost = self.chain.len() - 1;
        for (depth, &idx) in self.chain.iter().enumerate() {
            let m = &matchers[idx];
            let color = if depth == innermost { c.mark } else { c.header };
            let indent = "  ".repeat(depth);
            writeln!(
                f,
                "{}  {indent}{color}{}{}{}",
                self.view.interval(m),
                m.kind(),
                c.reset,
                self.view.reference(m)
            )?;
        }

        let patterns: Vec<_> = self
            .chain
            .iter()
            .filter_map(|&idx| self.table.pattern_of(&matchers[idx]))
            .collect();
        if !patterns.is_empty() {
            writeln!(f, "\n{}[patterns]{}", c.header, c.reset)?;
            for pattern in patterns {
                self.view.write_pattern(f, pattern, true)?;
            }
        }
        Ok(())
    }
}
