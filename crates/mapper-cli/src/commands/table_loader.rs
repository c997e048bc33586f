use std::path::Path;

use mapper_table::{LoadOptions, LookupTable};

use super::{CommandError, exit_with};

pub fn load_table(path: &Path, options: LoadOptions) -> Result<LookupTable, CommandError> {
    let table = LookupTable::from_path(path, options)?;
    tracing::info!(
        path = %path.display(),
        matchers = table.matchers().len(),
        patterns = table.patterns().len(),
        table_size = table.table_size(),
        "loaded lookup table"
    );
    Ok(table)
}

pub fn load_table_or_exit(path: &Path, options: LoadOptions) -> LookupTable {
    load_table(path, options).unwrap_or_else(|err| exit_with(err))
}
