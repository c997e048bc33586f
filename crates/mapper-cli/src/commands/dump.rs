use std::path::PathBuf;

use mapper_table::{Colors, LoadOptions, dump};

use super::table_loader::load_table_or_exit;

pub struct DumpArgs {
    pub table_path: PathBuf,
    pub options: LoadOptions,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let table = load_table_or_exit(&args.table_path, args.options);
    print!("{}", dump(&table, Colors::new(args.color)));
}
