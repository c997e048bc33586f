//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so every command declares the same
//! flags the same way.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Lookup table file (positional).
pub fn table_path_arg() -> Arg {
    Arg::new("table_path")
        .value_name("TABLE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Lookup table written by the table generator (single JSON line)")
}

/// Byte offset into the matcher table (positional).
pub fn offset_arg() -> Arg {
    Arg::new("offset")
        .value_name("OFFSET")
        .required(true)
        .value_parser(value_parser!(usize))
        .help("Byte offset into the matcher table")
}

/// Predicate name to look up (positional).
pub fn predicate_name_arg() -> Arg {
    Arg::new("name")
        .value_name("PREDICATE")
        .required(true)
        .help("Named or pattern predicate text, as written in the table")
}

/// Case-insensitive predicate name matching (-i/--ignore-case).
pub fn ignore_case_arg() -> Arg {
    Arg::new("ignore_case")
        .short('i')
        .long("ignore-case")
        .action(ArgAction::SetTrue)
        .help("Match predicate names case-insensitively")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v shows provenance, -vv also logs load stages)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
