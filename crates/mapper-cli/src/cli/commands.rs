//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("mapper")
        .about("Inspect compiled instruction-selection matcher tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(at_command())
        .subcommand(uses_command())
}

/// Add the flags every command accepts.
fn with_table_args(cmd: Command) -> Command {
    cmd.arg(table_path_arg())
        .arg(ignore_case_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

/// Print every matcher, pattern and predicate of a table.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the decoded lookup table")
        .override_usage("  mapper dump <TABLE> [-v]")
        .after_help(
            r#"EXAMPLES:
  mapper dump X86.json           # matchers indented by nesting
  mapper dump X86.json -v        # include pattern provenance"#,
        );

    with_table_args(cmd)
}

/// Explain which matchers own one byte of the table.
pub fn at_command() -> Command {
    let cmd = Command::new("at")
        .about("Show the matchers enclosing a table offset")
        .override_usage("  mapper at <TABLE> <OFFSET>")
        .after_help(
            r#"EXAMPLES:
  mapper at X86.json 1234        # scope chain and originating pattern
  mapper at X86.json 1234 -vv    # also log load stages"#,
        );

    with_table_args(cmd).arg(offset_arg())
}

/// Find what checks a predicate, looked up by name.
pub fn uses_command() -> Command {
    let cmd = Command::new("uses")
        .about("Show the patterns and matchers that check a predicate")
        .override_usage("  mapper uses <TABLE> <PREDICATE> [-i]")
        .after_help(
            r#"EXAMPLES:
  mapper uses X86.json HasAVX          # patterns requiring the predicate
  mapper uses X86.json hasavx -i       # case-insensitive name match"#,
        );

    with_table_args(cmd).arg(predicate_name_arg())
}
