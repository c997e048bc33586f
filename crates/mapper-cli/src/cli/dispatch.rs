//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` pulls the relevant fields
//! - `Into<*Args>` bridges dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use mapper_table::LoadOptions;

use super::ColorChoice;
use crate::commands::at::AtArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::uses::UsesArgs;

pub struct DumpParams {
    pub table_path: PathBuf,
    pub ignore_case: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: table_path(m),
            ignore_case: m.get_flag("ignore_case"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            table_path: p.table_path,
            options: load_options(p.ignore_case, p.verbose),
            color: p.color.should_colorize(),
        }
    }
}

pub struct AtParams {
    pub table_path: PathBuf,
    pub offset: usize,
    pub ignore_case: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl AtParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: table_path(m),
            offset: m.get_one::<usize>("offset").copied().unwrap_or_default(),
            ignore_case: m.get_flag("ignore_case"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<AtParams> for AtArgs {
    fn from(p: AtParams) -> Self {
        Self {
            table_path: p.table_path,
            offset: p.offset,
            options: load_options(p.ignore_case, p.verbose),
            color: p.color.should_colorize(),
        }
    }
}

pub struct UsesParams {
    pub table_path: PathBuf,
    pub name: String,
    pub ignore_case: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl UsesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            table_path: table_path(m),
            name: m.get_one::<String>("name").cloned().unwrap_or_default(),
            ignore_case: m.get_flag("ignore_case"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<UsesParams> for UsesArgs {
    fn from(p: UsesParams) -> Self {
        Self {
            table_path: p.table_path,
            name: p.name,
            options: load_options(p.ignore_case, p.verbose),
            color: p.color.should_colorize(),
        }
    }
}

fn table_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("table_path")
        .cloned()
        .unwrap_or_default()
}

fn load_options(ignore_case: bool, verbosity: u8) -> LoadOptions {
    LoadOptions {
        case_sensitive: !ignore_case,
        verbosity,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
