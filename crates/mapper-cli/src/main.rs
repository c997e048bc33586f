mod cli;
mod commands;

use cli::{AtParams, DumpParams, UsesParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            init_tracing(params.verbose);
            commands::dump::run(params.into());
        }
        Some(("at", m)) => {
            let params = AtParams::from_matches(m);
            init_tracing(params.verbose);
            commands::at::run(params.into());
        }
        Some(("uses", m)) => {
            let params = UsesParams::from_matches(m);
            init_tracing(params.verbose);
            commands::uses::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Log to stderr. `RUST_LOG` wins over the `-v` count when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
