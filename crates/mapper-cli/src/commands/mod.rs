pub mod at;
pub mod dump;
pub mod table_loader;
pub mod uses;


use mapper_table::LoadError;

/// Failure of a command after argument parsing.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("offset {offset} is outside the table ({size} bytes)")]
    OffsetOutOfRange { offset: usize, size: usize },
    #[error("no predicate named {name:?}{hint}")]
    UnknownPredicate { name: String, hint: &'static str },
}

/// Report `err` and terminate. Only command handlers call this.
pub fn exit_with(err: CommandError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
