use std::io;
use std::path::PathBuf;
use std::process;

use thiserror::Error;

pub const EXIT_ERROR: i32 = 1;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Dict(#[from] mtd_dict::DictError),

    #[error("invalid alphabet: {0}")]
    Alphabet(#[from] mtd_core::ConfigError),

    #[error(transparent)]
    Lookup(#[from] mtd_core::LookupError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type CliResult<T> = std::result::Result<T, CliError>;

pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("error: {err}");
    process::exit(EXIT_ERROR);
}
