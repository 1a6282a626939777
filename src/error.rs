use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of a report run that the caller has to handle.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid report delimiter {0:?}: expected one ASCII character other than ';'")]
    Delimiter(String),
    #[error("could not ask for confirmation: {0}")]
    Prompt(#[source] io::Error),
}
