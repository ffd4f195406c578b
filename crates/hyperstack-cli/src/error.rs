//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Credential, transport or API failure from the client library.
    #[error(transparent)]
    Client(#[from] hyperstack::Error),

    /// An input file named on the command line could not be read.
    #[error("cannot read {}: {source}", path.display())]
    InputFile {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Output formatting error.
    #[error("format error: {0}")]
    Format(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Wraps an IO error with the input path that caused it.
    #[must_use]
    pub fn input_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputFile {
            path: path.into(),
            source,
        }
    }
}
