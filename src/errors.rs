use std::path::PathBuf;

use thiserror::Error;

use crate::exitcode;

/// Errors raised by the roster shell (file loading, parsing, decoding).
///
/// The domain layer itself is total and raises nothing; everything here is
/// about getting a well-formed record list into it.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("failed to read roster file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("roster does not match the employee record shape: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("missing input file argument")]
    MissingInput,
}

impl RosterError {
    /// Map the error to its sysexits exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            RosterError::MissingInput => exitcode::USAGE,
            RosterError::Read { .. } => exitcode::NOINPUT,
            RosterError::Parse { .. } | RosterError::Decode(_) => exitcode::DATAERR,
        }
    }
}

/// Result type for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;
