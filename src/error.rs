//! Typed failures surfaced by a conversion run
//!
//! Everything else travels as `anyhow::Error` with context; these variants
//! exist so callers can tell the file-level failures apart with
//! `downcast_ref::<ConvertError>()`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The derived `.log` path does not exist
    #[error("File '{}' not found.", .path.display())]
    InputNotFound { path: PathBuf },

    /// The input exists but could not be opened for reading
    #[error("Cannot read '{}'", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output could not be created or truncated
    #[error("Cannot write '{}'", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Classify a failure to open the input file
    pub fn open_input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            ConvertError::InputNotFound { path }
        } else {
            ConvertError::InputUnreadable { path, source }
        }
    }
}
