//! Crate error type.
//!
//! The path operations themselves are total. Errors only arise at the edges:
//! strict path parsing, document encoding and file access.

use crate::path::PathError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error is returned by the fallible edges of the crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid path: {0}")]
    Path(#[from] PathError),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Creates an I/O error for the given file.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
