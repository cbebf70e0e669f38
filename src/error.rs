//! All error types for the localesync crate.
//!
//! Every failure is fatal for the whole run: translation files are
//! hand-maintained assets, and a partially merged or partially written
//! tree is worse than stopping. Errors propagate unchanged to the
//! top-level driver, which terminates the batch.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read `{path}`: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON cannot be decoded: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicated translation key: {0}")]
    DuplicateKey(String),

    #[error("file is not writable `{path}`: {source}")]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing into file failed: {0}")]
    Write(#[source] std::io::Error),
}

impl Error {
    /// Creates an `Unreadable` error carrying the offending path.
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Unreadable {
            path: path.into(),
            source,
        }
    }

    /// Creates an `Unwritable` error carrying the offending path.
    pub fn unwritable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Unwritable {
            path: path.into(),
            source,
        }
    }
}
