//! Error types for scanning.

use loupe_lexicon::LexiconError;
use std::path::PathBuf;

/// Errors that end (or, in quiet mode, skip part of) a scan.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    /// The component registry could not be read.
    #[error("Error reading components file {}: {source}", .path.display())]
    Registry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A project file could not be read.
    #[error("Error reading file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A project directory could not be listed.
    #[error("Error reading path {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Ignore list resolution failed.
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// Result type for scan operations.
pub type ScoutResult<T> = Result<T, ScoutError>;
