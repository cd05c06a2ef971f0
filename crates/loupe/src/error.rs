//! Error types for the `loupe` binary.

use loupe_lexicon::{Framework, LexiconError};
use loupe_scout::ScoutError;
use std::path::PathBuf;

/// Errors that end a `loupe` invocation.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The config file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid.
    #[error("Failed to parse {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The working directory could not be determined.
    #[error("Failed to determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error(transparent)]
    Scout(#[from] ScoutError),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    /// An importer found nothing to read below `node_modules`.
    #[error("No {framework} component sources found (looked for {})", .path.display())]
    ImporterSourceMissing { framework: Framework, path: PathBuf },

    /// An importer failed to read or write a file.
    #[error("Error importing {framework} components ({}): {source}", .path.display())]
    Import {
        framework: Framework,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON output could not be produced.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
