//! Error types for tag vocabulary loading.

use std::path::PathBuf;

/// Errors raised while resolving tag vocabularies.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A tag file exists (or was required) but could not be read.
    #[error("Error reading tag file {}: {source}", .path.display())]
    ReadTagFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tag file was read but is not a JSON array of strings.
    #[error("Error parsing tag file {}: {source}", .path.display())]
    ParseTagFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A framework name that has no vocabulary.
    #[error("Unknown framework `{0}` (expected one of: vuetify, vueUse, quasar)")]
    UnknownFramework(String),
}

/// Result type for vocabulary operations.
pub type LexiconResult<T> = Result<T, LexiconError>;
