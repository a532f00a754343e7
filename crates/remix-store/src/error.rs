//! Error types for recipe persistence.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No saved recipe has the requested id.
    #[error("recipe {0} not found")]
    NotFound(u64),

    /// The durable write could not complete. The in-memory collection is
    /// rolled back, so a retry starts from a consistent state.
    #[error("failed to write recipe collection: {0}")]
    Write(#[source] std::io::Error),

    /// Reading the collection file failed.
    #[error("failed to read recipe collection: {0}")]
    Read(#[source] std::io::Error),

    /// The collection file exists but is not a valid collection document.
    #[error("recipe collection at {path} is corrupt: {source}")]
    Corrupt {
        path: String,
        source: serde_json::Error,
    },

    /// Encoding the collection for storage failed.
    #[error("failed to encode recipe collection: {0}")]
    Encode(#[source] serde_json::Error),

    /// A recipe needs a non-empty title and content to be saved.
    #[error("recipe title and content must not be empty")]
    InvalidRecipe,
}
