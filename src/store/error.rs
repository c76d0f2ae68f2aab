//! Persistence error types.

use std::io;
use thiserror::Error;

/// Errors that can occur while writing travel state to the durable slot.
///
/// Reading never errors: a missing, unreadable or corrupt slot silently
/// falls back to the default seed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Serializing the status map to JSON failed
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The slot rejected a write or clear
    #[error("Failed to {operation} persisted travel state: {source}")]
    Write {
        operation: &'static str,
        #[source]
        source: io::Error,
    },
}
