//! Import/export error types.

use thiserror::Error;

/// Errors that can occur while moving travel state in or out of the
/// tracker.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Serializing the export document failed
    #[error("Export serialization failed: {0}")]
    ExportFailed(#[source] serde_json::Error),

    /// The supplied document is not a JSON object of country statuses.
    /// Current state is left untouched when this is returned.
    #[error("Imported document is not valid travel data: {0}")]
    MalformedImport(#[source] serde_json::Error),
}
