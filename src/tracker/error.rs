//! Tracker construction and operation errors.

use crate::store::StoreError;
use crate::transfer::TransferError;
use thiserror::Error;

/// Errors that can occur when building a tracker.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Storage slot not specified. Call .slot(slot) before .build()")]
    MissingSlot,
}

/// Any failure a tracker operation can surface.
///
/// Only two things can actually go wrong: the durable slot rejects a
/// write, or an imported document does not parse. Everything else in the
/// core is total.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}
