//! Restore error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors an owner can raise while restoring from a snapshot.
///
/// Only [`Originator::restore`](super::Originator::restore) is fallible;
/// capture and backup are total.
#[derive(Debug, Error)]
pub enum RestoreError {
    /// The owner refused the snapshot.
    #[error("snapshot {id} rejected: {reason}")]
    Rejected { id: Uuid, reason: String },

    /// The snapshot payload could not be interpreted by the owner.
    #[error("snapshot payload malformed: {0}")]
    Malformed(String),
}
