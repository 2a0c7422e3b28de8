//! Immutable state snapshots.
//!
//! A snapshot captures a state value together with the capture time. It
//! carries no mutators; its contents are only read back when an owner
//! restores from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How many characters of the captured state appear in [`Snapshot::label`].
const LABEL_PREVIEW_LEN: usize = 9;

/// Immutable capture of a state value plus capture time.
///
/// Once constructed a snapshot never changes; `taken_at` is fixed at
/// construction.
///
/// # Example
///
/// ```rust
/// use repertoire::memento::Snapshot;
///
/// let snapshot = Snapshot::capture("Super-duper-super-puper-super.");
/// assert_eq!(snapshot.state(), "Super-duper-super-puper-super.");
/// assert!(snapshot.label().contains("(Super-dup...)"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    id: Uuid,
    state: String,
    taken_at: DateTime<Utc>,
}

impl Snapshot {
    /// Capture `state` by value together with the current time.
    ///
    /// No side effects beyond reading the clock.
    pub fn capture(state: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: state.into(),
            taken_at: Utc::now(),
        }
    }

    /// Unique identifier assigned at capture.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The captured state, read-only.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// When the snapshot was taken.
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    /// Human-readable identifier for history listings.
    ///
    /// Combines the capture time with a truncated preview of the state.
    /// Deterministic: repeated calls return the identical string. Display
    /// only, never used for equality or lookup.
    pub fn label(&self) -> String {
        let preview: String = self.state.chars().take(LABEL_PREVIEW_LEN).collect();
        format!("{} / ({}...)", self.taken_at.to_rfc3339(), preview)
    }
}
