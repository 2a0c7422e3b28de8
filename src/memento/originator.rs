//! Owners whose state can be captured and restored.

use super::error::RestoreError;
use super::snapshot::Snapshot;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of the replacement string produced by [`Draft::scramble`].
const SCRAMBLE_LEN: usize = 30;

/// An entity whose internal state can be captured into a [`Snapshot`] and
/// later overwritten from one.
///
/// `capture` must not mutate the owner. `restore` is fallible at the trait
/// seam so a [`History`](super::History) can discard a snapshot the owner
/// refuses and fall back to an older one.
pub trait Originator {
    /// Snapshot the current state without mutating it.
    fn capture(&self) -> Snapshot;

    /// Overwrite the current state from `snapshot`.
    fn restore(&mut self, snapshot: &Snapshot) -> Result<(), RestoreError>;
}

/// A piece of text whose contents can be scrambled, captured, and restored.
///
/// Contents are always defined after construction.
///
/// # Example
///
/// ```rust
/// use repertoire::memento::{Draft, Originator};
///
/// let mut draft = Draft::new("Alpha");
/// let snapshot = draft.capture();
/// draft.scramble();
/// assert_ne!(draft.contents(), "Alpha");
///
/// draft.restore(&snapshot).unwrap();
/// assert_eq!(draft.contents(), "Alpha");
/// ```
#[derive(Clone, Debug)]
pub struct Draft {
    contents: String,
}

impl Draft {
    /// Create a draft with the given initial contents.
    pub fn new(initial: impl Into<String>) -> Self {
        let contents = initial.into();
        tracing::debug!(%contents, "draft created");
        Self { contents }
    }

    /// Current contents.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Replace the contents with a freshly generated pseudo-random
    /// alphanumeric string.
    pub fn scramble(&mut self) {
        self.contents = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SCRAMBLE_LEN)
            .map(char::from)
            .collect();
        tracing::debug!(contents = %self.contents, "draft scrambled");
    }
}

impl Originator for Draft {
    fn capture(&self) -> Snapshot {
        Snapshot::capture(&self.contents)
    }

    // Accepts any previously produced snapshot; a draft never refuses one.
    fn restore(&mut self, snapshot: &Snapshot) -> Result<(), RestoreError> {
        self.contents = snapshot.state().to_owned();
        tracing::debug!(contents = %self.contents, "draft restored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_keeps_initial_contents() {
        let draft = Draft::new("Alpha");
        assert_eq!(draft.contents(), "Alpha");
    }

    #[test]
    fn scramble_produces_fixed_length_alphanumeric() {
        let mut draft = Draft::new("Alpha");
        draft.scramble();
        assert_eq!(draft.contents().len(), 30);
        assert!(draft.contents().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn capture_does_not_mutate_contents() {
        let draft = Draft::new("unchanged");
        let _ = draft.capture();
        assert_eq!(draft.contents(), "unchanged");
    }

    #[test]
    fn restore_overwrites_contents() {
        let mut draft = Draft::new("before");
        let snapshot = draft.capture();
        draft.scramble();
        draft.restore(&snapshot).unwrap();
        assert_eq!(draft.contents(), "before");
    }

    #[test]
    fn restore_accepts_foreign_snapshots() {
        let mut draft = Draft::new("mine");
        let other = Draft::new("yours");
        draft.restore(&other.capture()).unwrap();
        assert_eq!(draft.contents(), "yours");
    }
}
