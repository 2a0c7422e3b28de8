//! Stack-ordered snapshot history with undo.

use super::originator::Originator;
use super::snapshot::Snapshot;

/// What a call to [`History::undo`] settled on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    /// A snapshot was applied to the owner; `label` identifies it.
    Restored { label: String },

    /// The history was already empty; the owner is untouched.
    NothingToUndo,

    /// Every retained snapshot was refused by the owner. `discarded` counts
    /// the snapshots consumed by the attempt; the history is now empty.
    Exhausted { discarded: usize },
}

/// Stack-ordered keeper of snapshots captured from one owner.
///
/// Snapshots are retained in capture order. The sequence only grows via
/// [`backup`](History::backup) and only shrinks from the tail via
/// [`undo`](History::undo) - it behaves as a stack, never a general
/// sequence. The owner is passed `&mut` per call rather than stored, so the
/// history never owns or outlives it.
///
/// # Example
///
/// ```rust
/// use repertoire::memento::{Draft, History, UndoOutcome};
///
/// let mut draft = Draft::new("Alpha");
/// let mut history = History::new();
///
/// history.backup(&draft);
/// draft.scramble();
///
/// let outcome = history.undo(&mut draft);
/// assert!(matches!(outcome, UndoOutcome::Restored { .. }));
/// assert_eq!(draft.contents(), "Alpha");
/// ```
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Capture the owner's current state onto the tail of the stack.
    ///
    /// Always succeeds.
    pub fn backup(&mut self, owner: &impl Originator) {
        let snapshot = owner.capture();
        tracing::debug!(label = %snapshot.label(), "state backed up");
        self.snapshots.push(snapshot);
    }

    /// Restore the most recently captured snapshot.
    ///
    /// Calling this on an empty history is a defined no-op, not an error.
    ///
    /// A snapshot the owner refuses stays discarded, and the next-older one
    /// is tried, until a restore succeeds or the stack runs out. History
    /// consumption is monotonic: every attempted snapshot is gone for good,
    /// whether or not it applied.
    pub fn undo(&mut self, owner: &mut impl Originator) -> UndoOutcome {
        if self.snapshots.is_empty() {
            return UndoOutcome::NothingToUndo;
        }

        let mut discarded = 0;
        while let Some(snapshot) = self.snapshots.pop() {
            discarded += 1;
            let label = snapshot.label();
            match owner.restore(&snapshot) {
                Ok(()) => {
                    tracing::debug!(%label, "state restored");
                    return UndoOutcome::Restored { label };
                }
                Err(error) => {
                    tracing::warn!(%label, %error, "snapshot refused, trying an older one");
                }
            }
        }

        UndoOutcome::Exhausted { discarded }
    }

    /// Labels of all retained snapshots, oldest first.
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.snapshots.iter().map(Snapshot::label)
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the history holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memento::RestoreError;

    /// Deterministic owner for driving the history from tests.
    struct Pad {
        state: String,
    }

    impl Pad {
        fn new(state: &str) -> Self {
            Self {
                state: state.to_owned(),
            }
        }

        fn set(&mut self, state: &str) {
            self.state = state.to_owned();
        }
    }

    impl Originator for Pad {
        fn capture(&self) -> Snapshot {
            Snapshot::capture(&self.state)
        }

        fn restore(&mut self, snapshot: &Snapshot) -> Result<(), RestoreError> {
            self.state = snapshot.state().to_owned();
            Ok(())
        }
    }

    /// Owner that refuses any snapshot whose state starts with `!`.
    struct Picky {
        state: String,
    }

    impl Originator for Picky {
        fn capture(&self) -> Snapshot {
            Snapshot::capture(&self.state)
        }

        fn restore(&mut self, snapshot: &Snapshot) -> Result<(), RestoreError> {
            if snapshot.state().starts_with('!') {
                return Err(RestoreError::Rejected {
                    id: snapshot.id(),
                    reason: "marked corrupt".to_owned(),
                });
            }
            self.state = snapshot.state().to_owned();
            Ok(())
        }
    }

    #[test]
    fn scripted_rollback_restores_in_reverse() {
        let mut pad = Pad::new("Alpha");
        let mut history = History::new();

        history.backup(&pad);
        pad.set("B");
        history.backup(&pad);
        pad.set("C");

        history.undo(&mut pad);
        assert_eq!(pad.state, "B");

        history.undo(&mut pad);
        assert_eq!(pad.state, "Alpha");

        let outcome = history.undo(&mut pad);
        assert_eq!(outcome, UndoOutcome::NothingToUndo);
        assert_eq!(pad.state, "Alpha");
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let mut pad = Pad::new("untouched");
        let mut history = History::new();

        let outcome = history.undo(&mut pad);

        assert_eq!(outcome, UndoOutcome::NothingToUndo);
        assert_eq!(pad.state, "untouched");
        assert!(history.is_empty());
    }

    #[test]
    fn undo_consumes_exactly_one_on_success() {
        let mut pad = Pad::new("one");
        let mut history = History::new();
        history.backup(&pad);
        pad.set("two");
        history.backup(&pad);

        let outcome = history.undo(&mut pad);

        assert!(matches!(outcome, UndoOutcome::Restored { .. }));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn refused_snapshot_falls_back_to_an_older_one() {
        let mut picky = Picky {
            state: "good".to_owned(),
        };
        let mut history = History::new();

        history.backup(&picky);
        picky.state = "!corrupt".to_owned();
        history.backup(&picky);

        let outcome = history.undo(&mut picky);

        // the corrupt tail snapshot is consumed, the older one applies
        assert!(matches!(outcome, UndoOutcome::Restored { .. }));
        assert_eq!(picky.state, "good");
        assert!(history.is_empty());
    }

    #[test]
    fn exhausted_when_every_snapshot_is_refused() {
        let mut picky = Picky {
            state: "!a".to_owned(),
        };
        let mut history = History::new();

        history.backup(&picky);
        picky.state = "!b".to_owned();
        history.backup(&picky);
        picky.state = "last".to_owned();

        let outcome = history.undo(&mut picky);

        assert_eq!(outcome, UndoOutcome::Exhausted { discarded: 2 });
        assert!(history.is_empty());
        assert_eq!(picky.state, "last");
    }

    #[test]
    fn labels_list_oldest_first_and_survive_undo() {
        let mut pad = Pad::new("first");
        let mut history = History::new();

        history.backup(&pad);
        pad.set("second");
        history.backup(&pad);
        pad.set("third");
        history.backup(&pad);

        let labels: Vec<String> = history.labels().collect();
        assert_eq!(labels.len(), 3);
        assert!(labels[0].contains("(first...)"));
        assert!(labels[1].contains("(second...)"));
        assert!(labels[2].contains("(third...)"));

        history.undo(&mut pad);

        // undo only removes the popped tail, never reorders
        let labels: Vec<String> = history.labels().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].contains("(first...)"));
        assert!(labels[1].contains("(second...)"));
    }
}
