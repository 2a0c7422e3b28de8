//! Snapshot/undo core: capture an owner's internal state without violating
//! encapsulation, and restore the owner to that state later.
//!
//! Three pieces cooperate:
//!
//! - [`Snapshot`]: immutable capture of a state value plus capture time
//! - [`Originator`]: owners whose state can be captured and restored,
//!   with [`Draft`] as the concrete text-holding owner
//! - [`History`]: stack-ordered caretaker providing backup and undo, with
//!   fallback to older snapshots when a restore is refused

mod error;
mod history;
mod originator;
mod snapshot;

pub use error::RestoreError;
pub use history::{History, UndoOutcome};
pub use originator::{Draft, Originator};
pub use snapshot::Snapshot;
