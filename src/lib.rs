//! Repertoire: classic behavioral design patterns as small, testable Rust
//! building blocks.
//!
//! Each module is a self-contained rendition of one pattern. Inheritance
//! hierarchies become traits or tagged unions, raw pointer webs become
//! explicit ownership, and printed narration becomes returned strings so
//! every vignette is assertable. The runnable walkthroughs live under
//! `demos/` and do the printing.
//!
//! The most developed piece is the snapshot/undo core in [`memento`]: an
//! owner's state is captured into immutable snapshots kept by a
//! stack-ordered [`History`], and undo restores the most recent snapshot,
//! falling back to older ones when the owner refuses a restore.
//!
//! # Example
//!
//! ```rust
//! use repertoire::memento::{Draft, History, UndoOutcome};
//!
//! let mut draft = Draft::new("Alpha");
//! let mut history = History::new();
//!
//! history.backup(&draft);
//! draft.scramble();
//! history.backup(&draft);
//! draft.scramble();
//!
//! let outcome = history.undo(&mut draft);
//! assert!(matches!(outcome, UndoOutcome::Restored { .. }));
//!
//! history.undo(&mut draft);
//! assert_eq!(draft.contents(), "Alpha");
//! ```

pub mod chain;
pub mod command;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod reflect;
pub mod state;
pub mod strategy;
pub mod template;

// Re-export the snapshot/undo core types
pub use memento::{Draft, History, Originator, RestoreError, Snapshot, UndoOutcome};
