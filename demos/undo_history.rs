//! Snapshot/undo walkthrough.
//!
//! Scrambles a draft a few times, backing it up between edits, then rolls
//! back twice.
//!
//! Run with: cargo run --example undo_history

use repertoire::memento::{Draft, History, UndoOutcome};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut draft = Draft::new("Super-duper-super-puper-super.");
    let mut history = History::new();

    history.backup(&draft);
    draft.scramble();
    history.backup(&draft);
    draft.scramble();
    history.backup(&draft);
    draft.scramble();

    println!("Retained snapshots:");
    for label in history.labels() {
        println!("  {label}");
    }

    println!("\nNow, let's rollback!");
    report(history.undo(&mut draft), &draft);

    println!("\nOnce more!");
    report(history.undo(&mut draft), &draft);
}

fn report(outcome: UndoOutcome, draft: &Draft) {
    match outcome {
        UndoOutcome::Restored { label } => {
            println!("restored {label}");
            println!("draft is now: {}", draft.contents());
        }
        UndoOutcome::NothingToUndo => println!("nothing to undo"),
        UndoOutcome::Exhausted { discarded } => {
            println!("no snapshot could be restored ({discarded} discarded)");
        }
    }
}
