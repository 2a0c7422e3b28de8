//! Command walkthrough: an invoker parameterized with a simple command and
//! a command delegating to a shared worker.
//!
//! Run with: cargo run --example command_invoker

use repertoire::command::{EchoCommand, Invoker, TaskCommand, Worker};
use std::rc::Rc;

fn main() {
    let mut invoker = Invoker::new();
    invoker.set_on_start(Box::new(EchoCommand::new("Say Hi!")));

    let worker = Rc::new(Worker::default());
    invoker.set_on_finish(Box::new(TaskCommand::new(
        worker,
        "send email",
        "save report",
    )));

    for line in invoker.run() {
        println!("{line}");
    }
}
