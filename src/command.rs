//! Command: encapsulate a request as an object, so invokers can be
//! parameterized with work they know nothing about.

use std::rc::Rc;

/// An executable request. Execution returns the narration it produced.
pub trait Command {
    /// Carry out the request.
    fn execute(&self) -> Vec<String>;
}

/// Command that carries everything it needs itself.
pub struct EchoCommand {
    payload: String,
}

impl EchoCommand {
    /// Create a command that echoes `payload` on execution.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Command for EchoCommand {
    fn execute(&self) -> Vec<String> {
        vec![format!("echo: ({})", self.payload)]
    }
}

/// Receiver holding the business operations commands delegate to.
#[derive(Default)]
pub struct Worker;

impl Worker {
    /// Work on a task.
    pub fn process(&self, task: &str) -> String {
        format!("worker: working on ({task})")
    }

    /// File an item away.
    pub fn archive(&self, item: &str) -> String {
        format!("worker: also filing ({item})")
    }
}

/// Command that delegates to a shared [`Worker`] with its own context data.
///
/// The worker is shared via `Rc` so several commands can delegate to the
/// same receiver.
pub struct TaskCommand {
    worker: Rc<Worker>,
    task: String,
    item: String,
}

impl TaskCommand {
    /// Bind a worker together with the context data its operations need.
    pub fn new(worker: Rc<Worker>, task: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            worker,
            task: task.into(),
            item: item.into(),
        }
    }
}

impl Command for TaskCommand {
    fn execute(&self) -> Vec<String> {
        vec![
            self.worker.process(&self.task),
            self.worker.archive(&self.item),
        ]
    }
}

/// Sequences optional commands around its own work without depending on
/// their concrete types.
///
/// # Example
///
/// ```rust
/// use repertoire::command::{EchoCommand, Invoker};
///
/// let mut invoker = Invoker::new();
/// invoker.set_on_start(Box::new(EchoCommand::new("Say Hi!")));
///
/// let transcript = invoker.run();
/// assert_eq!(transcript[0], "echo: (Say Hi!)");
/// ```
#[derive(Default)]
pub struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
}

impl Invoker {
    /// Create an invoker with no commands attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Command to run before the main work.
    pub fn set_on_start(&mut self, command: Box<dyn Command>) {
        self.on_start = Some(command);
    }

    /// Command to run after the main work.
    pub fn set_on_finish(&mut self, command: Box<dyn Command>) {
        self.on_finish = Some(command);
    }

    /// Run the start command (if any), the main work, then the finish
    /// command (if any), returning the combined narration.
    pub fn run(&self) -> Vec<String> {
        let mut transcript = Vec::new();
        if let Some(command) = &self.on_start {
            transcript.extend(command.execute());
        }
        transcript.push("invoker: doing something really important".to_owned());
        if let Some(command) = &self.on_finish {
            transcript.extend(command.execute());
        }
        transcript
    }
}
