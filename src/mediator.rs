//! Mediator: one object encapsulates how a set of colleagues interact, so
//! the colleagues never talk to each other directly.
//!
//! The mediator owns its colleagues outright; colleagues report what they
//! did as a [`Signal`] and the mediator decides who reacts.

/// Event a colleague reports to the mediator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    DidA,
    DidB,
    DidC,
    DidD,
}

/// A participant that only knows how to perform its own operations.
struct Colleague {
    name: &'static str,
}

impl Colleague {
    fn perform(&self, operation: char) -> String {
        format!("{} does {operation}.", self.name)
    }
}

/// Owns both colleagues and routes their signals.
///
/// Reacting to [`Signal::DidA`] triggers the second colleague's C;
/// reacting to [`Signal::DidD`] triggers the first colleague's B and then
/// the second's C.
pub struct Mediator {
    first: Colleague,
    second: Colleague,
    transcript: Vec<String>,
}

impl Mediator {
    /// Create a mediator wired to its two colleagues.
    pub fn new() -> Self {
        Self {
            first: Colleague { name: "colleague 1" },
            second: Colleague { name: "colleague 2" },
            transcript: Vec::new(),
        }
    }

    /// First colleague performs A; the mediator reacts.
    pub fn trigger_a(&mut self) {
        let line = self.first.perform('A');
        self.transcript.push(line);
        self.notify(Signal::DidA);
    }

    /// Second colleague performs D; the mediator reacts.
    pub fn trigger_d(&mut self) {
        let line = self.second.perform('D');
        self.transcript.push(line);
        self.notify(Signal::DidD);
    }

    /// Everything said so far, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    fn notify(&mut self, signal: Signal) {
        tracing::debug!(?signal, "mediator notified");
        match signal {
            Signal::DidA => {
                self.transcript
                    .push("mediator reacts on A and triggers:".to_owned());
                self.transcript.push(self.second.perform('C'));
            }
            Signal::DidD => {
                self.transcript
                    .push("mediator reacts on D and triggers:".to_owned());
                self.transcript.push(self.first.perform('B'));
                self.transcript.push(self.second.perform('C'));
            }
            Signal::DidB | Signal::DidC => {}
        }
    }
}

impl Default for Mediator {
    fn default() -> Self {
        Self::new()
    }
}
