//! Observer: a one-to-many dependency, where every attached observer is
//! told when the subject's message changes.
//!
//! Observer numbering lives in an explicit [`Registry`] created once at
//! startup and passed to constructors, rather than in a process-wide
//! static.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Identifier a [`Registry`] hands to each observer.
pub type ObserverId = u32;

/// Hands out observer numbers, starting at 1.
#[derive(Default)]
pub struct Registry {
    next: Cell<ObserverId>,
}

impl Registry {
    /// Create a registry with no numbers assigned yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next observer number.
    pub fn assign(&self) -> ObserverId {
        let id = self.next.get() + 1;
        self.next.set(id);
        id
    }
}

/// Receives messages from a subject.
pub trait Observer {
    /// Stable identifier used for attach/detach bookkeeping.
    fn id(&self) -> ObserverId;

    /// Called with the subject's new message.
    fn update(&mut self, message: &str);
}

/// Observer that keeps every message it has received.
pub struct NumberedObserver {
    number: ObserverId,
    inbox: Vec<String>,
}

impl NumberedObserver {
    /// Create an observer numbered by `registry`.
    pub fn new(registry: &Registry) -> Self {
        let number = registry.assign();
        tracing::debug!(observer = number, "observer created");
        Self {
            number,
            inbox: Vec::new(),
        }
    }

    /// This observer's assigned number.
    pub fn number(&self) -> ObserverId {
        self.number
    }

    /// All messages received so far, in delivery order.
    pub fn inbox(&self) -> &[String] {
        &self.inbox
    }
}

impl Observer for NumberedObserver {
    fn id(&self) -> ObserverId {
        self.number
    }

    fn update(&mut self, message: &str) {
        tracing::debug!(observer = self.number, %message, "message received");
        self.inbox.push(message.to_owned());
    }
}

/// Knows its observers and notifies all of them when its message changes.
///
/// Observers are shared `Rc<RefCell<_>>` handles so callers can keep their
/// own handle and inspect an observer after notifications. Single-threaded
/// by design.
#[derive(Default)]
pub struct Subject {
    observers: Vec<Rc<RefCell<dyn Observer>>>,
    message: String,
}

impl Subject {
    /// Create a subject with no observers and an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer.
    pub fn attach(&mut self, observer: Rc<RefCell<dyn Observer>>) {
        self.observers.push(observer);
    }

    /// Remove the observer with `id`; unknown ids are ignored.
    pub fn detach(&mut self, id: ObserverId) {
        self.observers.retain(|observer| observer.borrow().id() != id);
    }

    /// How many observers are currently attached.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Store a new message and notify every attached observer.
    pub fn create_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.notify();
    }

    fn notify(&mut self) {
        tracing::debug!(observers = self.observers.len(), "notifying");
        for observer in &self.observers {
            observer.borrow_mut().update(&self.message);
        }
    }
}
