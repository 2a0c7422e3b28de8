//! Chain of Responsibility: give more than one handler a chance to answer a
//! request by passing it along an ordered chain.

/// A single link in the chain: answers a request or declines it.
pub trait Handler {
    /// Produce an answer for `request`, or `None` to pass it on.
    fn handle(&self, request: &str) -> Option<String>;
}

/// Handler built from a closure.
///
/// # Example
///
/// ```rust
/// use repertoire::chain::{Handler, HandlerFn};
///
/// let monkey = HandlerFn::new(|request| {
///     (request == "Banana").then(|| "Monkey: I'll eat the Banana.".to_owned())
/// });
///
/// assert!(monkey.handle("Banana").is_some());
/// assert!(monkey.handle("Nut").is_none());
/// ```
pub struct HandlerFn {
    f: Box<dyn Fn(&str) -> Option<String>>,
}

impl HandlerFn {
    /// Wrap a closure as a handler.
    pub fn new(f: impl Fn(&str) -> Option<String> + 'static) -> Self {
        Self { f: Box::new(f) }
    }
}

impl Handler for HandlerFn {
    fn handle(&self, request: &str) -> Option<String> {
        (self.f)(request)
    }
}

/// Ordered chain of handlers; the first one that answers wins.
///
/// Callers dispatch against the chain without knowing which handler, if
/// any, will take the request.
#[derive(Default)]
pub struct Chain {
    handlers: Vec<Box<dyn Handler>>,
}

impl Chain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler to the end of the chain.
    pub fn register(mut self, handler: impl Handler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Walk the chain until a handler answers.
    ///
    /// Returns `None` when the request falls off the end untouched.
    pub fn dispatch(&self, request: &str) -> Option<String> {
        self.handlers.iter().find_map(|handler| handler.handle(request))
    }
}
