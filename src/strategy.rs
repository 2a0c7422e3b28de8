//! Strategy: a family of interchangeable algorithms behind one interface,
//! varying independently of the context that uses them.

/// One way of combining the input items into a result.
pub trait Strategy {
    /// Run the algorithm over `data`.
    fn apply(&self, data: &[&str]) -> String;
}

/// Concatenate the items and sort the characters ascending.
pub struct Ascending;

impl Strategy for Ascending {
    fn apply(&self, data: &[&str]) -> String {
        let mut chars: Vec<char> = data.concat().chars().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }
}

/// Concatenate the items and sort the characters descending.
pub struct Descending;

impl Strategy for Descending {
    fn apply(&self, data: &[&str]) -> String {
        let mut chars: Vec<char> = data.concat().chars().collect();
        chars.sort_unstable_by(|a, b| b.cmp(a));
        chars.into_iter().collect()
    }
}

/// Context configured with one strategy at a time.
///
/// The sorter owns its strategy outright; swapping in a new one drops the
/// old one.
///
/// # Example
///
/// ```rust
/// use repertoire::strategy::{Ascending, Descending, Sorter};
///
/// let mut sorter = Sorter::new(Box::new(Ascending));
/// assert_eq!(sorter.run(&["a", "e", "c", "b", "d"]), "abcde");
///
/// sorter.set_strategy(Box::new(Descending));
/// assert_eq!(sorter.run(&["a", "e", "c", "b", "d"]), "edcba");
/// ```
pub struct Sorter {
    strategy: Box<dyn Strategy>,
}

impl Sorter {
    /// Create a sorter using `strategy`.
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    /// Swap in a different strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    /// Run the configured strategy over `data`.
    pub fn run(&self, data: &[&str]) -> String {
        self.strategy.apply(data)
    }
}
