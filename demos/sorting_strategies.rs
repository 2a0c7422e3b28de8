//! Strategy walkthrough: swapping sorting strategies in one context.
//!
//! Run with: cargo run --example sorting_strategies

use repertoire::strategy::{Ascending, Descending, Sorter};

fn main() {
    let data = ["a", "e", "c", "b", "d"];

    let mut sorter = Sorter::new(Box::new(Ascending));
    println!("normal sorting:  {}", sorter.run(&data));

    sorter.set_strategy(Box::new(Descending));
    println!("reverse sorting: {}", sorter.run(&data));
}
