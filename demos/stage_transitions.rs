//! State walkthrough: a context whose behavior changes with its stage.
//!
//! Run with: cargo run --example stage_transitions

use repertoire::state::{Context, Stage};

fn main() {
    let mut context = Context::new(Stage::Drafting);

    println!("{}", context.first_request());
    println!("  now in {}", context.stage().name());

    println!("{}", context.second_request());
    println!("  now in {}", context.stage().name());
}
