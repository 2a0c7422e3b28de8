//! Chain of responsibility walkthrough: Monkey > Squirrel > Dog.
//!
//! Run with: cargo run --example request_chain

use repertoire::chain::{Chain, HandlerFn};

fn eater(name: &'static str, food: &'static str) -> HandlerFn {
    HandlerFn::new(move |request| {
        (request == food).then(|| format!("{name}: I'll eat the {request}."))
    })
}

fn main() {
    let chain = Chain::new()
        .register(eater("Monkey", "Banana"))
        .register(eater("Squirrel", "Nut"))
        .register(eater("Dog", "MeatBall"));

    println!("Chain: Monkey > Squirrel > Dog\n");
    for food in ["Nut", "Banana", "Cup of coffee"] {
        println!("Who wants a {food}?");
        match chain.dispatch(food) {
            Some(answer) => println!("  {answer}"),
            None => println!("  {food} was left untouched."),
        }
    }
}
