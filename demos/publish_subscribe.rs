//! Observer walkthrough: numbered observers attaching to and detaching
//! from one subject.
//!
//! Run with: cargo run --example publish_subscribe

use repertoire::observer::{NumberedObserver, Registry, Subject};
use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    let registry = Registry::new();
    let mut subject = Subject::new();

    let first = Rc::new(RefCell::new(NumberedObserver::new(&registry)));
    let second = Rc::new(RefCell::new(NumberedObserver::new(&registry)));
    let third = Rc::new(RefCell::new(NumberedObserver::new(&registry)));
    subject.attach(first.clone());
    subject.attach(second.clone());
    subject.attach(third.clone());

    subject.create_message("Hello World! :D");

    let third_number = third.borrow().number();
    subject.detach(third_number);
    subject.create_message("The weather is hot today! :p");

    println!("{} observers still attached\n", subject.observer_count());
    for observer in [&first, &second, &third] {
        let observer = observer.borrow();
        println!("observer {} received:", observer.number());
        for message in observer.inbox() {
            println!("  {message}");
        }
    }
}
