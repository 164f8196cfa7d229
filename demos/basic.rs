//! Memoized functions remember exactly one call. Repeating it is free,
//! anything else replaces the slot. Shared data is keyed by identity, so a
//! fresh allocation with the same contents still runs the function.

use std::rc::Rc;

use reselect::memoize;

fn main() {
    // A loop that keeps asking the same question only pays once.
    for _ in 0..3 {
        area(3, 4); // [Miss] once, then [Hit] twice.
    }

    // Alternating between two questions thrashes the single slot.
    area(3, 4); // [Hit] Still the last call.
    area(5, 6); // [Miss] Evicts (3, 4).
    area(3, 4); // [Miss] Evicts (5, 6).

    // Strings compare by value.
    greet("world".to_string()); // [Miss] The cache is empty.
    greet(String::from("world")); // [Hit] Equal text.

    // Shared lists compare by identity.
    let scores = Rc::new(vec![3, 1, 4]);
    best(Rc::clone(&scores)); // [Miss] The cache is empty.
    best(Rc::clone(&scores)); // [Hit] The same allocation.
    best(Rc::new(vec![3, 1, 4])); // [Miss] Equal contents, new allocation.
}

/// Compute the area of a rectangle.
#[memoize]
fn area(width: u32, height: u32) -> u32 {
    println!("area {width}x{height}");
    width * height
}

/// Build a greeting.
#[memoize]
fn greet(name: String) -> String {
    println!("greet {name}");
    format!("Hello, {name}!")
}

/// Find the highest score.
#[memoize]
fn best(scores: Rc<Vec<u32>>) -> Option<u32> {
    println!("best of {}", scores.len());
    scores.iter().copied().max()
}
