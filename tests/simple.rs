use std::cell::RefCell;
use std::rc::Rc;

use reselect::memoize;

thread_local! {
    static LOG: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Take the names of all runs since the last drain.
fn drain() -> Vec<String> {
    LOG.with_borrow_mut(std::mem::take)
}

#[test]
fn test_single_slot() {
    assert_eq!(label(1, true), "#1!");
    assert_eq!(label(1, true), "#1!");
    assert_eq!(drain(), ["label 1"]);

    // Only the last call is remembered.
    label(2, false);
    label(1, true);
    label(1, true);
    assert_eq!(drain(), ["label 2", "label 1"]);
}

#[test]
fn test_shared_argument() {
    let words = Rc::new(vec!["a".to_string(), "bc".to_string()]);
    assert_eq!(letters(Rc::clone(&words)), 3);
    assert_eq!(letters(Rc::clone(&words)), 3);
    assert_eq!(drain(), ["letters 2"]);

    // Same contents, new allocation.
    assert_eq!(letters(Rc::new(vec!["a".to_string(), "bc".to_string()])), 3);
    assert_eq!(drain(), ["letters 2"]);
}

#[test]
fn test_unit_result() {
    touch();
    touch();
    assert_eq!(drain(), ["touch"]);
}

/// Format a number, optionally loudly.
#[memoize]
fn label(n: u32, loud: bool) -> String {
    LOG.with_borrow_mut(|log| log.push(format!("label {n}")));
    if loud { format!("#{n}!") } else { format!("#{n}") }
}

/// Count the letters in a shared word list.
#[memoize]
fn letters(words: Rc<Vec<String>>) -> usize {
    LOG.with_borrow_mut(|log| log.push(format!("letters {}", words.len())));
    words.iter().map(String::len).sum()
}

/// A memoized function without a result.
#[memoize]
fn touch() {
    LOG.with_borrow_mut(|log| log.push("touch".into()));
}
