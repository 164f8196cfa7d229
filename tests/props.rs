use std::rc::Rc;

use quickcheck_macros::quickcheck;
use reselect::{Selector, create_selector, memoize};

struct State {
    a: i8,
    b: i8,
}

fn sum_selector() -> Selector<
    Rc<State>,
    (impl Fn(&Rc<State>) -> i8, impl Fn(&Rc<State>) -> i8),
    impl Fn(i8, i8) -> i16,
> {
    create_selector(
        (|s: &Rc<State>| s.a, |s: &Rc<State>| s.b),
        |a: i8, b: i8| i16::from(a) + i16::from(b),
    )
}

/// The counter grows exactly when the extracted values change between
/// consecutive calls, no matter whether the state is a new allocation.
#[quickcheck]
fn prop_recomputes_on_changed_values(steps: Vec<(i8, i8, bool)>) -> bool {
    let selector = sum_selector();
    let mut state = Rc::new(State { a: 0, b: 0 });
    let mut last = None;
    let mut expected = 0;

    for (a, b, reuse) in steps {
        if !reuse || (state.a, state.b) != (a, b) {
            state = Rc::new(State { a, b });
        }

        if last != Some((a, b)) {
            expected += 1;
        }
        last = Some((a, b));

        if selector.select(&state) != i16::from(a) + i16::from(b) {
            return false;
        }
    }

    selector.recomputations() == expected
}

/// Repeating the same arguments never recomputes.
#[quickcheck]
fn prop_repeat_is_free(a: i8, b: i8, times: u8) -> bool {
    let selector = sum_selector();
    let state = Rc::new(State { a, b });
    let first = selector.select(&state);
    (0..times).all(|_| selector.select(&state) == first) && selector.recomputations() == 1
}

/// A memoized function agrees with the plain function.
#[quickcheck]
fn prop_memoized_agrees(calls: Vec<(u16, u16)>) -> bool {
    let plain = |a: u16, b: u16| u32::from(a) * u32::from(b);
    let cached = memoize(plain);
    calls.into_iter().all(|(a, b)| cached.call((a, b)) == plain(a, b))
}
