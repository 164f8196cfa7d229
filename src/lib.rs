//! Memoized selectors.
//!
//! A [`Selector`] derives a value from some arguments (typically an
//! application state plus optional extra parameters) through a list of
//! extractors and a combiner, and only reruns the combiner when one of the
//! extracted values changed. Values are compared [shallowly](Shallow): shared
//! data such as `Rc<T>` compares by identity, primitives by value.
//!
//! ```
//! use std::rc::Rc;
//! use reselect::create_selector;
//!
//! struct Sub { value: i32 }
//! struct State { sub: Rc<Sub> }
//!
//! let sub = create_selector!(|s: &Rc<State>| Rc::clone(&s.sub), |sub: Rc<Sub>| sub);
//! let value = create_selector!(sub, |sub: Rc<Sub>| sub.value);
//!
//! let state = Rc::new(State { sub: Rc::new(Sub { value: 1 }) });
//! assert_eq!(value.select(&state), 1);
//! assert_eq!(value.select(&state), 1);
//! assert_eq!(value.recomputations(), 1);
//! ```
//!
//! For plain functions, [`memoize`](fn@crate::memoize) and the
//! [`#[memoize]`](macro@crate::memoize) attribute provide the same
//! single-slot cache without the extractor layer.

mod cache;
mod func;
mod memoize;
mod select;
mod shallow;
#[cfg(feature = "testing")]
mod testing;

pub use crate::cache::Memo;
pub use crate::func::Func;
pub use crate::memoize::{Memoized, memoize};
pub use crate::select::{Extract, Select, Selector, create_selector};
pub use crate::shallow::Shallow;

#[cfg(feature = "macros")]
pub use reselect_macros::{create_selector, memoize};

/// These are implementation details. Do not rely on them!
#[doc(hidden)]
pub mod internal {
    pub use crate::cache::Memo;
    pub use crate::memoize::memoized;
    pub use crate::select::create_selector;
    pub use crate::shallow::assert_shallow;

    #[cfg(feature = "testing")]
    pub use crate::testing::last_was_hit;
}
