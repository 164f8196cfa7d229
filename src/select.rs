use std::fmt::{self, Debug, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::cache::Memo;
use crate::func::Func;
use crate::memoize::{memoized, try_memoized};
use crate::shallow::Shallow;

/// Derives one value from a selector's arguments.
///
/// Implemented for every `Fn(&Args) -> T` and for [`Selector`] itself, which
/// is what makes selectors composable: a selector can serve as an extractor
/// of another selector taking the same arguments.
pub trait Select<Args> {
    /// The derived value.
    type Output;

    /// Derive the value from the arguments.
    fn select(&self, args: &Args) -> Self::Output;
}

impl<Args, F, Out> Select<Args> for F
where
    F: Fn(&Args) -> Out,
{
    type Output = Out;

    #[inline]
    fn select(&self, args: &Args) -> Out {
        self(args)
    }
}

/// An ordered list of extractors.
///
/// Implemented for tuples of up to twelve [`Select`] implementations. The
/// extracted values are returned as a tuple in the same order.
pub trait Extract<Args> {
    /// The tuple of extracted values.
    type Values: Shallow + Clone;

    /// Run every extractor against the arguments, in declaration order.
    fn extract(&self, args: &Args) -> Self::Values;
}

macro_rules! extract_tuple {
    ($($param:ident $idx:tt),*) => {
        impl<Args, $($param),*> Extract<Args> for ($($param,)*)
        where
            $($param: Select<Args>, $param::Output: Shallow + Clone,)*
        {
            type Values = ($($param::Output,)*);

            #[inline]
            #[allow(unused_variables)]
            fn extract(&self, args: &Args) -> Self::Values {
                ($(self.$idx.select(args),)*)
            }
        }
    };
}

extract_tuple! {}
extract_tuple! { A 0 }
extract_tuple! { A 0, B 1 }
extract_tuple! { A 0, B 1, C 2 }
extract_tuple! { A 0, B 1, C 2, D 3 }
extract_tuple! { A 0, B 1, C 2, D 3, E 4 }
extract_tuple! { A 0, B 1, C 2, D 3, E 4, F 5 }
extract_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6 }
extract_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7 }
extract_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8 }
extract_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9 }
extract_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10 }
extract_tuple! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11 }

/// A memoized derived value.
///
/// A selector runs a list of extractors against its arguments and feeds the
/// extracted values into a combiner. It has two single-slot caches:
///
/// - The _outer_ cache is keyed by the arguments. Calling the selector with
///   arguments that are [shallowly equal](Shallow) to the previous call's
///   returns the previous result without running anything.
/// - The _inner_ cache is keyed by the extracted values. When the arguments
///   changed but every extractor produced the same value as last time, the
///   combiner is not rerun either.
///
/// Only the inner layer counts as a [recomputation](Self::recomputations).
///
/// ```
/// use std::rc::Rc;
/// use reselect::create_selector;
///
/// struct State { a: i32, b: i32 }
///
/// let sum = create_selector(
///     (|s: &Rc<State>| s.a, |s: &Rc<State>| s.b),
///     |a: i32, b: i32| a + b,
/// );
///
/// let state = Rc::new(State { a: 1, b: 2 });
/// assert_eq!(sum.select(&state), 3); // [Miss] Nothing cached yet.
/// assert_eq!(sum.select(&state), 3); // [Hit] Same state.
/// assert_eq!(sum.select(&Rc::new(State { a: 1, b: 2 })), 3); // [Miss] But the values are the same.
/// assert_eq!(sum.recomputations(), 1);
/// ```
pub struct Selector<Args, X, C>
where
    X: Extract<Args>,
    C: Func<X::Values>,
{
    /// The extractors, run in order.
    extractors: X,
    /// Computes the result from the extracted values.
    combiner: C,
    /// Maps from extracted values to the combiner's result.
    inner: Memo<X::Values, C::Output>,
    /// Maps from call arguments to the final result.
    outer: Memo<Args, C::Output>,
    /// How often the combiner has run.
    recomputations: AtomicUsize,
}

/// Compose extractors and a combiner into a [`Selector`].
///
/// The combiner receives one positional argument per extractor.
pub fn create_selector<Args, X, C>(extractors: X, combiner: C) -> Selector<Args, X, C>
where
    X: Extract<Args>,
    C: Func<X::Values>,
{
    Selector::new(extractors, combiner)
}

impl<Args, X, C> Selector<Args, X, C>
where
    X: Extract<Args>,
    C: Func<X::Values>,
{
    /// Compose extractors and a combiner.
    pub const fn new(extractors: X, combiner: C) -> Self {
        Self {
            extractors,
            combiner,
            inner: Memo::new(),
            outer: Memo::new(),
            recomputations: AtomicUsize::new(0),
        }
    }

    /// Compute the derived value or return a cached one.
    pub fn select(&self, args: &Args) -> C::Output
    where
        Args: Shallow + Clone,
        C::Output: Clone,
    {
        if let Some(output) = self.outer.lookup(args) {
            #[cfg(feature = "testing")]
            crate::testing::register(true);

            return output;
        }

        let values = self.extractors.extract(args);
        let output = memoized(&self.inner, values, |values| self.recompute(values));
        self.outer.insert(args.clone(), output.clone());

        #[cfg(feature = "testing")]
        crate::testing::register(false);

        output
    }

    /// How often the combiner has run since the selector was created.
    pub fn recomputations(&self) -> usize {
        self.recomputations.load(Ordering::Relaxed)
    }

    /// Forget both cached entries so that the next call recomputes.
    ///
    /// The recomputation counter is left alone.
    pub fn clear(&self) {
        self.outer.clear();
        self.inner.clear();
    }

    /// Run the combiner.
    fn recompute(&self, values: &X::Values) -> C::Output {
        let count = self.recomputations.fetch_add(1, Ordering::Relaxed) + 1;
        log::trace!(target: "reselect", "running combiner (recomputation {count})");
        self.combiner.call(values.clone())
    }
}

impl<Args, X, C, T, E> Selector<Args, X, C>
where
    X: Extract<Args>,
    C: Func<X::Values, Output = Result<T, E>>,
{
    /// Like [`select`](Self::select), but an `Err` from the combiner is
    /// returned without being cached in either layer.
    ///
    /// Both methods share the same cache slots. An `Err` that
    /// [`select`](Self::select) cached is not reused here; the extractors and
    /// the combiner run again.
    pub fn try_select(&self, args: &Args) -> Result<T, E>
    where
        Args: Shallow + Clone,
        T: Clone,
        E: Clone,
    {
        if let Some(Ok(output)) = self.outer.lookup(args) {
            #[cfg(feature = "testing")]
            crate::testing::register(true);

            return Ok(output);
        }

        let values = self.extractors.extract(args);
        let output = try_memoized(&self.inner, values, |values| self.recompute(values));
        if let Ok(value) = &output {
            self.outer.insert(args.clone(), Ok(value.clone()));
        }

        #[cfg(feature = "testing")]
        crate::testing::register(false);

        output
    }
}

impl<Args, X, C> Select<Args> for Selector<Args, X, C>
where
    X: Extract<Args>,
    C: Func<X::Values>,
    Args: Shallow + Clone,
    C::Output: Clone,
{
    type Output = C::Output;

    #[inline]
    fn select(&self, args: &Args) -> Self::Output {
        Selector::select(self, args)
    }
}

/// A selector whose arguments are a value tuple can serve as a combiner.
impl<Args, X, C> Func<Args> for Selector<Args, X, C>
where
    X: Extract<Args>,
    C: Func<X::Values>,
    Args: Shallow + Clone,
    C::Output: Clone,
{
    type Output = C::Output;

    #[inline]
    fn call(&self, args: Args) -> Self::Output {
        Selector::select(self, &args)
    }
}

impl<Args, X, C> Debug for Selector<Args, X, C>
where
    X: Extract<Args>,
    C: Func<X::Values>,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Selector")
            .field("recomputations", &self.recomputations())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct State {
        a: i32,
        b: i32,
    }

    fn state(a: i32, b: i32) -> Rc<State> {
        Rc::new(State { a, b })
    }

    #[test]
    fn test_outer_layer_skips_extractors() {
        let extracted = Cell::new(0);
        let selector = create_selector(
            (|s: &Rc<State>| {
                extracted.set(extracted.get() + 1);
                s.a
            },),
            |a: i32| a * 10,
        );

        let first = state(1, 0);
        assert_eq!(selector.select(&first), 10);
        assert_eq!(selector.select(&first), 10);
        assert_eq!(extracted.get(), 1);

        // A new allocation reruns the extractor, not the combiner.
        assert_eq!(selector.select(&state(1, 0)), 10);
        assert_eq!(extracted.get(), 2);
        assert_eq!(selector.recomputations(), 1);
    }

    #[test]
    fn test_zero_extractors_compute_once() {
        let selector = create_selector((), || "constant");
        assert_eq!(selector.recomputations(), 0);
        assert_eq!(selector.select(&state(1, 2)), "constant");
        assert_eq!(selector.select(&state(3, 4)), "constant");
        assert_eq!(selector.select(&state(5, 6)), "constant");
        assert_eq!(selector.recomputations(), 1);
    }

    #[test]
    fn test_only_changed_values_recompute() {
        let selector = create_selector(
            (|s: &Rc<State>| s.a, |s: &Rc<State>| s.b),
            |a: i32, b: i32| a - b,
        );

        assert_eq!(selector.select(&state(5, 2)), 3);
        assert_eq!(selector.select(&state(5, 2)), 3);
        assert_eq!(selector.recomputations(), 1);
        assert_eq!(selector.select(&state(5, 3)), 2);
        assert_eq!(selector.recomputations(), 2);
        assert_eq!(selector.select(&state(6, 3)), 3);
        assert_eq!(selector.recomputations(), 3);
    }

    #[test]
    fn test_clear_keeps_counter() {
        let selector = create_selector((|s: &Rc<State>| s.a,), |a: i32| a);
        let current = state(1, 1);
        selector.select(&current);
        selector.clear();
        selector.select(&current);
        assert_eq!(selector.recomputations(), 2);
        assert_eq!(format!("{selector:?}"), "Selector { recomputations: 2, .. }");
    }

    #[test]
    fn test_failed_combiner_is_not_cached() {
        let selector = create_selector((|s: &Rc<State>| s.b,), |b: i32| {
            if b == 0 { Err("division by zero") } else { Ok(100 / b) }
        });

        let good = state(0, 4);
        let bad = state(0, 0);
        assert_eq!(selector.try_select(&good), Ok(25));
        assert_eq!(selector.try_select(&bad), Err("division by zero"));
        assert_eq!(selector.try_select(&bad), Err("division by zero"));
        assert_eq!(selector.recomputations(), 3);

        // The successful entry survived both failures.
        assert_eq!(selector.try_select(&good), Ok(25));
        assert_eq!(selector.recomputations(), 3);
    }

    #[test]
    fn test_try_select_ignores_cached_error() {
        let selector = create_selector((|s: &Rc<State>| s.b,), |b: i32| {
            if b == 0 { Err("division by zero") } else { Ok(100 / b) }
        });

        let bad = state(0, 0);
        assert_eq!(selector.select(&bad), Err("division by zero"));
        assert_eq!(selector.select(&bad), Err("division by zero"));
        assert_eq!(selector.recomputations(), 1);

        assert_eq!(selector.try_select(&bad), Err("division by zero"));
        assert_eq!(selector.recomputations(), 2);
    }
}
