use std::fmt::{self, Debug, Formatter};

use crate::cache::Memo;
use crate::func::Func;
use crate::shallow::Shallow;

/// Executes a function, trying to use the cached result for it.
///
/// The function receives the arguments by reference so that they can be
/// stored afterwards without cloning. Nothing is stored if it panics.
pub fn memoized<Args, Out, F>(memo: &Memo<Args, Out>, args: Args, func: F) -> Out
where
    Args: Shallow,
    Out: Clone,
    F: FnOnce(&Args) -> Out,
{
    if let Some(output) = memo.lookup(&args) {
        #[cfg(feature = "testing")]
        crate::testing::register(true);

        return output;
    }

    let output = func(&args);
    log::trace!(target: "reselect", "memo miss, storing new entry");
    memo.insert(args, output.clone());

    #[cfg(feature = "testing")]
    crate::testing::register(false);

    output
}

/// Like [`memoized`], but an `Err` is passed through without being cached.
///
/// A cached `Err`, stored through [`memoized`] on the same cache, does not
/// count as a hit; the function runs again.
pub fn try_memoized<Args, T, E, F>(
    memo: &Memo<Args, Result<T, E>>,
    args: Args,
    func: F,
) -> Result<T, E>
where
    Args: Shallow,
    T: Clone,
    E: Clone,
    F: FnOnce(&Args) -> Result<T, E>,
{
    if let Some(Ok(output)) = memo.lookup(&args) {
        #[cfg(feature = "testing")]
        crate::testing::register(true);

        return Ok(output);
    }

    let output = func(&args)?;
    log::trace!(target: "reselect", "memo miss, storing new entry");
    memo.insert(args, Ok(output.clone()));

    #[cfg(feature = "testing")]
    crate::testing::register(false);

    Ok(output)
}

/// A function wrapped with a single-slot cache.
///
/// Created with [`memoize`]. Calling it with arguments that are
/// [shallowly equal](Shallow) to the previous call's returns the previous
/// result without running the function again.
///
/// ```
/// use reselect::memoize;
///
/// let sum = memoize(|a: u32, b: u32| a + b);
/// assert_eq!(sum.call((2, 3)), 5); // [Miss] Nothing cached yet.
/// assert_eq!(sum.call((2, 3)), 5); // [Hit] Same numbers.
/// assert_eq!(sum.call((3, 2)), 5); // [Miss] Different numbers.
/// ```
pub struct Memoized<F, Args>
where
    F: Func<Args>,
{
    func: F,
    memo: Memo<Args, F::Output>,
}

/// Wrap a function with a single-slot cache.
pub fn memoize<F, Args>(func: F) -> Memoized<F, Args>
where
    F: Func<Args>,
{
    Memoized::new(func)
}

impl<F, Args> Memoized<F, Args>
where
    F: Func<Args>,
{
    /// Wrap a function with a single-slot cache.
    pub const fn new(func: F) -> Self {
        Self { func, memo: Memo::new() }
    }

    /// Call the function or return the cached result of the previous call.
    pub fn call(&self, args: Args) -> F::Output
    where
        Args: Shallow + Clone,
        F::Output: Clone,
    {
        memoized(&self.memo, args, |args| self.func.call(args.clone()))
    }

    /// Forget the cached result.
    pub fn clear(&self) {
        self.memo.clear();
    }
}

impl<F, Args, T, E> Memoized<F, Args>
where
    F: Func<Args, Output = Result<T, E>>,
{
    /// Call a fallible function, caching only successful results.
    ///
    /// An `Err` is returned as is and leaves the previously cached result in
    /// place. An `Err` cached by [`call`](Self::call) is not reused.
    pub fn try_call(&self, args: Args) -> Result<T, E>
    where
        Args: Shallow + Clone,
        T: Clone,
        E: Clone,
    {
        try_memoized(&self.memo, args, |args| self.func.call(args.clone()))
    }
}

/// A memoized function is still a function.
impl<F, Args> Func<Args> for Memoized<F, Args>
where
    F: Func<Args>,
    Args: Shallow + Clone,
    F::Output: Clone,
{
    type Output = F::Output;

    fn call(&self, args: Args) -> Self::Output {
        Memoized::call(self, args)
    }
}

impl<F, Args> Debug for Memoized<F, Args>
where
    F: Func<Args>,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("cached", &!self.memo.is_empty())
            .finish_non_exhaustive()
    }
}
