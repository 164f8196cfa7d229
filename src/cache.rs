use parking_lot::Mutex;

use crate::shallow::Shallow;

/// A single-slot cache.
///
/// Remembers the arguments and result of exactly one computation, the most
/// recent one. A lookup hits only if the given arguments are
/// [shallowly equal](Shallow) to the remembered ones; storing a new entry
/// discards the previous one.
///
/// The lock is only held while reading or replacing the entry, never while a
/// result is being computed, so a computation may freely call into other
/// caches, including this one.
pub struct Memo<Args, Out>(Mutex<Option<Entry<Args, Out>>>);

/// The remembered call.
struct Entry<Args, Out> {
    /// The arguments of the last successful computation.
    args: Args,
    /// Its result.
    output: Out,
}

impl<Args, Out> Memo<Args, Out> {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self(Mutex::new(None))
    }

    /// Look for a cached result for the given arguments.
    pub fn lookup(&self, args: &Args) -> Option<Out>
    where
        Args: Shallow,
        Out: Clone,
    {
        self.0
            .lock()
            .as_ref()
            .filter(|entry| entry.args.shallow_eq(args))
            .map(|entry| entry.output.clone())
    }

    /// Replace the cached entry.
    pub fn insert(&self, args: Args, output: Out) {
        *self.0.lock() = Some(Entry { args, output });
    }

    /// Forget the cached entry.
    pub fn clear(&self) {
        self.0.lock().take();
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.0.lock().is_none()
    }
}

impl<Args, Out> Default for Memo<Args, Out> {
    fn default() -> Self {
        Self::new()
    }
}
