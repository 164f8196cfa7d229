//! Hit and miss bookkeeping for tests.
//!
//! Every lookup in a memoized function or selector records its outcome in a
//! per-thread flag. For selectors the outer layer is recorded last, so a call
//! whose arguments changed identity reads as a miss even when the combiner
//! did not rerun.

use std::cell::Cell;

thread_local! {
    static OUTCOME: Cell<bool> = const { Cell::new(false) };
}

/// Whether the most recent memoized call on this thread was served from
/// cache.
pub fn last_was_hit() -> bool {
    OUTCOME.get()
}

/// Record the outcome of a lookup.
pub(crate) fn register(hit: bool) {
    OUTCOME.set(hit);
}
