//! A lazily-initialized slot for a parsed table.

use core::fmt;

use alloc::boxed::Box;
use once_cell::race::OnceBox;

/// A slot that holds a table parsed on first access.
///
/// Initialization is racy rather than blocking: when several threads hit an
/// empty slot at once, each runs the initializer, a single result is
/// installed with one compare-and-swap and the losers' results are dropped.
/// Readers after that point take the fast path with a single atomic load.
pub struct LazyTable<T> {
    slot: OnceBox<T>,
}

impl<T> LazyTable<T> {
    /// Creates an empty slot.
    pub fn new() -> Self {
        LazyTable { slot: OnceBox::new() }
    }

    /// Returns the stored value, running `init` if the slot is still empty.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.slot.get_or_init(|| Box::new(init()))
    }
}

impl<T> Default for LazyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LazyTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LazyTable {{ ... }}")
    }
}
