use std::rc::Rc;

use strata_api::pattern::Pattern;
use strata_api::triple::Triple;

use super::StoreInner;
use crate::index::Cursor;

// Counts as an iteration in progress over the store while alive.
struct IterationGuard {
    inner: Rc<StoreInner>,
}

impl IterationGuard {
    fn new(inner: Rc<StoreInner>) -> Self {
        inner.iterators.set(inner.iterators.get() + 1);
        IterationGuard { inner }
    }
}

impl Drop for IterationGuard {
    fn drop(&mut self) {
        self.inner.iterators.set(self.inner.iterators.get() - 1);
    }
}

/// A lazy iterator over the triples of a [`TripleStore`](super::TripleStore) matching a pattern.
///
/// While this iterator is alive and not exhausted
/// (or merely alive, once [pinned](StoreTriples::pinned)),
/// the store refuses mutations with [`StoreError::ConcurrentMutation`](super::StoreError::ConcurrentMutation).
pub struct StoreTriples {
    inner: Rc<StoreInner>,
    cursor: Cursor,
    guard: Option<IterationGuard>,
    pinned: bool,
}

impl StoreTriples {
    pub(super) fn new(inner: Rc<StoreInner>, pattern: &Pattern) -> Self {
        let cursor = Cursor::new(&inner.index.borrow(), pattern);
        let guard = Some(IterationGuard::new(Rc::clone(&inner)));
        StoreTriples {
            inner,
            cursor,
            guard,
            pinned: false,
        }
    }

    /// Keep refusing mutations of the store once exhausted, until dropped.
    ///
    /// This is what iterators that read the store and then something derived from it need,
    /// so that the store can not change between the two phases.
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }
}

impl Iterator for StoreTriples {
    type Item = Triple;

    fn next(&mut self) -> Option<Triple> {
        self.guard.as_ref()?;
        let next = self.cursor.advance(&self.inner.index.borrow());
        if next.is_none() && !self.pinned {
            self.guard = None;
        }
        next
    }
}

impl std::fmt::Debug for StoreTriples {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreTriples")
            .field("cursor", &self.cursor)
            .field("active", &self.guard.is_some())
            .field("pinned", &self.pinned)
            .finish()
    }
}
