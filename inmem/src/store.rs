//! I define [`TripleStore`], the base mutable layer.
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use strata_api::graph::{CollectibleGraph, GResult, GTriples, Graph, MgResult, MutableGraph};
use strata_api::listener::ListenerRegistry;
use strata_api::pattern::{InvalidPattern, Pattern};
use strata_api::triple::Triple;
use thiserror::Error;

use crate::index::TripleIndex;

mod _iter;
pub use _iter::StoreTriples;

/// An in-memory, indexed set of triples.
///
/// A `TripleStore` is a *handle*:
/// cloning it yields another handle to the same store,
/// sharing its triples, its [generation](TripleStore::generation) and its listeners.
/// This is how several views share one base store.
///
/// Handles are neither `Send` nor `Sync`.
/// Sharing a store across threads requires an exclusion mechanism chosen by the caller,
/// which must own the store on a single thread:
///
/// ```compile_fail
/// # use strata_inmem::TripleStore;
/// let store = TripleStore::new();
/// std::thread::spawn(move || store.len());
/// ```
///
/// Iterators over the store are lazy:
/// they reflect the current state of the store at each step.
/// While one of them is alive and not exhausted,
/// any mutation fails with [`StoreError::ConcurrentMutation`].
///
/// Terms are interned when first inserted,
/// and only released by [`clear`](TripleStore::clear).
/// A long-lived store inserting and removing many distinct terms
/// therefore keeps growing; clear it, or build a new one, to reclaim that memory.
#[derive(Clone, Default)]
pub struct TripleStore {
    inner: Rc<StoreInner>,
}

#[derive(Default)]
pub(crate) struct StoreInner {
    pub(crate) index: RefCell<TripleIndex>,
    pub(crate) iterators: Cell<usize>,
    generation: Cell<u64>,
    listeners: ListenerRegistry,
}

impl TripleStore {
    /// Build an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of triples in this store.
    pub fn len(&self) -> usize {
        self.inner.index.borrow().len()
    }

    /// Whether this store contains no triple.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A counter incremented by every mutation that changes this store,
    /// whichever handle received it.
    ///
    /// Views compare it with the generation they last saw
    /// to detect that the store changed behind their back.
    pub fn generation(&self) -> u64 {
        self.inner.generation.get()
    }

    /// Whether `self` and `other` are handles to the same store.
    pub fn same_store(&self, other: &TripleStore) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The number of live, non-exhausted iterators over this store.
    pub fn active_iterators(&self) -> usize {
        self.inner.iterators.get()
    }

    /// Iterate over all the triples of this store.
    pub fn iter(&self) -> StoreTriples {
        StoreTriples::new(Rc::clone(&self.inner), &Pattern::any())
    }

    /// Iterate over the triples of this store matching `pattern`.
    pub fn matching(&self, pattern: &Pattern) -> Result<StoreTriples, StoreError> {
        pattern.check()?;
        Ok(StoreTriples::new(Rc::clone(&self.inner), pattern))
    }

    /// Exact membership test.
    ///
    /// Unlike [`Graph::contains`], this never fails.
    pub fn has(&self, triple: &Triple) -> bool {
        self.inner.index.borrow().contains(triple)
    }

    /// Copy the triples of this store into an ordered set.
    pub fn snapshot(&self) -> BTreeSet<Triple> {
        self.inner.index.borrow().iter().collect()
    }

    /// Remove every triple from this store.
    ///
    /// The listeners receive a single batch with all the removed triples.
    /// Return the number of removed triples.
    pub fn clear(&self) -> Result<usize, StoreError> {
        self.check_no_iterator()?;
        let removed: Vec<Triple> = {
            let mut index = self.inner.index.borrow_mut();
            let removed = index.iter().collect();
            index.clear();
            removed
        };
        if !removed.is_empty() {
            self.bump_generation();
        }
        log::trace!("cleared {} triple(s)", removed.len());
        self.inner.listeners.fire_removed(&removed);
        Ok(removed.len())
    }

    fn check_no_iterator(&self) -> Result<(), StoreError> {
        match self.inner.iterators.get() {
            0 => Ok(()),
            n => Err(StoreError::ConcurrentMutation(n)),
        }
    }

    fn bump_generation(&self) {
        self.inner.generation.set(self.inner.generation.get() + 1);
    }

    // apply `op` to each triple, and return those for which it returned true
    fn mutate<I, F>(&self, triples: I, mut op: F) -> Result<Vec<Triple>, StoreError>
    where
        I: IntoIterator<Item = Triple>,
        F: FnMut(&mut TripleIndex, &Triple) -> bool,
    {
        self.check_no_iterator()?;
        let changed: Vec<Triple> = {
            let mut index = self.inner.index.borrow_mut();
            triples
                .into_iter()
                .filter(|t| op(&mut *index, t))
                .collect()
        };
        if !changed.is_empty() {
            self.bump_generation();
        }
        Ok(changed)
    }
}

impl Graph for TripleStore {
    type Error = StoreError;

    fn triples_matching(&self, pattern: &Pattern) -> GResult<Self, GTriples<'_>> {
        Ok(Box::new(self.matching(pattern)?))
    }

    fn contains(&self, triple: &Triple) -> GResult<Self, bool> {
        Ok(self.has(triple))
    }

    fn to_triple_set(&self) -> GResult<Self, BTreeSet<Triple>> {
        Ok(self.snapshot())
    }
}

impl MutableGraph for TripleStore {
    fn insert(&self, triple: &Triple) -> MgResult<Self, bool> {
        Ok(self.insert_all([triple.clone()])? > 0)
    }

    fn remove(&self, triple: &Triple) -> MgResult<Self, bool> {
        Ok(self.remove_all([triple.clone()])? > 0)
    }

    fn insert_all<I>(&self, triples: I) -> MgResult<Self, usize>
    where
        I: IntoIterator<Item = Triple>,
    {
        let added = self.mutate(triples, |index, t| index.insert(t))?;
        self.inner.listeners.fire_added(&added);
        Ok(added.len())
    }

    fn remove_all<I>(&self, triples: I) -> MgResult<Self, usize>
    where
        I: IntoIterator<Item = Triple>,
    {
        let removed = self.mutate(triples, |index, t| index.remove(t))?;
        self.inner.listeners.fire_removed(&removed);
        Ok(removed.len())
    }

    fn listeners(&self) -> &ListenerRegistry {
        &self.inner.listeners
    }
}

impl CollectibleGraph for TripleStore {
    fn from_triples<I>(triples: I) -> GResult<Self, Self>
    where
        I: IntoIterator<Item = Triple>,
    {
        Ok(triples.into_iter().collect())
    }
}

impl FromIterator<Triple> for TripleStore {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let store = TripleStore::new();
        store.inner.index.borrow_mut().extend(iter);
        store
    }
}

impl fmt::Debug for TripleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripleStore")
            .field("len", &self.len())
            .field("generation", &self.generation())
            .field("iterators", &self.active_iterators())
            .field("listeners", &self.inner.listeners)
            .finish()
    }
}

/// The errors raised by [`TripleStore`] and the views built on it.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StoreError {
    /// A query pattern can not match any valid triple.
    #[error(transparent)]
    InvalidPattern(#[from] InvalidPattern),
    /// A mutation was attempted while iterators over the store were alive.
    #[error("can not mutate the store while {0} iteration(s) over it are in progress")]
    ConcurrentMutation(usize),
}
