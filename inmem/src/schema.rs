//! I define [`SchemaView`], the store holding vocabulary definitions.
//!
//! A schema is typically assembled from several sources
//! (the application vocabulary, imported ontologies...),
//! each kept in its own [`TripleStore`].
//! The schema view reads their union, without copying them.
use std::cell::{Ref, RefCell};
use std::collections::BTreeSet;

use strata_api::graph::{CollectibleGraph, GResult, GTriples, Graph, MgResult, MutableGraph};
use strata_api::listener::ListenerRegistry;
use strata_api::ns::Namespace;
use strata_api::pattern::Pattern;
use strata_api::prefix::PrefixMap;
use strata_api::term::TermError;
use strata_api::triple::Triple;

use crate::store::{StoreError, StoreTriples, TripleStore};

/// A store of schema statements, composed of its own storage and any number of sub-stores.
///
/// Reads see the union of the own storage and the sub-stores, without duplicates.
/// Writes only touch the own storage, and only notify the listeners of the schema view:
/// * inserting a triple already present in a sub-store still reports a change
///   (the own storage changed, the union did not);
/// * removing a triple present only in a sub-store reports no change,
///   and the triple remains visible.
#[derive(Debug, Default)]
pub struct SchemaView {
    own: TripleStore,
    subs: RefCell<Vec<TripleStore>>,
    prefixes: RefCell<PrefixMap>,
}

impl SchemaView {
    /// Build an empty schema view.
    pub fn new() -> Self {
        Self::default()
    }

    /// The own storage of this schema view.
    ///
    /// Its listeners are the listeners of the schema view.
    pub fn own_store(&self) -> &TripleStore {
        &self.own
    }

    /// Add `store` to the union read by this schema view.
    ///
    /// Return `false` if it was already a sub-store (or the own storage) of this view.
    pub fn add_sub_store(&self, store: TripleStore) -> bool {
        if self.is_member(&store) {
            return false;
        }
        log::debug!("adding a sub-store of {} triple(s) to schema", store.len());
        self.subs.borrow_mut().push(store);
        true
    }

    /// Remove `store` from the union read by this schema view.
    ///
    /// Return `false` if it was not a sub-store of this view.
    pub fn remove_sub_store(&self, store: &TripleStore) -> bool {
        let mut subs = self.subs.borrow_mut();
        let before = subs.len();
        subs.retain(|s| !s.same_store(store));
        subs.len() != before
    }

    /// The sub-stores of this view, in the order they were added.
    pub fn sub_stores(&self) -> Vec<TripleStore> {
        self.subs.borrow().clone()
    }

    /// The union of the own storage and the sub-stores.
    ///
    /// This is the snapshot from which rule sets are compiled.
    pub fn as_triple_set(&self) -> BTreeSet<Triple> {
        let mut set = self.own.snapshot();
        for sub in self.subs.borrow().iter() {
            set.extend(sub.snapshot());
        }
        set
    }

    /// The prefix map of this schema.
    pub fn prefixes(&self) -> Ref<'_, PrefixMap> {
        self.prefixes.borrow()
    }

    /// Associate `prefix` to `ns` in the prefix map of this schema.
    pub fn set_prefix(&self, prefix: &str, ns: Namespace) -> Result<Option<Namespace>, TermError> {
        self.prefixes.borrow_mut().set(prefix, ns)
    }

    /// The namespace associated to `prefix`, if any.
    pub fn namespace(&self, prefix: &str) -> Option<Namespace> {
        self.prefixes.borrow().get(prefix).cloned()
    }

    fn is_member(&self, store: &TripleStore) -> bool {
        self.own.same_store(store) || self.subs.borrow().iter().any(|s| s.same_store(store))
    }

    fn stores(&self) -> Vec<TripleStore> {
        let mut stores = vec![self.own.clone()];
        stores.extend(self.subs.borrow().iter().cloned());
        stores
    }
}

impl Graph for SchemaView {
    type Error = StoreError;

    fn triples_matching(&self, pattern: &Pattern) -> GResult<Self, GTriples<'_>> {
        let stores = self.stores();
        let iters = stores
            .iter()
            .map(|s| s.matching(pattern).map(StoreTriples::pinned))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Box::new(UnionTriples {
            stores,
            iters,
            current: 0,
        }))
    }

    fn contains(&self, triple: &Triple) -> GResult<Self, bool> {
        Ok(self.stores().iter().any(|s| s.has(triple)))
    }

    fn to_triple_set(&self) -> GResult<Self, BTreeSet<Triple>> {
        Ok(self.as_triple_set())
    }
}

impl MutableGraph for SchemaView {
    fn insert(&self, triple: &Triple) -> MgResult<Self, bool> {
        self.own.insert(triple)
    }

    fn remove(&self, triple: &Triple) -> MgResult<Self, bool> {
        self.own.remove(triple)
    }

    fn insert_all<I>(&self, triples: I) -> MgResult<Self, usize>
    where
        I: IntoIterator<Item = Triple>,
    {
        self.own.insert_all(triples)
    }

    fn remove_all<I>(&self, triples: I) -> MgResult<Self, usize>
    where
        I: IntoIterator<Item = Triple>,
    {
        self.own.remove_all(triples)
    }

    fn listeners(&self) -> &ListenerRegistry {
        self.own.listeners()
    }
}

impl CollectibleGraph for SchemaView {
    fn from_triples<I>(triples: I) -> GResult<Self, Self>
    where
        I: IntoIterator<Item = Triple>,
    {
        Ok(SchemaView {
            own: triples.into_iter().collect(),
            ..SchemaView::default()
        })
    }
}

/// Chains the iterators of several stores,
/// skipping the triples already yielded by a previous store.
///
/// The iterators are pinned, so no store changes before the union is exhausted.
struct UnionTriples {
    stores: Vec<TripleStore>,
    iters: Vec<StoreTriples>,
    current: usize,
}

impl Iterator for UnionTriples {
    type Item = Triple;

    fn next(&mut self) -> Option<Triple> {
        while self.current < self.iters.len() {
            let i = self.current;
            match self.iters[i].next() {
                Some(t) if self.stores[..i].iter().any(|s| s.has(&t)) => continue,
                Some(t) => return Some(t),
                None => self.current += 1,
            }
        }
        self.iters.clear();
        None
    }
}
