//! API for RDF graphs.
//!
//! Three layers of the same data implement these traits:
//! plain triple stores, schema views and inference views.
//! Their handles are shared (several views may wrap the same store),
//! so mutation goes through `&self`.
use std::collections::BTreeSet;
use std::error::Error;
use std::rc::Rc;

use crate::listener::{ChangeListener, ListenerId, ListenerRegistry};
use crate::pattern::Pattern;
use crate::term::Term;
use crate::triple::Triple;


/// Type alias for the triple iterators produced by a graph.
pub type GTriples<'a> = Box<dyn Iterator<Item = Triple> + 'a>;
/// Type alias for results produced by a graph.
pub type GResult<G, T> = Result<T, <G as Graph>::Error>;

/// Generic trait for readable RDF graphs.
///
/// A graph is a set: it never contains the same triple twice.
pub trait Graph {
    /// The error type that this graph may raise.
    type Error: Error + 'static;

    /// An iterator visiting all triples matching `pattern`, in arbitrary order.
    ///
    /// The iterator is lazy; every call produces a fresh iterator reflecting the current state.
    /// Returns an error if `pattern` is invalid (see [`Pattern::check`]).
    fn triples_matching(&self, pattern: &Pattern) -> GResult<Self, GTriples<'_>>;

    /// An iterator visiting all triples of this graph.
    fn triples(&self) -> GResult<Self, GTriples<'_>> {
        self.triples_matching(&Pattern::any())
    }

    /// Return `true` if this graph contains the given triple.
    fn contains(&self, triple: &Triple) -> GResult<Self, bool> {
        Ok(self
            .triples_matching(&Pattern::exact(triple))?
            .next()
            .is_some())
    }

    /// Collect all the triples of this graph into an ordered set.
    fn to_triple_set(&self) -> GResult<Self, BTreeSet<Triple>> {
        Ok(self.triples()?.collect())
    }

    /// All the values of `predicate` for `subject`, in arbitrary order.
    fn objects_of(&self, subject: &Term, predicate: &Term) -> GResult<Self, Vec<Term>> {
        let pattern = Pattern::new(Some(subject.clone()), Some(predicate.clone()), None);
        Ok(self
            .triples_matching(&pattern)?
            .map(|t| {
                let [_, _, o] = t.into_spo();
                o
            })
            .collect())
    }

    /// Any value of `predicate` for `subject`, or `None` if there is none.
    fn object_of(&self, subject: &Term, predicate: &Term) -> GResult<Self, Option<Term>> {
        let pattern = Pattern::new(Some(subject.clone()), Some(predicate.clone()), None);
        Ok(self
            .triples_matching(&pattern)?
            .next()
            .map(|t| {
                let [_, _, o] = t.into_spo();
                o
            }))
    }

    /// All the subjects having `object` as a value of `predicate`, in arbitrary order.
    fn subjects_of(&self, predicate: &Term, object: &Term) -> GResult<Self, Vec<Term>> {
        let pattern = Pattern::new(None, Some(predicate.clone()), Some(object.clone()));
        Ok(self
            .triples_matching(&pattern)?
            .map(|t| {
                let [s, _, _] = t.into_spo();
                s
            })
            .collect())
    }
}

/// Type alias for results produced by a mutable graph.
pub type MgResult<G, T> = Result<T, <G as Graph>::Error>;

/// Generic trait for mutable RDF graphs.
///
/// Every successful mutation is notified, synchronously,
/// to the listeners registered on the handle that received it.
pub trait MutableGraph: Graph {
    /// Insert `triple` in this graph.
    ///
    /// Return `true` iff the graph changed,
    /// in which case the listeners are notified of a one-triple batch.
    fn insert(&self, triple: &Triple) -> MgResult<Self, bool>;

    /// Remove `triple` from this graph.
    ///
    /// Return `true` iff the graph changed,
    /// in which case the listeners are notified of a one-triple batch.
    fn remove(&self, triple: &Triple) -> MgResult<Self, bool>;

    /// Insert all the given triples in this graph.
    ///
    /// Return the number of triples actually inserted.
    /// The listeners receive a single batch with these triples
    /// (and nothing if no triple was inserted).
    fn insert_all<I>(&self, triples: I) -> MgResult<Self, usize>
    where
        I: IntoIterator<Item = Triple>;

    /// Remove all the given triples from this graph.
    ///
    /// Return the number of triples actually removed.
    /// The listeners receive a single batch with these triples
    /// (and nothing if no triple was removed).
    fn remove_all<I>(&self, triples: I) -> MgResult<Self, usize>
    where
        I: IntoIterator<Item = Triple>;

    /// The registry of this handle.
    fn listeners(&self) -> &ListenerRegistry;

    /// Register `listener` on this handle.
    fn register(&self, listener: Rc<dyn ChangeListener>) -> ListenerId {
        self.listeners().register(listener)
    }

    /// Unregister the listener identified by `id`.
    ///
    /// Return `false` if there was no such listener on this handle.
    fn unregister(&self, id: ListenerId) -> bool {
        self.listeners().unregister(id)
    }
}

/// A graph that can be built from a bulk source of triples.
pub trait CollectibleGraph: Graph + Sized {
    /// Build a graph containing the given triples.
    fn from_triples<I>(triples: I) -> GResult<Self, Self>
    where
        I: IntoIterator<Item = Triple>;
}
