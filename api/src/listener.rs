//! Change notification.
//!
//! Every store handle owns a [`ListenerRegistry`].
//! A registry is notified only for the mutations issued through the handle owning it:
//! a mutation reaching the same data through another handle
//! is notified on *that* handle's registry, and only there.
//!
//! Delivery is synchronous:
//! listeners are called before the mutating call returns.
//! A bulk mutation is delivered as a single batch.
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::triple::Triple;

/// Something that wants to be told about the changes of a store.
///
/// Methods take `&self`: listeners needing to record something
/// use interior mutability (see [`ChangeCounter`]).
pub trait ChangeListener {
    /// Called after `triples` have been added.
    ///
    /// `triples` contains only the triples that were actually added (never empty).
    fn added(&self, triples: &[Triple]);

    /// Called after `triples` have been removed.
    ///
    /// `triples` contains only the triples that were actually removed (never empty).
    fn removed(&self, triples: &[Triple]);

    /// Called for signals that are neither additions nor removals.
    fn event(&self, event: &StoreEvent) {
        let _ = event;
    }
}

/// A signal delivered through [`ChangeListener::event`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreEvent {
    /// An inference view was asked to re-synchronize with its base store.
    Rebound,
    /// An inference view had its rule set replaced.
    RuleSetReplaced,
    /// An application-specific signal.
    Custom(String),
}

/// The handle returned when registering a listener, used to unregister it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ListenerId(u64);

/// A set of [`ChangeListener`]s, owned by a store handle.
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: Cell<u64>,
    listeners: RefCell<BTreeMap<ListenerId, Rc<dyn ChangeListener>>>,
}

impl ListenerRegistry {
    /// Build an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `listener` to this registry.
    pub fn register(&self, listener: Rc<dyn ChangeListener>) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().insert(id, listener);
        id
    }

    /// Remove the listener registered as `id`.
    ///
    /// Return `false` if there was no such listener.
    pub fn unregister(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(&id).is_some()
    }

    /// The number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Notify every listener that `triples` were added.
    ///
    /// Nothing is delivered if `triples` is empty.
    pub fn fire_added(&self, triples: &[Triple]) {
        if triples.is_empty() {
            return;
        }
        for listener in self.snapshot() {
            log::trace!("delivering {} added triple(s)", triples.len());
            listener.added(triples);
        }
    }

    /// Notify every listener that `triples` were removed.
    ///
    /// Nothing is delivered if `triples` is empty.
    pub fn fire_removed(&self, triples: &[Triple]) {
        if triples.is_empty() {
            return;
        }
        for listener in self.snapshot() {
            log::trace!("delivering {} removed triple(s)", triples.len());
            listener.removed(triples);
        }
    }

    /// Deliver `event` to every listener.
    pub fn fire_event(&self, event: &StoreEvent) {
        for listener in self.snapshot() {
            log::trace!("delivering event {event:?}");
            listener.event(event);
        }
    }

    // listeners may (un)register listeners while being notified,
    // so the registry must not be borrowed during delivery
    fn snapshot(&self) -> Vec<Rc<dyn ChangeListener>> {
        self.listeners.borrow().values().cloned().collect()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// A [`ChangeListener`] counting what it is told.
///
/// ```
/// # use std::rc::Rc;
/// # use strata_api::listener::{ChangeCounter, ChangeListener, ListenerRegistry};
/// let registry = ListenerRegistry::new();
/// let counter = Rc::new(ChangeCounter::default());
/// registry.register(counter.clone());
/// assert!(!counter.has_changed());
/// ```
#[derive(Debug, Default)]
pub struct ChangeCounter {
    added_batches: Cell<usize>,
    added_triples: Cell<usize>,
    removed_batches: Cell<usize>,
    removed_triples: Cell<usize>,
    events: RefCell<Vec<StoreEvent>>,
}

impl ChangeCounter {
    /// Whether any addition or removal was notified since creation or last [`reset`](Self::reset).
    ///
    /// Events do not count as changes.
    pub fn has_changed(&self) -> bool {
        self.added_batches.get() + self.removed_batches.get() > 0
    }

    /// Forget everything that was notified.
    pub fn reset(&self) {
        self.added_batches.set(0);
        self.added_triples.set(0);
        self.removed_batches.set(0);
        self.removed_triples.set(0);
        self.events.borrow_mut().clear();
    }

    /// The number of addition notifications.
    pub fn added_batches(&self) -> usize {
        self.added_batches.get()
    }

    /// The total number of triples notified as added.
    pub fn added_triples(&self) -> usize {
        self.added_triples.get()
    }

    /// The number of removal notifications.
    pub fn removed_batches(&self) -> usize {
        self.removed_batches.get()
    }

    /// The total number of triples notified as removed.
    pub fn removed_triples(&self) -> usize {
        self.removed_triples.get()
    }

    /// The events notified so far.
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.borrow().clone()
    }
}

impl ChangeListener for ChangeCounter {
    fn added(&self, triples: &[Triple]) {
        self.added_batches.set(self.added_batches.get() + 1);
        self.added_triples.set(self.added_triples.get() + triples.len());
    }

    fn removed(&self, triples: &[Triple]) {
        self.removed_batches.set(self.removed_batches.get() + 1);
        self.removed_triples
            .set(self.removed_triples.get() + triples.len());
    }

    fn event(&self, event: &StoreEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod test;
