//! I define [`InferenceView`], the top layer of a store.
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use strata_api::graph::{GResult, GTriples, Graph, MgResult, MutableGraph};
use strata_api::listener::{ListenerRegistry, StoreEvent};
use strata_api::pattern::Pattern;
use strata_api::triple::Triple;
use strata_inmem::index::{Cursor, TripleIndex};
use strata_inmem::store::StoreTriples;
use strata_inmem::TripleStore;

use crate::ruleset::RuleSet;
use crate::InferenceError;

/// A view exposing the triples of a base [`TripleStore`]
/// together with the triples entailed by a [`RuleSet`].
///
/// # Reads
///
/// Entailed triples are computed lazily, and cached.
/// The cache is tagged with the [generation](TripleStore::generation) of the base store,
/// and recomputed whenever the base store changed,
/// even through another handle.
///
/// # Writes
///
/// Writes go through to the base store, whose listeners are notified there.
/// Then the listeners of the view itself are notified, once per call.
/// Writes reaching the base store through another handle
/// are visible through the view, but never notified to its listeners.
///
/// # Schema changes
///
/// The rule set captured its schema when it was compiled.
/// Neither later changes of the schema nor [`rebind`](InferenceView::rebind)
/// change what the view entails;
/// only [`replace_rule_set`](InferenceView::replace_rule_set) does.
pub struct InferenceView {
    base: TripleStore,
    rule_set: RefCell<Option<RuleSet>>,
    cache: RefCell<Option<Cache>>,
    listeners: ListenerRegistry,
}

struct Cache {
    generation: u64,
    entailed: Rc<TripleIndex>,
}

impl InferenceView {
    /// Build a view of `base` under `rule_set`.
    ///
    /// `base` is shared, not copied.
    pub fn bind(rule_set: RuleSet, base: TripleStore) -> Self {
        InferenceView {
            base,
            rule_set: RefCell::new(Some(rule_set)),
            cache: RefCell::new(None),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Build a view of `base` with no rule set.
    ///
    /// Every operation fails with [`InferenceError::UnboundRuleSet`]
    /// until a rule set is provided with [`replace_rule_set`](InferenceView::replace_rule_set).
    pub fn unbound(base: TripleStore) -> Self {
        InferenceView {
            base,
            rule_set: RefCell::new(None),
            cache: RefCell::new(None),
            listeners: ListenerRegistry::new(),
        }
    }

    /// The base store of this view.
    pub fn base(&self) -> &TripleStore {
        &self.base
    }

    /// The rule set of this view, if any.
    pub fn rule_set(&self) -> Option<RuleSet> {
        self.rule_set.borrow().clone()
    }

    /// Whether a rule set is bound to this view.
    pub fn is_bound(&self) -> bool {
        self.rule_set.borrow().is_some()
    }

    /// Whether the entailed triples will be recomputed by the next query.
    pub fn is_stale(&self) -> bool {
        self.cache
            .borrow()
            .as_ref()
            .map_or(true, |c| c.generation != self.base.generation())
    }

    /// Force the entailed triples to be recomputed from the current content of the base store,
    /// with the *same* rule set.
    ///
    /// This does not make the view aware of schema changes.
    /// The listeners of this view receive [`StoreEvent::Rebound`].
    pub fn rebind(&self) -> Result<(), InferenceError> {
        self.bound_rule_set()?;
        self.invalidate();
        log::debug!("inference view rebound at generation {}", self.base.generation());
        self.listeners.fire_event(&StoreEvent::Rebound);
        Ok(())
    }

    /// Replace the rule set of this view, returning the previous one.
    ///
    /// This is the only way for the view to reflect a schema change
    /// (by compiling a new rule set from the changed schema).
    /// The listeners of this view receive [`StoreEvent::RuleSetReplaced`].
    pub fn replace_rule_set(&self, rule_set: RuleSet) -> Option<RuleSet> {
        let previous = self.rule_set.replace(Some(rule_set));
        self.invalidate();
        log::debug!("inference view rule set replaced");
        self.listeners.fire_event(&StoreEvent::RuleSetReplaced);
        previous
    }

    /// The triples entailed by the rule set and the current content of the base store,
    /// that are not in the base store.
    pub fn entailed(&self) -> Result<BTreeSet<Triple>, InferenceError> {
        Ok(self.entailed_index()?.iter().collect())
    }

    fn bound_rule_set(&self) -> Result<RuleSet, InferenceError> {
        self.rule_set
            .borrow()
            .clone()
            .ok_or(InferenceError::UnboundRuleSet)
    }

    fn invalidate(&self) {
        self.cache.borrow_mut().take();
    }

    fn entailed_index(&self) -> Result<Rc<TripleIndex>, InferenceError> {
        let rule_set = self.bound_rule_set()?;
        let generation = self.base.generation();
        if let Some(cache) = self.cache.borrow().as_ref() {
            if cache.generation == generation {
                return Ok(Rc::clone(&cache.entailed));
            }
        }
        let mut index = TripleIndex::new();
        index.extend(rule_set.apply(&self.base.snapshot()));
        log::debug!(
            "recomputed {} entailed triple(s) at generation {generation}",
            index.len()
        );
        let entailed = Rc::new(index);
        *self.cache.borrow_mut() = Some(Cache {
            generation,
            entailed: Rc::clone(&entailed),
        });
        Ok(entailed)
    }
}

impl Graph for InferenceView {
    type Error = InferenceError;

    /// Iterate over the matching triples of the base store, then over the matching entailed triples.
    ///
    /// The entailed triples are those computed when the iteration started.
    /// Until the iterator is exhausted or dropped,
    /// the base store refuses mutations, including those made through this view.
    fn triples_matching(&self, pattern: &Pattern) -> GResult<Self, GTriples<'_>> {
        let entailed = self.entailed_index()?;
        let base = self.base.matching(pattern)?.pinned();
        let cursor = Cursor::new(&entailed, pattern);
        Ok(Box::new(ViewTriples {
            base: Some(base),
            entailed,
            cursor,
        }))
    }

    fn contains(&self, triple: &Triple) -> GResult<Self, bool> {
        let entailed = self.entailed_index()?;
        Ok(self.base.has(triple) || entailed.contains(triple))
    }

    fn to_triple_set(&self) -> GResult<Self, BTreeSet<Triple>> {
        let mut set = self.entailed()?;
        set.extend(self.base.snapshot());
        Ok(set)
    }
}

impl MutableGraph for InferenceView {
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
        self.bound_rule_set()?;
        let added: Vec<Triple> = triples
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter(|t| !self.base.has(t))
            .collect();
        let n = self.base.insert_all(added.iter().cloned())?;
        debug_assert_eq!(n, added.len());
        if n > 0 {
            self.invalidate();
            self.listeners.fire_added(&added);
        }
        Ok(n)
    }

    fn remove_all<I>(&self, triples: I) -> MgResult<Self, usize>
    where
        I: IntoIterator<Item = Triple>,
    {
        self.bound_rule_set()?;
        let removed: Vec<Triple> = triples
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter(|t| self.base.has(t))
            .collect();
        let n = self.base.remove_all(removed.iter().cloned())?;
        debug_assert_eq!(n, removed.len());
        if n > 0 {
            self.invalidate();
            self.listeners.fire_removed(&removed);
        }
        Ok(n)
    }

    fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }
}

impl fmt::Debug for InferenceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceView")
            .field("base", &self.base)
            .field("rule_set", &*self.rule_set.borrow())
            .field("stale", &self.is_stale())
            .field("listeners", &self.listeners)
            .finish()
    }
}

/// Iterates over the base store, then over a snapshot of entailed triples.
///
/// The base iterator is pinned, and only dropped once both phases are exhausted.
struct ViewTriples {
    base: Option<StoreTriples>,
    entailed: Rc<TripleIndex>,
    cursor: Cursor,
}

impl Iterator for ViewTriples {
    type Item = Triple;

    fn next(&mut self) -> Option<Triple> {
        let base = self.base.as_mut()?;
        if let Some(t) = base.next() {
            return Some(t);
        }
        let next = self.cursor.advance(&self.entailed);
        if next.is_none() {
            self.base = None;
        }
        next
    }
}
