//! I define [`RuleSet`], an immutable set of entailment rules bound to a schema snapshot.
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use strata_api::triple::Triple;
use strata_inmem::index::Index;

use crate::_saturation::Saturation;
use crate::options::{Level, ReasonerOptions};
use crate::rules::saturate;

/// The product of a [`RuleEngine`](crate::RuleEngine):
/// entailment rules, together with the schema they were compiled from.
///
/// A rule set is immutable, and cheap to clone.
/// It never reads the schema it was compiled from again:
/// the schema is captured (and saturated) at compile time.
#[derive(Clone)]
pub struct RuleSet {
    inner: Arc<Compiled>,
}

struct Compiled {
    options: ReasonerOptions,
    schema_len: usize,
    closure: Saturation,
}

impl RuleSet {
    pub(crate) fn compile(options: ReasonerOptions, schema: &BTreeSet<Triple>) -> Self {
        let mut closure = Saturation::new();
        for t in schema {
            closure.insert_triple(t);
        }
        let rounds = saturate(&mut closure, &options);
        log::debug!(
            "compiled {:?} rule set from {} schema triple(s): {} triple(s) after {} round(s)",
            options.level(),
            schema.len(),
            closure.len(),
            rounds,
        );
        RuleSet {
            inner: Arc::new(Compiled {
                options,
                schema_len: schema.len(),
                closure,
            }),
        }
    }

    /// The entailment regime of this rule set.
    pub fn level(&self) -> Level {
        self.inner.options.level()
    }

    /// The options this rule set was compiled with.
    pub fn options(&self) -> &ReasonerOptions {
        &self.inner.options
    }

    /// The number of schema triples captured by this rule set.
    pub fn schema_len(&self) -> usize {
        self.inner.schema_len
    }

    /// Whether `self` and `other` are clones of the same compiled rule set.
    pub fn ptr_eq(&self, other: &RuleSet) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Compute the triples entailed by the captured schema and `base`.
    ///
    /// The result contains every triple of the closure of (schema ∪ `base`)
    /// that is not in `base`; in particular, it contains the schema triples.
    /// Derived statements that are not valid triples
    /// (e.g. literals typed through `rdfs:range`) are discarded.
    ///
    /// The result only depends on this rule set and on `base`.
    pub fn apply<'a, I>(&self, base: I) -> BTreeSet<Triple>
    where
        I: IntoIterator<Item = &'a Triple>,
    {
        let (closure, asserted) = self.closure(base);
        let mut discarded = 0;
        let entailed: BTreeSet<Triple> = closure
            .spo
            .iter()
            .filter(|key| !asserted.contains(*key))
            .filter_map(|key| {
                let t = closure.triple(*key);
                if t.is_none() {
                    discarded += 1;
                }
                t
            })
            .collect();
        if discarded > 0 {
            log::warn!("discarded {discarded} derived statement(s) that are not valid triples");
        }
        entailed
    }

    /// Whether `triple` is in `base` or entailed by the captured schema and `base`.
    pub fn entails<'a, I>(&self, base: I, triple: &Triple) -> bool
    where
        I: IntoIterator<Item = &'a Triple>,
    {
        let (closure, _) = self.closure(base);
        closure.contains(triple)
    }

    fn closure<'a, I>(&self, base: I) -> (Saturation, BTreeSet<[Index; 3]>)
    where
        I: IntoIterator<Item = &'a Triple>,
    {
        let mut closure = self.inner.closure.clone();
        let asserted: BTreeSet<_> = base.into_iter().map(|t| closure.insert_triple(t)).collect();
        let rounds = saturate(&mut closure, &self.inner.options);
        log::trace!(
            "closure of {} base triple(s): {} triple(s) after {} round(s)",
            asserted.len(),
            closure.len(),
            rounds,
        );
        (closure, asserted)
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("level", &self.level())
            .field("schema_len", &self.schema_len())
            .field("closure_len", &self.inner.closure.len())
            .finish()
    }
}
