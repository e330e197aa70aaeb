//! Indexes backing the in-memory stores.
//!
//! A [`TermIndex`] is a bidirectional association of [terms](Term) with short numeric indices.
//! A [`TripleIndex`] stores triples as arrays of such indices,
//! in three orders (SPO, POS, OSP) so that any [`Pattern`] is answered by a range scan.
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::ops::Bound;

use strata_api::pattern::Pattern;
use strata_api::term::Term;
use strata_api::triple::Triple;

/// The numeric index of a term in a [`TermIndex`].
pub type Index = usize;

/// A bidirectional association of [terms](Term) with [indices](Index).
///
/// Terms are never forgotten, even when no triple uses them anymore,
/// until the index is cleared.
#[derive(Clone, Debug, Default)]
pub struct TermIndex {
    t2i: HashMap<Term, Index>,
    i2t: Vec<Term>,
}

impl TermIndex {
    /// Build an empty term index.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of indexed terms.
    pub fn len(&self) -> usize {
        self.i2t.len()
    }

    /// Whether no term is indexed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the index corresponding to term `t`, if it exists.
    pub fn get_index(&self, t: &Term) -> Option<Index> {
        self.t2i.get(t).copied()
    }

    /// Get the index corresponding to term `t`, adding it if necessary.
    pub fn ensure_index(&mut self, t: &Term) -> Index {
        match self.t2i.entry(t.clone()) {
            Entry::Vacant(e) => {
                let i = self.i2t.len();
                self.i2t.push(t.clone());
                e.insert(i);
                i
            }
            Entry::Occupied(e) => *e.get(),
        }
    }

    /// Get the term corresponding to index `i`.
    ///
    /// # Precondition
    /// `i` must have been returned previously by [`get_index`](TermIndex::get_index)
    /// or [`ensure_index`](TermIndex::ensure_index), otherwise this method may panic.
    pub fn get_term(&self, i: Index) -> &Term {
        &self.i2t[i]
    }

    /// Forget all terms.
    pub fn clear(&mut self) {
        self.t2i.clear();
        self.i2t.clear();
    }
}

/// The order in which the positions of a triple are stored in a key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Order {
    /// subject, predicate, object
    Spo,
    /// predicate, object, subject
    Pos,
    /// object, subject, predicate
    Osp,
}

impl Order {
    fn key(self, [s, p, o]: [Index; 3]) -> [Index; 3] {
        match self {
            Order::Spo => [s, p, o],
            Order::Pos => [p, o, s],
            Order::Osp => [o, s, p],
        }
    }

    fn spo(self, key: [Index; 3]) -> [Index; 3] {
        match self {
            Order::Spo => key,
            Order::Pos => [key[2], key[0], key[1]],
            Order::Osp => [key[1], key[2], key[0]],
        }
    }
}

/// A range of keys in one of the orders of a [`TripleIndex`],
/// produced by [`TripleIndex::scan`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Scan {
    order: Order,
    lo: [Index; 3],
    hi: [Index; 3],
}

impl Scan {
    fn new(order: Order, prefix: &[Index]) -> Self {
        let mut lo = [Index::MIN; 3];
        let mut hi = [Index::MAX; 3];
        lo[..prefix.len()].copy_from_slice(prefix);
        hi[..prefix.len()].copy_from_slice(prefix);
        Scan { order, lo, hi }
    }

    /// The order in which this scan visits the triples.
    pub fn order(&self) -> Order {
        self.order
    }
}

/// A set of triples, indexed in three orders.
#[derive(Clone, Debug, Default)]
pub struct TripleIndex {
    terms: TermIndex,
    spo: BTreeSet<[Index; 3]>,
    pos: BTreeSet<[Index; 3]>,
    osp: BTreeSet<[Index; 3]>,
}

impl TripleIndex {
    /// Build an empty triple index.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of triples in this index.
    pub fn len(&self) -> usize {
        self.spo.len()
    }

    /// Whether this index contains no triple.
    pub fn is_empty(&self) -> bool {
        self.spo.is_empty()
    }

    /// The number of interned terms, including those no triple uses anymore.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Insert `triple`, returning `true` iff it was not already present.
    pub fn insert(&mut self, triple: &Triple) -> bool {
        let spo = triple.spo().each_ref().map(|t| self.terms.ensure_index(t));
        if !self.spo.insert(spo) {
            return false;
        }
        self.pos.insert(Order::Pos.key(spo));
        self.osp.insert(Order::Osp.key(spo));
        true
    }

    /// Remove `triple`, returning `true` iff it was present.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        let Some(spo) = self.indices(triple) else {
            return false;
        };
        if !self.spo.remove(&spo) {
            return false;
        }
        self.pos.remove(&Order::Pos.key(spo));
        self.osp.remove(&Order::Osp.key(spo));
        true
    }

    /// Whether `triple` is in this index.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.indices(triple)
            .map(|spo| self.spo.contains(&spo))
            .unwrap_or(false)
    }

    /// Remove all triples and terms.
    pub fn clear(&mut self) {
        self.terms.clear();
        self.spo.clear();
        self.pos.clear();
        self.osp.clear();
    }

    /// Compute the range of keys matching `pattern`.
    ///
    /// Return `None` if a term bound in `pattern` is unknown to this index,
    /// in which case nothing can match.
    pub fn scan(&self, pattern: &Pattern) -> Option<Scan> {
        let index_of = |t: Option<&Term>| match t {
            None => Some(None),
            Some(t) => self.terms.get_index(t).map(Some),
        };
        let s = index_of(pattern.s())?;
        let p = index_of(pattern.p())?;
        let o = index_of(pattern.o())?;
        Some(match (s, p, o) {
            (Some(s), Some(p), Some(o)) => Scan::new(Order::Spo, &[s, p, o]),
            (Some(s), Some(p), None) => Scan::new(Order::Spo, &[s, p]),
            (Some(s), None, Some(o)) => Scan::new(Order::Osp, &[o, s]),
            (Some(s), None, None) => Scan::new(Order::Spo, &[s]),
            (None, Some(p), Some(o)) => Scan::new(Order::Pos, &[p, o]),
            (None, Some(p), None) => Scan::new(Order::Pos, &[p]),
            (None, None, Some(o)) => Scan::new(Order::Osp, &[o]),
            (None, None, None) => Scan::new(Order::Spo, &[]),
        })
    }

    /// The first key of `scan` strictly after `after` (or the first key of `scan` if `after` is `None`).
    ///
    /// Keys are stable across mutations of the index,
    /// so a scan can be resumed from a previously returned key.
    pub fn next_key(&self, scan: &Scan, after: Option<[Index; 3]>) -> Option<[Index; 3]> {
        let lower = match after {
            None => Bound::Included(scan.lo),
            Some(key) => Bound::Excluded(key),
        };
        let upper = Bound::Included(scan.hi);
        if let Bound::Excluded(key) = lower {
            if key >= scan.hi {
                return None;
            }
        }
        self.keys(scan.order).range((lower, upper)).next().copied()
    }

    /// Rebuild the triple corresponding to `key` in the given `order`.
    pub fn triple(&self, order: Order, key: [Index; 3]) -> Triple {
        let terms = order.spo(key).map(|i| self.terms.get_term(i).clone());
        // terms stored in the index come from valid triples
        Triple::try_from_terms(terms).unwrap_or_else(|| unreachable!())
    }

    /// Iterate over all triples of this index, in SPO order.
    pub fn iter(&self) -> impl Iterator<Item = Triple> + '_ {
        self.spo.iter().map(|key| self.triple(Order::Spo, *key))
    }

    fn indices(&self, triple: &Triple) -> Option<[Index; 3]> {
        let [s, p, o] = triple.spo();
        Some([
            self.terms.get_index(s)?,
            self.terms.get_index(p)?,
            self.terms.get_index(o)?,
        ])
    }

    fn keys(&self, order: Order) -> &BTreeSet<[Index; 3]> {
        match order {
            Order::Spo => &self.spo,
            Order::Pos => &self.pos,
            Order::Osp => &self.osp,
        }
    }
}

impl Extend<Triple> for TripleIndex {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for t in iter {
            self.insert(&t);
        }
    }
}

/// A resumable position in a [`TripleIndex`] scan.
///
/// The cursor does not borrow the index,
/// so the index can be borrowed anew for each step.
#[derive(Clone, Debug)]
pub struct Cursor {
    scan: Option<Scan>,
    last: Option<[Index; 3]>,
}

impl Cursor {
    /// A cursor at the start of the triples of `index` matching `pattern`.
    pub fn new(index: &TripleIndex, pattern: &Pattern) -> Self {
        Cursor {
            scan: index.scan(pattern),
            last: None,
        }
    }

    /// Advance this cursor, returning the next triple of `index`, if any.
    ///
    /// Once `None` has been returned, the cursor is exhausted.
    pub fn advance(&mut self, index: &TripleIndex) -> Option<Triple> {
        let scan = self.scan.as_ref()?;
        match index.next_key(scan, self.last) {
            Some(key) => {
                self.last = Some(key);
                Some(index.triple(scan.order, key))
            }
            None => {
                self.scan = None;
                None
            }
        }
    }

    /// Whether this cursor is exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.scan.is_none()
    }
}
