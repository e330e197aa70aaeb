use std::collections::BTreeSet;

use strata_api::term::Term;
use strata_api::triple::Triple;
use strata_inmem::index::{Index, TermIndex};

use crate::rules::VOCABULARY;

/// A set of (possibly generalized) triples under saturation.
///
/// Triples are stored as keys of term indices, sorted SPO and POS.
/// The terms of [`VOCABULARY`] always have the index of their position in it,
/// so that rules can refer to them as constants.
///
/// Saturation may derive generalized triples (e.g. with a literal subject);
/// they are kept, as they may contribute to other derivations,
/// but [`triple`](Saturation::triple) refuses to convert them.
#[derive(Clone, Debug)]
pub(crate) struct Saturation {
    terms: TermIndex,
    pub(crate) spo: BTreeSet<[Index; 3]>,
    pub(crate) pos: BTreeSet<[Index; 3]>,
}

impl Saturation {
    pub fn new() -> Self {
        let mut terms = TermIndex::new();
        for (i, iri) in VOCABULARY.iter().enumerate() {
            let res = terms.ensure_index(&Term::iri_unchecked(iri));
            debug_assert_eq!(res, i);
        }
        Saturation {
            terms,
            spo: BTreeSet::new(),
            pos: BTreeSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.spo.len()
    }

    pub fn term(&self, i: Index) -> &Term {
        self.terms.get_term(i)
    }

    /// Iterate over all the indexed terms.
    pub fn terms(&self) -> impl Iterator<Item = (Index, &Term)> + '_ {
        (0..self.terms.len()).map(|i| (i, self.terms.get_term(i)))
    }

    pub fn insert(&mut self, [s, p, o]: [Index; 3]) -> bool {
        if self.spo.insert([s, p, o]) {
            self.pos.insert([p, o, s]);
            true
        } else {
            false
        }
    }

    /// Insert `triple`, returning its key.
    pub fn insert_triple(&mut self, triple: &Triple) -> [Index; 3] {
        let key = triple.spo().each_ref().map(|t| self.terms.ensure_index(t));
        self.insert(key);
        key
    }

    /// Insert all the keys in `buf`, leaving it empty.
    ///
    /// Return `true` if at least one key was new.
    pub fn insert_all(&mut self, buf: &mut Vec<[Index; 3]>) -> bool {
        let mut changed = false;
        for key in buf.drain(..) {
            changed |= self.insert(key);
        }
        changed
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        let [s, p, o] = triple.spo();
        let (Some(s), Some(p), Some(o)) = (
            self.terms.get_index(s),
            self.terms.get_index(p),
            self.terms.get_index(o),
        ) else {
            return false;
        };
        self.spo.contains(&[s, p, o])
    }

    /// Convert `key` into a triple, unless it is a generalized triple.
    pub fn triple(&self, key: [Index; 3]) -> Option<Triple> {
        Triple::try_from_terms(key.map(|i| self.terms.get_term(i).clone()))
    }
}
