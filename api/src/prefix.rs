//! I define [`PrefixMap`], associating short prefixes to [namespaces](Namespace).
//!
//! A prefix map is typically attached to a schema,
//! so that applications can look up the namespace behind a well known prefix
//! (e.g. `foaf`) instead of hard-coding its IRI.
use std::collections::BTreeMap;

use crate::ns::Namespace;
use crate::term::{Term, TermError, PN_PREFIX};

/// A prefix map associates prefixes to namespaces.
///
/// ```
/// # use strata_api::{ns::Namespace, prefix::PrefixMap};
/// # fn main() -> Result<(), strata_api::term::TermError> {
/// let mut map = PrefixMap::new();
/// map.set("foaf", Namespace::new("http://xmlns.com/foaf/0.1/")?)?;
/// let name = map.expand("foaf:name")?.unwrap();
/// assert_eq!(map.shrink(&name).unwrap(), "foaf:name");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PrefixMap {
    map: BTreeMap<String, Namespace>,
}

impl PrefixMap {
    /// Build an empty prefix map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `prefix` to `ns`,
    /// returning the namespace previously associated to it, if any.
    ///
    /// Return an error if `prefix` is not a valid prefix.
    pub fn set<T: AsRef<str>>(
        &mut self,
        prefix: T,
        ns: Namespace,
    ) -> Result<Option<Namespace>, TermError> {
        let prefix = prefix.as_ref();
        if !PN_PREFIX.is_match(prefix) {
            return Err(TermError::InvalidPrefix(prefix.to_string()));
        }
        Ok(self.map.insert(prefix.to_string(), ns))
    }

    /// The namespace associated to `prefix`, if any.
    pub fn get(&self, prefix: &str) -> Option<&Namespace> {
        self.map.get(prefix)
    }

    /// Remove the association of `prefix`, returning its namespace if any.
    pub fn remove(&mut self, prefix: &str) -> Option<Namespace> {
        self.map.remove(prefix)
    }

    /// The number of prefixes in this map.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether this map is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over the (prefix, namespace) pairs, ordered by prefix.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Namespace)> + '_ {
        self.map.iter().map(|(p, ns)| (p.as_str(), ns))
    }

    /// Expand a `prefix:suffix` string into an IRI term.
    ///
    /// Return `Ok(None)` if `curie` has no colon, or if its prefix is unknown.
    pub fn expand(&self, curie: &str) -> Result<Option<Term>, TermError> {
        let Some((prefix, suffix)) = curie.split_once(':') else {
            return Ok(None);
        };
        self.get(prefix).map(|ns| ns.get(suffix)).transpose()
    }

    /// Shrink an IRI term into a `prefix:suffix` string,
    /// using the longest matching namespace.
    ///
    /// Return `None` if `term` is not an IRI, or if no namespace matches it.
    pub fn shrink(&self, term: &Term) -> Option<String> {
        let iri = term.as_iri()?;
        self.map
            .iter()
            .filter(|(_, ns)| iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.as_str().len())
            .map(|(p, ns)| format!("{p}:{}", &iri[ns.as_str().len()..]))
    }
}
