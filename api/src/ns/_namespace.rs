use std::fmt;
use std::sync::Arc;

use crate::term::{check_iri, Term, TermError};

/// A custom namespace.
///
/// The [`get`](Namespace::get) method can be used to create a new IRI by concatenating a suffix to this namespace's IRI.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Namespace(Arc<str>);

impl Namespace {
    /// Build a custom namespace based on the given IRI.
    ///
    /// `iri` must be a valid absolute IRI.
    pub fn new<T: AsRef<str>>(iri: T) -> Result<Self, TermError> {
        let iri = iri.as_ref();
        check_iri(iri)?;
        Ok(Namespace(iri.into()))
    }

    /// Build an IRI term by appending `suffix` to this namespace.
    ///
    /// Return an error if the concatenation produces an invalid IRI.
    pub fn get<T: AsRef<str>>(&self, suffix: T) -> Result<Term, TermError> {
        Term::iri(format!("{}{}", self.0, suffix.as_ref()))
    }

    /// The IRI of this namespace.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
