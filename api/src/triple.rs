//! I define [`Triple`], the atomic statement of RDF.
use std::fmt;

use crate::term::{Term, TermError};

/// The position of a term in a [`Triple`] or a [`Pattern`](crate::pattern::Pattern).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Position {
    /// The subject
    Subject,
    /// The predicate
    Predicate,
    /// The object
    Object,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::Subject => "subject",
            Position::Predicate => "predicate",
            Position::Object => "object",
        })
    }
}

/// An RDF triple (or *statement*).
///
/// A triple can only be built by [`Triple::new`],
/// which guarantees that the subject and the predicate are resources
/// (IRIs or blank nodes).
/// Equality is structural, and triples are ordered by subject, predicate, then object.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Triple([Term; 3]);

impl Triple {
    /// Build a triple,
    /// returning an error if `s` or `p` is a literal.
    pub fn new(s: Term, p: Term, o: Term) -> Result<Self, TermError> {
        check_position(&s, Position::Subject)?;
        check_position(&p, Position::Predicate)?;
        Ok(Triple([s, p, o]))
    }

    /// Build a triple from an array of terms,
    /// if it is valid.
    pub fn try_from_terms([s, p, o]: [Term; 3]) -> Option<Self> {
        Triple::new(s, p, o).ok()
    }

    /// The subject of this triple.
    pub fn s(&self) -> &Term {
        &self.0[0]
    }

    /// The predicate of this triple.
    pub fn p(&self) -> &Term {
        &self.0[1]
    }

    /// The object of this triple.
    pub fn o(&self) -> &Term {
        &self.0[2]
    }

    /// The three components of this triple.
    pub fn spo(&self) -> &[Term; 3] {
        &self.0
    }

    /// Consume this triple into its three components.
    pub fn into_spo(self) -> [Term; 3] {
        self.0
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.0[0], self.0[1], self.0[2])
    }
}

pub(crate) fn check_position(term: &Term, position: Position) -> Result<(), TermError> {
    match position {
        Position::Subject | Position::Predicate if term.is_literal() => {
            Err(TermError::InvalidTriple {
                term: term.clone(),
                position,
            })
        }
        _ => Ok(()),
    }
}
