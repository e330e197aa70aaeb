//! I define [`Pattern`], used to query [graphs](crate::graph::Graph).
//!
//! A pattern leaves each position of a triple either bound to a given term,
//! or unbound (`None`), in which case any term matches it.
use std::fmt;

use thiserror::Error;

use crate::term::Term;
use crate::triple::{check_position, Position, Triple};

/// A triple pattern, where each position is either bound or unbound.
///
/// ```
/// # use strata_api::{pattern::Pattern, term::Term, ns::rdf};
/// let all = Pattern::any();
/// let typed = Pattern::any().with_p(Term::iri_unchecked(rdf::type_));
/// assert!(all.is_any());
/// assert!(!typed.is_any());
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Pattern {
    s: Option<Term>,
    p: Option<Term>,
    o: Option<Term>,
}

impl Pattern {
    /// Build a pattern from its three (optional) components.
    ///
    /// The pattern is not checked;
    /// stores check it with [`Pattern::check`] before using it.
    pub fn new(s: Option<Term>, p: Option<Term>, o: Option<Term>) -> Self {
        Pattern { s, p, o }
    }

    /// The pattern matching every triple.
    pub fn any() -> Self {
        Pattern::default()
    }

    /// The pattern matching exactly the given triple.
    pub fn exact(triple: &Triple) -> Self {
        let [s, p, o] = triple.spo().clone();
        Pattern::new(Some(s), Some(p), Some(o))
    }

    /// This pattern with its subject bound to `s`.
    pub fn with_s(mut self, s: Term) -> Self {
        self.s = Some(s);
        self
    }

    /// This pattern with its predicate bound to `p`.
    pub fn with_p(mut self, p: Term) -> Self {
        self.p = Some(p);
        self
    }

    /// This pattern with its object bound to `o`.
    pub fn with_o(mut self, o: Term) -> Self {
        self.o = Some(o);
        self
    }

    /// The subject of this pattern, if bound.
    pub fn s(&self) -> Option<&Term> {
        self.s.as_ref()
    }

    /// The predicate of this pattern, if bound.
    pub fn p(&self) -> Option<&Term> {
        self.p.as_ref()
    }

    /// The object of this pattern, if bound.
    pub fn o(&self) -> Option<&Term> {
        self.o.as_ref()
    }

    /// Whether no position is bound.
    pub fn is_any(&self) -> bool {
        self.s.is_none() && self.p.is_none() && self.o.is_none()
    }

    /// Check that this pattern could match a valid triple,
    /// i.e. that it has no literal in subject or predicate position.
    pub fn check(&self) -> Result<(), InvalidPattern> {
        for (term, position) in [(&self.s, Position::Subject), (&self.p, Position::Predicate)] {
            if let Some(term) = term {
                check_position(term, position).map_err(|_| InvalidPattern {
                    term: term.clone(),
                    position,
                })?;
            }
        }
        Ok(())
    }

    /// Whether `triple` matches this pattern.
    pub fn matches(&self, triple: &Triple) -> bool {
        fn bound_match(bound: &Option<Term>, term: &Term) -> bool {
            bound.as_ref().map_or(true, |b| b == term)
        }
        bound_match(&self.s, triple.s())
            && bound_match(&self.p, triple.p())
            && bound_match(&self.o, triple.o())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bound) in [&self.s, &self.p, &self.o].into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match bound {
                Some(t) => write!(f, "{t}")?,
                None => write!(f, "?{}", ["s", "p", "o"][i])?,
            }
        }
        Ok(())
    }
}

/// The error raised when querying with a pattern that can not match any valid triple.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid pattern: {term} can not be used as the {position} of a triple")]
pub struct InvalidPattern {
    /// The offending term
    pub term: Term,
    /// Where it was used
    pub position: Position,
}
