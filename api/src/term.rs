//! I define [`Term`], the building block of [triples](crate::triple::Triple).
//!
//! A term is either an [IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! a [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! or a [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal).
//! Terms are validated when they are built,
//! so any [`Term`] value can safely be inserted in a store.
//!
//! Terms share their underlying strings, so cloning them is cheap.
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::ns::xsd;
use crate::triple::Position;

mod _check;
pub use _check::*;
mod _literal;
pub use _literal::*;

/// The different kinds of [`Term`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TermKind {
    /// An IRI
    Iri,
    /// A blank node
    BlankNode,
    /// A literal
    Literal,
}

/// An RDF term.
///
/// Equality, hashing and ordering are structural.
/// Terms are ordered by kind first (IRIs, then blank nodes, then literals),
/// which makes every ordered collection of terms deterministic.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Term {
    /// An absolute IRI
    Iri(Arc<str>),
    /// A blank node, identified by its label (without the leading `_:`)
    BlankNode(Arc<str>),
    /// A literal
    Literal(Literal),
}

static BNODE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl Term {
    /// Build an IRI term,
    /// returning an error if `iri` is not a valid absolute IRI.
    pub fn iri<T: AsRef<str>>(iri: T) -> Result<Self, TermError> {
        let iri = iri.as_ref();
        check_iri(iri)?;
        Ok(Term::Iri(iri.into()))
    }

    /// Build an IRI term without checking its validity.
    ///
    /// This is meant for vocabulary constants, which are checked by tests.
    /// In debug mode, the validity of `iri` is still asserted.
    pub fn iri_unchecked<T: AsRef<str>>(iri: T) -> Self {
        let iri = iri.as_ref();
        debug_assert!(check_iri(iri).is_ok(), "invalid IRI {iri}");
        Term::Iri(iri.into())
    }

    /// Build a blank node term,
    /// returning an error if `id` does not comply with Turtle's `BLANK_NODE_LABEL`.
    pub fn bnode<T: AsRef<str>>(id: T) -> Result<Self, TermError> {
        let id = id.as_ref();
        if BNODE_ID.is_match(id) {
            Ok(Term::BlankNode(id.into()))
        } else {
            Err(TermError::InvalidBnodeId(id.to_string()))
        }
    }

    /// Build a blank node with a label that no other call to this method has produced.
    pub fn fresh_bnode() -> Self {
        let n = BNODE_COUNTER.fetch_add(1, Ordering::Relaxed);
        Term::BlankNode(format!("sb{n}").into())
    }

    /// Build a plain literal (i.e. with datatype `xsd:string`).
    pub fn literal<T: AsRef<str>>(lex: T) -> Self {
        Term::Literal(Literal::new(lex.as_ref(), LiteralTag::Datatype(xsd::string.into())))
    }

    /// Build a typed literal,
    /// returning an error if `datatype` is not a valid absolute IRI.
    pub fn typed_literal<T, U>(lex: T, datatype: U) -> Result<Self, TermError>
    where
        T: AsRef<str>,
        U: AsRef<str>,
    {
        let datatype = datatype.as_ref();
        check_iri(datatype)?;
        Ok(Term::Literal(Literal::new(
            lex.as_ref(),
            LiteralTag::Datatype(datatype.into()),
        )))
    }

    /// Build a language-tagged literal,
    /// returning an error if `tag` is not a valid language tag.
    ///
    /// The tag is normalized to lower case.
    pub fn lang_literal<T, U>(lex: T, tag: U) -> Result<Self, TermError>
    where
        T: AsRef<str>,
        U: AsRef<str>,
    {
        let tag = tag.as_ref();
        if !LANG_TAG.is_match(tag) {
            return Err(TermError::InvalidLanguageTag(tag.to_string()));
        }
        Ok(Term::Literal(Literal::new(
            lex.as_ref(),
            LiteralTag::Language(tag.to_ascii_lowercase().into()),
        )))
    }

    /// The kind of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Iri(_) => TermKind::Iri,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
        }
    }

    /// Whether this term is an IRI.
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Whether this term is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Whether this term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Whether this term identifies a resource (IRI or blank node),
    /// and can therefore be used as the subject of a triple.
    pub fn is_resource(&self) -> bool {
        !self.is_literal()
    }

    /// The IRI of this term, if it is an IRI.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The literal of this term, if it is a literal.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// The raw value of this term:
    /// the IRI, the blank node label, or the lexical form of the literal.
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(txt) | Term::BlankNode(txt) => txt,
            Term::Literal(lit) => lit.lexical_form(),
        }
    }

    /// Whether this term is the IRI `iri`.
    pub fn is(&self, iri: &str) -> bool {
        self.as_iri() == Some(iri)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(id) => write!(f, "_:{id}"),
            Term::Literal(lit) => lit.fmt(f),
        }
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

/// The error raised when building an invalid [`Term`] or [`Triple`](crate::triple::Triple).
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TermError {
    /// The IRI is not a valid absolute IRI
    #[error("The given IRI '{iri}' is not a valid absolute IRI: {reason}")]
    InvalidIri {
        /// The rejected IRI
        iri: String,
        /// Why it was rejected
        reason: String,
    },
    /// The blank node label is not valid
    #[error("The given blank node identifier '{0}' does not comply with Turtle's BLANK_NODE_LABEL")]
    InvalidBnodeId(String),
    /// The language tag is not valid
    #[error("The given language tag '{0}' is not a valid BCP47 language tag")]
    InvalidLanguageTag(String),
    /// The namespace prefix is not valid
    #[error("The given prefix '{0}' does not comply with Turtle's PN_PREFIX")]
    InvalidPrefix(String),
    /// The term can not be used at this position of a triple
    #[error("{term} can not be used as the {position} of a triple")]
    InvalidTriple {
        /// The offending term
        term: Term,
        /// Where it was used
        position: Position,
    },
}
