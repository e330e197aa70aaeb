// this module is transparently re-exported by its parent `term`
use std::fmt;
use std::sync::Arc;

use crate::ns::{rdf, xsd};

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal).
///
/// See [`Term::literal`](super::Term::literal),
/// [`Term::typed_literal`](super::Term::typed_literal) and
/// [`Term::lang_literal`](super::Term::lang_literal) for building literals.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Literal {
    lex: Arc<str>,
    tag: LiteralTag,
}

/// What qualifies the lexical form of a [`Literal`].
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum LiteralTag {
    /// The IRI of a datatype
    Datatype(Arc<str>),
    /// A language tag, in lower case
    Language(Arc<str>),
}

impl Literal {
    pub(crate) fn new(lex: &str, tag: LiteralTag) -> Self {
        Literal {
            lex: lex.into(),
            tag,
        }
    }

    /// The lexical form of this literal.
    pub fn lexical_form(&self) -> &str {
        &self.lex
    }

    /// The datatype IRI of this literal
    /// (`rdf:langString` for language-tagged strings).
    pub fn datatype(&self) -> &str {
        match &self.tag {
            LiteralTag::Datatype(dt) => dt,
            LiteralTag::Language(_) => rdf::langString,
        }
    }

    /// The language tag of this literal, if any.
    pub fn language_tag(&self) -> Option<&str> {
        match &self.tag {
            LiteralTag::Language(tag) => Some(tag),
            LiteralTag::Datatype(_) => None,
        }
    }

    /// The tag of this literal.
    pub fn tag(&self) -> &LiteralTag {
        &self.tag
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.lex.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                _ => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")?;
        match &self.tag {
            LiteralTag::Language(tag) => write!(f, "@{tag}"),
            LiteralTag::Datatype(dt) if &**dt == xsd::string => Ok(()),
            LiteralTag::Datatype(dt) => write!(f, "^^<{dt}>"),
        }
    }
}
