// this module is transparently re-exported by its parent `term`
use lazy_static::lazy_static;
use regex::Regex;

use super::TermError;

lazy_static! {
    /// A modified production of Turtle's BLANK_NODE_LABEL according to the
    /// [Turtle spec](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL).
    ///
    /// In contrast to the original rule this regular expression does not look
    /// for a leading `_:`. Accordingly it only checks if the label is valid.
    ///
    /// # Rule
    ///
    /// `BLANK_NODE_LABEL ::= (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    pub static ref BNODE_ID: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
          |
          \u{2e} [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
      )*
      $
    ").unwrap();

    /// A language tag, as a primary subtag followed by any number of subtags.
    ///
    /// NB: this is more permissive than BCP47,
    /// as it does not check that subtags are registered codes.
    pub static ref LANG_TAG: Regex = Regex::new(r"(?i-u)^[A-Z]{1,8}(-[A-Z0-9]{1,8})*$").unwrap();

    /// A simplified production of Turtle's
    /// [PN_PREFIX](https://www.w3.org/TR/turtle/#grammar-production-PN_PREFIX),
    /// also accepting the empty prefix.
    pub static ref PN_PREFIX: Regex = Regex::new(r"(?x)
      ^
      (
        [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}]
        (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}_\u{2d}0-9\u{00B7}.]*
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}_\u{2d}0-9\u{00B7}]
        )?
      )?
      $
    ").unwrap();
}

/// Check that `iri` is a valid absolute IRI.
pub fn check_iri(iri: &str) -> Result<(), TermError> {
    oxiri::Iri::parse(iri)
        .map(|_| ())
        .map_err(|err| TermError::InvalidIri {
            iri: iri.to_string(),
            reason: err.to_string(),
        })
}
