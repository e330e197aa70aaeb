//! This crate is part of [strata],
//! a layered [RDF] store with rule-based inference views.
//!
//! It provides a forward-chaining reasoning engine for RDFS entailment,
//! and the inference layer built on it:
//! * a [`RuleEngine`] (typically a [`RdfsReasoner`]) compiles a schema into a [`RuleSet`];
//! * an [`InferenceView`] pairs a [`RuleSet`] with a base [`TripleStore`](strata_inmem::TripleStore),
//!   and exposes the base triples together with the triples they entail.
//!
//! [strata]: https://docs.rs/strata/latest/strata/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

use strata_api::pattern::InvalidPattern;
use strata_inmem::StoreError;
use thiserror::Error;

pub mod options;
pub mod rules;
pub mod ruleset;
pub mod view;

mod _dedup;
mod _range_n;
mod _saturation;

pub use options::{Level, ReasonerOptions};
pub use rules::{RdfsReasoner, RuleEngine};
pub use ruleset::RuleSet;
pub use view::InferenceView;

/// The errors raised by an [`InferenceView`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InferenceError {
    /// The base store raised an error
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The view was used before a rule set was bound to it
    #[error("no rule set is bound to this inference view")]
    UnboundRuleSet,
}

impl From<InvalidPattern> for InferenceError {
    fn from(value: InvalidPattern) -> Self {
        InferenceError::Store(value.into())
    }
}

#[cfg(test)]
mod test;
