//! This crate is part of [strata],
//! a layered [RDF] store with rule-based inference views.
//!
//! It defines the vocabulary shared by every layer:
//! * [terms](term) and [triples](triple), always valid by construction;
//! * [patterns](pattern) used to query graphs;
//! * [namespaces](ns) and [prefix maps](prefix);
//! * the [graph traits](graph) implemented by stores and views;
//! * [change notification](listener).
//!
//! [strata]: https://docs.rs/strata/latest/strata/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

pub mod graph;
pub mod listener;
pub mod ns;
pub mod pattern;
pub mod prefix;
pub mod term;
pub mod triple;

pub use pattern::InvalidPattern;
pub use term::TermError;

/// Re-export of the most commonly used types and traits.
pub mod prelude {
    pub use crate::graph::{CollectibleGraph, Graph, MutableGraph};
    pub use crate::listener::{ChangeListener, ListenerId, StoreEvent};
    pub use crate::pattern::Pattern;
    pub use crate::term::{Term, TermKind};
    pub use crate::triple::Triple;
}
