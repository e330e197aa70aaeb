//! This crate is part of [strata],
//! a layered [RDF] store with rule-based inference views.
//!
//! It provides the two bottom layers:
//! * [`TripleStore`], an in-memory, indexed, shared-handle set of triples;
//! * [`SchemaView`], a union of several stores used to hold vocabulary definitions.
//!
//! [strata]: https://docs.rs/strata/latest/strata/
//! [RDF]: https://www.w3.org/TR/rdf-primer/

pub mod index;
pub mod schema;
pub mod store;

pub use schema::SchemaView;
pub use store::{StoreError, TripleStore};
