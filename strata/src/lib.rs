//! A layered [RDF] store with rule-based inference views.
//!
//! The same data is exposed through three layers:
//! * a [`TripleStore`](inmem::TripleStore) holds the asserted triples;
//! * a [`SchemaView`](inmem::SchemaView) holds the schema (classes, properties and their relations),
//!   possibly aggregated from several stores;
//! * an [`InferenceView`](reasoner::InferenceView) pairs a store with a [`RuleSet`](reasoner::RuleSet)
//!   compiled from a schema, and exposes the asserted triples together with the triples they entail.
//!
//! Each handle owns its listeners, which are told about the changes made *through that handle*.
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//!
//! # Getting Started
//!
//! ```
//! use strata::prelude::*;
//! use strata::api::ns::{rdfs, Namespace};
//!
//! let ex = Namespace::new("http://example.org/")?;
//! let schema = SchemaView::new();
//! schema.insert(&Triple::new(
//!     ex.get("name")?,
//!     Term::iri(rdfs::subPropertyOf)?,
//!     ex.get("attribute")?,
//! )?)?;
//!
//! let view = InferenceView::bind(RdfsReasoner::new().compile(&schema), TripleStore::new());
//! view.insert(&Triple::new(ex.get("r1")?, ex.get("name")?, Term::literal("foo"))?)?;
//!
//! let entailed = Triple::new(ex.get("r1")?, ex.get("attribute")?, Term::literal("foo"))?;
//! assert!(view.contains(&entailed)?);
//! assert!(!view.base().has(&entailed));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![deny(missing_docs)]

pub use strata_api as api;
pub use strata_inmem as inmem;
pub use strata_reasoner as reasoner;

/// Re-export of the most commonly used types and traits.
pub mod prelude {
    pub use strata_api::prelude::*;
    pub use strata_inmem::{SchemaView, TripleStore};
    pub use strata_reasoner::{
        InferenceView, Level, RdfsReasoner, ReasonerOptions, RuleEngine, RuleSet,
    };
}
