//! Standard and custom namespaces.
//!
//! This module provides:
//! * the [`Namespace`] type for defining custom dynamic namespaces;
//! * the [`namespace!`](crate::namespace) macro, for defining custom static namespaces;
//! * modules corresponding to the namespaces used by RDFS entailment
//!   (generated via the [`namespace!`](crate::namespace) macro).
//!
//! # Example use
//! ```
//! use strata_api::ns::{Namespace, rdf, rdfs};
//! use strata_api::term::Term;
//! use strata_api::triple::Triple;
//!
//! let foaf = Namespace::new("http://xmlns.com/foaf/0.1/").unwrap();
//! let name = foaf.get("name").unwrap();
//! let label = Term::iri_unchecked(rdfs::label);
//! let t = Triple::new(name, Term::iri_unchecked(rdfs::subPropertyOf), label).unwrap();
//! assert!(t.p().is(rdfs::subPropertyOf));
//! ```

#[macro_use]
mod _macro;
mod _namespace;
pub use _namespace::*;

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        Alt,
        Bag,
        List,
        Property,
        Seq,
        Statement,
        // datatypes
        langString,
        XMLLiteral,
        // properties
        first,
        object,
        predicate,
        rest,
        subject,
        value,
        _1,
        // individuals
        nil;
        // 'type' is a Rust keyword, so we use 'type_' instead
        type_, "type"
    );
}

/// The standard `rdfs:` namespace.
pub mod rdfs {
    namespace!(
        "http://www.w3.org/2000/01/rdf-schema#",
        // classes
        Class,
        Container,
        ContainerMembershipProperty,
        Datatype,
        Literal,
        Resource,
        // properties
        comment,
        domain,
        isDefinedBy,
        label,
        member,
        range,
        seeAlso,
        subClassOf,
        subPropertyOf
    );
}

/// The standard `xsd:` namespace (only the datatypes commonly found in schemas).
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        boolean,
        date,
        dateTime,
        decimal,
        double,
        float,
        int,
        integer,
        long,
        string
    );
}
