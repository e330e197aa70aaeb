//! The RDFS entailment rules, as functions from a [`Saturation`] to the keys they derive.
//!
//! See <https://www.w3.org/TR/rdf11-mt/#rdfs-entailment>.
//!
//! Rules run sequentially, since a store and its views live on a single thread.
//! The rules that only derive triples about every resource, property or class
//! (rdfd2, rdfs4, rdfs6, rdfs8, rdfs10) and the axioms are only applied at [`Level::RdfsFull`];
//! the other levels keep the entailed set proportional to the data.
//!
//! [`Level::RdfsFull`]: crate::options::Level::RdfsFull
use lazy_static::lazy_static;
use regex::Regex;
use strata_api::ns::{rdf, rdfs, xsd};
use strata_inmem::index::Index;

use crate::_dedup::IndexIteratorDedup;
use crate::_range_n::RangeN;
use crate::_saturation::Saturation;

/// The terms known to the rules, in the order of their indices.
pub(crate) const VOCABULARY: [&str; 32] = [
    rdf::type_,
    rdf::subject,
    rdf::predicate,
    rdf::object,
    rdf::first,
    rdf::rest,
    rdf::value,
    rdf::nil,
    rdf::List,
    rdf::Property,
    rdf::_1,
    rdf::Alt,
    rdf::Bag,
    rdf::Seq,
    rdf::Statement,
    rdfs::domain,
    rdfs::range,
    rdfs::Resource,
    rdfs::Literal,
    rdfs::Datatype,
    rdfs::Class,
    rdfs::subClassOf,
    rdfs::subPropertyOf,
    rdfs::member,
    rdfs::Container,
    rdfs::ContainerMembershipProperty,
    rdfs::comment,
    rdfs::seeAlso,
    rdfs::isDefinedBy,
    rdfs::label,
    rdf::langString,
    xsd::string,
];

pub(crate) const RDF_TYPE: Index = 0;
pub(crate) const RDF_SUBJECT: Index = 1;
pub(crate) const RDF_PREDICATE: Index = 2;
pub(crate) const RDF_OBJECT: Index = 3;
pub(crate) const RDF_FIRST: Index = 4;
pub(crate) const RDF_REST: Index = 5;
pub(crate) const RDF_VALUE: Index = 6;
pub(crate) const RDF_NIL: Index = 7;
pub(crate) const RDF_LIST: Index = 8;
pub(crate) const RDF_PROPERTY: Index = 9;
pub(crate) const RDF_1: Index = 10;
pub(crate) const RDF_ALT: Index = 11;
pub(crate) const RDF_BAG: Index = 12;
pub(crate) const RDF_SEQ: Index = 13;
pub(crate) const RDF_STATEMENT: Index = 14;
pub(crate) const RDFS_DOMAIN: Index = 15;
pub(crate) const RDFS_RANGE: Index = 16;
pub(crate) const RDFS_RESOURCE: Index = 17;
pub(crate) const RDFS_LITERAL: Index = 18;
pub(crate) const RDFS_DATATYPE: Index = 19;
pub(crate) const RDFS_CLASS: Index = 20;
pub(crate) const RDFS_SUB_CLASS_OF: Index = 21;
pub(crate) const RDFS_SUB_PROPERTY_OF: Index = 22;
pub(crate) const RDFS_MEMBER: Index = 23;
pub(crate) const RDFS_CONTAINER: Index = 24;
pub(crate) const RDFS_CONTAINER_MEMBERSHIP_PROPERTY: Index = 25;
pub(crate) const RDFS_COMMENT: Index = 26;
pub(crate) const RDFS_SEE_ALSO: Index = 27;
pub(crate) const RDFS_IS_DEFINED_BY: Index = 28;
pub(crate) const RDFS_LABEL: Index = 29;
pub(crate) const RDF_LANG_STRING: Index = 30;
pub(crate) const XSD_STRING: Index = 31;

/// The RDF and RDFS axiomatic triples
/// (restricted to `rdf:_1` for the infinitely many membership properties).
pub(crate) const AXIOMS: &[[Index; 3]] = &[
    [RDF_TYPE, RDF_TYPE, RDF_PROPERTY],
    [RDF_SUBJECT, RDF_TYPE, RDF_PROPERTY],
    [RDF_PREDICATE, RDF_TYPE, RDF_PROPERTY],
    [RDF_OBJECT, RDF_TYPE, RDF_PROPERTY],
    [RDF_FIRST, RDF_TYPE, RDF_PROPERTY],
    [RDF_REST, RDF_TYPE, RDF_PROPERTY],
    [RDF_VALUE, RDF_TYPE, RDF_PROPERTY],
    [RDF_NIL, RDF_TYPE, RDF_LIST],
    [RDF_1, RDF_TYPE, RDF_PROPERTY],
    //
    [RDF_TYPE, RDFS_DOMAIN, RDFS_RESOURCE],
    [RDFS_DOMAIN, RDFS_DOMAIN, RDF_PROPERTY],
    [RDFS_RANGE, RDFS_DOMAIN, RDF_PROPERTY],
    [RDFS_SUB_PROPERTY_OF, RDFS_DOMAIN, RDF_PROPERTY],
    [RDFS_SUB_CLASS_OF, RDFS_DOMAIN, RDFS_CLASS],
    [RDF_SUBJECT, RDFS_DOMAIN, RDF_STATEMENT],
    [RDF_PREDICATE, RDFS_DOMAIN, RDF_STATEMENT],
    [RDF_OBJECT, RDFS_DOMAIN, RDF_STATEMENT],
    [RDFS_MEMBER, RDFS_DOMAIN, RDFS_RESOURCE],
    [RDF_FIRST, RDFS_DOMAIN, RDF_LIST],
    [RDF_REST, RDFS_DOMAIN, RDF_LIST],
    [RDFS_SEE_ALSO, RDFS_DOMAIN, RDFS_RESOURCE],
    [RDFS_IS_DEFINED_BY, RDFS_DOMAIN, RDFS_RESOURCE],
    [RDFS_COMMENT, RDFS_DOMAIN, RDFS_RESOURCE],
    [RDFS_LABEL, RDFS_DOMAIN, RDFS_RESOURCE],
    [RDF_VALUE, RDFS_DOMAIN, RDFS_RESOURCE],
    //
    [RDF_TYPE, RDFS_RANGE, RDFS_CLASS],
    [RDFS_DOMAIN, RDFS_RANGE, RDFS_CLASS],
    [RDFS_RANGE, RDFS_RANGE, RDFS_CLASS],
    [RDFS_SUB_PROPERTY_OF, RDFS_RANGE, RDF_PROPERTY],
    [RDFS_SUB_CLASS_OF, RDFS_RANGE, RDFS_CLASS],
    [RDF_SUBJECT, RDFS_RANGE, RDFS_RESOURCE],
    [RDF_PREDICATE, RDFS_RANGE, RDFS_RESOURCE],
    [RDF_OBJECT, RDFS_RANGE, RDFS_RESOURCE],
    [RDFS_MEMBER, RDFS_RANGE, RDFS_RESOURCE],
    [RDF_FIRST, RDFS_RANGE, RDFS_RESOURCE],
    [RDF_REST, RDFS_RANGE, RDF_LIST],
    [RDFS_SEE_ALSO, RDFS_RANGE, RDFS_RESOURCE],
    [RDFS_IS_DEFINED_BY, RDFS_RANGE, RDFS_RESOURCE],
    [RDFS_COMMENT, RDFS_RANGE, RDFS_LITERAL],
    [RDFS_LABEL, RDFS_RANGE, RDFS_LITERAL],
    [RDF_VALUE, RDFS_RANGE, RDFS_RESOURCE],
    //
    [RDF_ALT, RDFS_SUB_CLASS_OF, RDFS_CONTAINER],
    [RDF_BAG, RDFS_SUB_CLASS_OF, RDFS_CONTAINER],
    [RDF_SEQ, RDFS_SUB_CLASS_OF, RDFS_CONTAINER],
    [RDFS_CONTAINER_MEMBERSHIP_PROPERTY, RDFS_SUB_CLASS_OF, RDF_PROPERTY],
    [RDFS_IS_DEFINED_BY, RDFS_SUB_PROPERTY_OF, RDFS_SEE_ALSO],
    [RDFS_DATATYPE, RDFS_SUB_CLASS_OF, RDFS_CLASS],
    //
    [RDF_1, RDF_TYPE, RDFS_CONTAINER_MEMBERSHIP_PROPERTY],
    [RDF_1, RDFS_DOMAIN, RDFS_RESOURCE],
    [RDF_1, RDFS_RANGE, RDFS_RESOURCE],
    //
    [RDF_LANG_STRING, RDF_TYPE, RDFS_DATATYPE],
    [XSD_STRING, RDF_TYPE, RDFS_DATATYPE],
];

/// Axiomatic triples for all the membership properties (`rdf:_n`) used in the graph.
pub(crate) fn rdfs_membership_properties(
    graph: &Saturation,
) -> impl Iterator<Item = [Index; 3]> + '_ {
    lazy_static! {
        static ref MEMBERSHIP: Regex =
            Regex::new("^http://www.w3.org/1999/02/22-rdf-syntax-ns#_[1-9][0-9]*$").unwrap();
    }
    graph
        .terms()
        .filter_map(|(i, t)| t.as_iri().filter(|iri| MEMBERSHIP.is_match(iri)).map(|_| i))
        .flat_map(|i| {
            [
                [i, RDF_TYPE, RDFS_CONTAINER_MEMBERSHIP_PROPERTY],
                [i, RDF_TYPE, RDF_PROPERTY],
                [i, RDFS_DOMAIN, RDFS_RESOURCE],
                [i, RDFS_RANGE, RDFS_RESOURCE],
            ]
        })
}

/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfd2>: every predicate is a property.
pub(crate) fn rdfd2(graph: &Saturation) -> impl Iterator<Item = [Index; 3]> + '_ {
    graph
        .pos
        .iter()
        .map(|[p, ..]| *p)
        .dedup()
        .map(|p| [p, RDF_TYPE, RDF_PROPERTY])
}

/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfs2>
pub(crate) fn rdfs2(graph: &Saturation) -> impl Iterator<Item = [Index; 3]> + '_ {
    graph.pos.range1(RDFS_DOMAIN).flat_map(move |[_, c, p]| {
        graph
            .pos
            .range1(*p)
            .map(move |[_, _, s]| [*s, RDF_TYPE, *c])
    })
}

/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfs3>
pub(crate) fn rdfs3(graph: &Saturation) -> impl Iterator<Item = [Index; 3]> + '_ {
    graph.pos.range1(RDFS_RANGE).flat_map(move |[_, c, p]| {
        graph
            .pos
            .range1(*p)
            .map(move |[_, o, _]| [*o, RDF_TYPE, *c])
    })
}

/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfs4a>
/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfs4b>
///
/// Only the subjects and resource objects of the graph are typed;
/// literals are not.
pub(crate) fn rdfs4(graph: &Saturation) -> impl Iterator<Item = [Index; 3]> + '_ {
    graph
        .spo
        .iter()
        .flat_map(|[s, _, o]| [*s, *o])
        .filter(move |i| graph.term(*i).is_resource())
        .map(|i| [i, RDF_TYPE, RDFS_RESOURCE])
}

/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfs5>
pub(crate) fn rdfs5(graph: &Saturation) -> impl Iterator<Item = [Index; 3]> + '_ {
    graph
        .pos
        .range1(RDFS_SUB_PROPERTY_OF)
        .filter(|[_, p3, p2]| p2 != p3)
        .flat_map(move |[_, p3, p2]| {
            graph
                .pos
                .range2(RDFS_SUB_PROPERTY_OF, *p2)
                .filter_map(move |[_, _, p1]| {
                    (p1 != p2 && p1 != p3).then_some([*p1, RDFS_SUB_PROPERTY_OF, *p3])
                })
        })
}

/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfs6>
pub(crate) fn rdfs6(graph: &Saturation) -> impl Iterator<Item = [Index; 3]> + '_ {
    graph
        .pos
        .range2(RDF_TYPE, RDF_PROPERTY)
        .map(|[_, _, s]| [*s, RDFS_SUB_PROPERTY_OF, *s])
}

/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfs7>
pub(crate) fn rdfs7(graph: &Saturation) -> impl Iterator<Item = [Index; 3]> + '_ {
    graph
        .pos
        .range1(RDFS_SUB_PROPERTY_OF)
        .filter(|[_, p2, p1]| p1 != p2)
        .flat_map(move |[_, p2, p1]| {
            graph
                .pos
                .range1(*p1)
                .map(move |[_, o, s]| [*s, *p2, *o])
        })
}

/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfs8>
/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfs10>
pub(crate) fn rdfs8_rdfs10(graph: &Saturation) -> impl Iterator<Item = [Index; 3]> + '_ {
    graph
        .pos
        .range2(RDF_TYPE, RDFS_CLASS)
        .flat_map(|[_, _, c]| {
            [
                [*c, RDFS_SUB_CLASS_OF, *c],
                [*c, RDFS_SUB_CLASS_OF, RDFS_RESOURCE],
            ]
        })
}

/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfs9>
pub(crate) fn rdfs9(graph: &Saturation) -> impl Iterator<Item = [Index; 3]> + '_ {
    graph
        .pos
        .range1(RDFS_SUB_CLASS_OF)
        .filter(|[_, c2, c1]| c1 != c2)
        .flat_map(move |[_, c2, c1]| {
            graph
                .pos
                .range2(RDF_TYPE, *c1)
                .map(move |[_, _, s]| [*s, RDF_TYPE, *c2])
        })
}

/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfs11>
pub(crate) fn rdfs11(graph: &Saturation) -> impl Iterator<Item = [Index; 3]> + '_ {
    graph
        .pos
        .range1(RDFS_SUB_CLASS_OF)
        .filter(|[_, c3, c2]| c2 != c3)
        .flat_map(move |[_, c3, c2]| {
            graph
                .pos
                .range2(RDFS_SUB_CLASS_OF, *c2)
                .filter_map(move |[_, _, c1]| {
                    (c1 != c2 && c1 != c3).then_some([*c1, RDFS_SUB_CLASS_OF, *c3])
                })
        })
}

/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfs12>
pub(crate) fn rdfs12(graph: &Saturation) -> impl Iterator<Item = [Index; 3]> + '_ {
    graph
        .pos
        .range2(RDF_TYPE, RDFS_CONTAINER_MEMBERSHIP_PROPERTY)
        .map(|[_, _, s]| [*s, RDFS_SUB_PROPERTY_OF, RDFS_MEMBER])
}

/// <https://www.w3.org/TR/rdf11-mt/#dfn-rdfs13>
pub(crate) fn rdfs13(graph: &Saturation) -> impl Iterator<Item = [Index; 3]> + '_ {
    graph
        .pos
        .range2(RDF_TYPE, RDFS_DATATYPE)
        .map(|[_, _, s]| [*s, RDFS_SUB_CLASS_OF, RDFS_LITERAL])
}
