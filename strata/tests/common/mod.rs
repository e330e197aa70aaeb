//! A small FOAF schema and a few FOAF profiles, loaded into the three layers.
#![allow(dead_code)]

use std::error::Error;

use lazy_static::lazy_static;
use strata::api::ns::{rdf, rdfs, Namespace};
use strata::prelude::*;

pub type TestResult = Result<(), Box<dyn Error>>;

pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
pub const TBL: &str = "http://www.w3.org/People/Berners-Lee/card#i";
pub const RHM: &str = "http://dig.csail.mit.edu/2007/wiki/people/RobertHoffmann#RMH";

lazy_static! {
    pub static ref FOAF_NS: Namespace = Namespace::new(FOAF).unwrap();
}

pub fn foaf(suffix: &str) -> Term {
    FOAF_NS.get(suffix).unwrap()
}

pub fn iri(iri: &str) -> Term {
    Term::iri(iri).unwrap()
}

pub fn triple(s: &Term, p: &Term, o: &Term) -> Triple {
    Triple::new(s.clone(), p.clone(), o.clone()).unwrap()
}

pub fn foaf_schema() -> Vec<Triple> {
    let class = iri(rdfs::Class);
    let property = iri(rdf::Property);
    let mut schema = vec![];
    for c in ["Agent", "Person", "Organization", "Document", "PersonalProfileDocument"] {
        schema.push(triple(&foaf(c), &iri(rdf::type_), &class));
    }
    for p in ["name", "knows", "homepage", "page", "maker", "made", "mbox", "primaryTopic"] {
        schema.push(triple(&foaf(p), &iri(rdf::type_), &property));
    }
    let sco = iri(rdfs::subClassOf);
    schema.push(triple(&foaf("Person"), &sco, &foaf("Agent")));
    schema.push(triple(&foaf("Organization"), &sco, &foaf("Agent")));
    schema.push(triple(&foaf("PersonalProfileDocument"), &sco, &foaf("Document")));

    let spo = iri(rdfs::subPropertyOf);
    schema.push(triple(&foaf("name"), &spo, &iri(rdfs::label)));
    schema.push(triple(&foaf("homepage"), &spo, &foaf("page")));

    let domain = iri(rdfs::domain);
    let range = iri(rdfs::range);
    schema.push(triple(&foaf("knows"), &domain, &foaf("Person")));
    schema.push(triple(&foaf("knows"), &range, &foaf("Person")));
    schema.push(triple(&foaf("page"), &range, &foaf("Document")));
    schema.push(triple(&foaf("maker"), &range, &foaf("Agent")));
    schema.push(triple(&foaf("made"), &domain, &foaf("Agent")));
    schema.push(triple(&foaf("mbox"), &domain, &foaf("Agent")));
    schema
}

pub fn foaf_example() -> Vec<Triple> {
    let tbl = iri(TBL);
    let rhm = iri(RHM);
    let card = iri("http://www.w3.org/People/Berners-Lee/card");
    vec![
        triple(&card, &iri(rdf::type_), &foaf("PersonalProfileDocument")),
        triple(&card, &foaf("maker"), &tbl),
        triple(&card, &foaf("primaryTopic"), &tbl),
        triple(&tbl, &iri(rdf::type_), &foaf("Person")),
        triple(&tbl, &foaf("name"), &Term::literal("Timothy Berners-Lee")),
        triple(&tbl, &foaf("homepage"), &iri("http://www.w3.org/People/Berners-Lee/")),
        triple(&tbl, &foaf("mbox"), &iri("mailto:timbl@w3.org")),
        triple(&tbl, &foaf("knows"), &rhm),
        triple(&rhm, &foaf("name"), &Term::literal("Robert Hoffmann")),
    ]
}

/// The three layers of the FOAF data.
pub struct Layers {
    pub schema: SchemaView,
    pub model: TripleStore,
    pub view: InferenceView,
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn setup() -> Layers {
    init_logger();

    let schema = SchemaView::new();
    schema.set_prefix("foaf", FOAF_NS.clone()).unwrap();
    schema.add_sub_store(foaf_schema().into_iter().collect());

    let model: TripleStore = foaf_example().into_iter().collect();

    let rule_set = RdfsReasoner::new().compile(&schema);
    let view = InferenceView::bind(rule_set, model.clone());

    Layers {
        schema,
        model,
        view,
    }
}

/// A resource that appears nowhere in the fixture.
pub fn fresh_resource() -> Term {
    Term::fresh_bnode()
}
