use std::collections::BTreeSet;

use strata_api::graph::test::*;
use strata_api::graph::MutableGraph;
use strata_api::ns::{rdf, rdfs, xsd};
use strata_api::term::Term;
use strata_api::triple::Triple;
use strata_inmem::SchemaView;
use test_case::test_case;

use super::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn p3() -> Term {
    Term::iri_unchecked(format!("{NS}p3"))
}

fn c3() -> Term {
    Term::iri_unchecked(format!("{NS}C3"))
}

fn rdf_3() -> Term {
    Term::iri_unchecked(format!("{}_3", rdf::PREFIX))
}

/// The base triples together with what they entail.
fn closure(level: Level, schema: Vec<Triple>, base: Vec<Triple>) -> BTreeSet<Triple> {
    init();
    let rule_set = RdfsReasoner::with_level(level).compile_triples(&schema.into_iter().collect());
    let mut all = rule_set.apply(&base);
    all.extend(base);
    all
}

#[test_case(
    vec![t(&P1, &v(rdfs::domain), &C1)],
    vec![t(&I1A, &P1, &I2A)],
    t(&I1A, &v(rdf::type_), &C1);
    "rdfs2 domain"
)]
#[test_case(
    vec![t(&P1, &v(rdfs::range), &C2)],
    vec![t(&I1A, &P1, &I2A)],
    t(&I2A, &v(rdf::type_), &C2);
    "rdfs3 range"
)]
#[test_case(
    vec![t(&P1, &v(rdfs::subPropertyOf), &P2), t(&P2, &v(rdfs::subPropertyOf), &p3())],
    vec![],
    t(&P1, &v(rdfs::subPropertyOf), &p3());
    "rdfs5 sub-property transitivity"
)]
#[test_case(
    vec![t(&P1, &v(rdfs::subPropertyOf), &P2)],
    vec![t(&I1A, &P1, &L1)],
    t(&I1A, &P2, &L1);
    "rdfs7 sub-property"
)]
#[test_case(
    vec![t(&C2, &v(rdfs::subClassOf), &C1)],
    vec![t(&I2A, &v(rdf::type_), &C2)],
    t(&I2A, &v(rdf::type_), &C1);
    "rdfs9 sub-class"
)]
#[test_case(
    vec![t(&C2, &v(rdfs::subClassOf), &C1), t(&C1, &v(rdfs::subClassOf), &c3())],
    vec![],
    t(&C2, &v(rdfs::subClassOf), &c3());
    "rdfs11 sub-class transitivity"
)]
#[test_case(
    vec![t(&v(rdf::_1), &v(rdf::type_), &v(rdfs::ContainerMembershipProperty))],
    vec![],
    t(&v(rdf::_1), &v(rdfs::subPropertyOf), &v(rdfs::member));
    "rdfs12 membership"
)]
#[test_case(
    vec![t(&v(xsd::string), &v(rdf::type_), &v(rdfs::Datatype))],
    vec![],
    t(&v(xsd::string), &v(rdfs::subClassOf), &v(rdfs::Literal));
    "rdfs13 datatype"
)]
#[test_case(
    vec![t(&P1, &v(rdfs::subPropertyOf), &P2), t(&P2, &v(rdfs::domain), &C2), t(&C2, &v(rdfs::subClassOf), &C1)],
    vec![t(&I1A, &P1, &I2A)],
    t(&I1A, &v(rdf::type_), &C1);
    "chained rules"
)]
fn rdfs_rule(schema: Vec<Triple>, base: Vec<Triple>, expected: Triple) {
    assert!(
        !closure(Level::Simple, schema.clone(), base.clone()).contains(&expected),
        "not a simple entailment"
    );
    assert!(closure(Level::Rdfs, schema.clone(), base.clone()).contains(&expected));
    assert!(closure(Level::RdfsFull, schema, base).contains(&expected));
}

#[test]
fn simple_level_adds_only_the_schema() {
    let schema = vec![t(&C2, &v(rdfs::subClassOf), &C1)];
    let base = vec![t(&I2A, &v(rdf::type_), &C2)];
    let rule_set = RdfsReasoner::with_level(Level::Simple).compile_triples(&schema.iter().cloned().collect());
    let entailed = rule_set.apply(&base);
    assert_eq!(entailed, schema.into_iter().collect());
}

#[test]
fn rdfs_level_has_no_axioms() {
    let all = closure(Level::Rdfs, vec![], vec![t(&I1A, &P1, &I2A)]);
    assert_eq!(all.len(), 1);
}

#[test]
fn full_level() {
    let all = closure(
        Level::RdfsFull,
        vec![t(&C1, &v(rdf::type_), &v(rdfs::Class))],
        vec![t(&I1A, &P1, &I2A), t(&I1A, &rdf_3(), &L1)],
    );
    // axioms
    assert!(all.contains(&t(&v(rdf::type_), &v(rdf::type_), &v(rdf::Property))));
    assert!(all.contains(&t(&v(rdf::Seq), &v(rdfs::subClassOf), &v(rdfs::Container))));
    // rdfd2, rdfs4
    assert!(all.contains(&t(&P1, &v(rdf::type_), &v(rdf::Property))));
    assert!(all.contains(&t(&I2A, &v(rdf::type_), &v(rdfs::Resource))));
    // rdfs6, rdfs8, rdfs10
    assert!(all.contains(&t(&P1, &v(rdfs::subPropertyOf), &P1)));
    assert!(all.contains(&t(&C1, &v(rdfs::subClassOf), &C1)));
    assert!(all.contains(&t(&C1, &v(rdfs::subClassOf), &v(rdfs::Resource))));
    // membership properties actually used
    assert!(all.contains(&t(&rdf_3(), &v(rdf::type_), &v(rdfs::ContainerMembershipProperty))));
    assert!(all.contains(&t(&rdf_3(), &v(rdfs::subPropertyOf), &v(rdfs::member))));
    assert!(all.contains(&t(&I1A, &v(rdfs::member), &L1)));
}

#[test]
fn literals_are_never_subjects() {
    let all = closure(
        Level::RdfsFull,
        vec![t(&P1, &v(rdfs::range), &C1)],
        vec![t(&I1A, &P1, &L1), t(&I1B, &v(rdfs::label), &L2E)],
    );
    assert!(all.iter().all(|t| !t.s().is_literal()));
    assert!(all.contains(&t(&I1A, &v(rdf::type_), &v(rdfs::Resource))));
    assert!(!all
        .iter()
        .any(|t| t.p() == &v(rdf::type_) && t.o() == &*C1));
}

#[test]
fn cycles_terminate() {
    let all = closure(
        Level::Rdfs,
        vec![
            t(&P1, &v(rdfs::subPropertyOf), &P2),
            t(&P2, &v(rdfs::subPropertyOf), &P1),
            t(&C1, &v(rdfs::subClassOf), &C2),
            t(&C2, &v(rdfs::subClassOf), &C1),
        ],
        vec![t(&I1A, &P1, &I2A), t(&I1A, &v(rdf::type_), &C2)],
    );
    assert!(all.contains(&t(&I1A, &P2, &I2A)));
    assert!(all.contains(&t(&I1A, &v(rdf::type_), &C1)));
}

#[test]
fn max_rounds() {
    let schema: BTreeSet<_> = [
        t(&P1, &v(rdfs::subPropertyOf), &P2),
        t(&P2, &v(rdfs::domain), &C1),
    ]
    .into_iter()
    .collect();
    let base = [t(&I1A, &P1, &I2A)];
    let expected = t(&I1A, &v(rdf::type_), &C1);

    let capped = RdfsReasoner::with_options(ReasonerOptions::new().with_max_rounds(Some(1)))
        .compile_triples(&schema);
    assert!(!capped.apply(&base).contains(&expected), "needs a second round");

    let uncapped = RdfsReasoner::new().compile_triples(&schema);
    assert!(uncapped.apply(&base).contains(&expected));
}

#[test]
fn entails() {
    let rule_set = RdfsReasoner::new()
        .compile_triples(&[t(&C2, &v(rdfs::subClassOf), &C1)].into_iter().collect());
    let base = vec![t(&I2A, &v(rdf::type_), &C2)];
    assert!(rule_set.entails(&base, &t(&I2A, &v(rdf::type_), &C2)));
    assert!(rule_set.entails(&base, &t(&I2A, &v(rdf::type_), &C1)));
    assert!(!rule_set.entails(&base, &t(&I2B, &v(rdf::type_), &C1)));
    assert!(!rule_set.entails(&base, &t(&I2A, &v(rdf::type_), &c3())), "unknown term");
}

#[test]
fn deterministic() {
    let schema: BTreeSet<_> = some_triples().into_iter().take(11).collect();
    let base: Vec<_> = some_triples().into_iter().skip(11).collect();
    let r1 = RdfsReasoner::new().compile_triples(&schema);
    let r2 = RdfsReasoner::new().compile_triples(&schema);
    assert!(!r1.ptr_eq(&r2));
    assert!(r1.ptr_eq(&r1.clone()));
    let e1 = r1.apply(&base);
    assert_eq!(e1, r1.apply(base.iter().rev()));
    assert_eq!(e1, r2.apply(&base));
}

#[test]
fn schema_is_captured_at_compile_time() -> Result<(), strata_inmem::StoreError> {
    let schema = SchemaView::new();
    schema.insert(&t(&C2, &v(rdfs::subClassOf), &C1))?;
    let rule_set = RdfsReasoner::new().compile(&schema);
    assert_eq!(rule_set.schema_len(), 1);
    assert_eq!(rule_set.level(), Level::Rdfs);

    schema.insert(&t(&C1, &v(rdfs::subClassOf), &c3()))?;
    let base = [t(&I2A, &v(rdf::type_), &C2)];
    assert!(!rule_set
        .apply(&base)
        .contains(&t(&I2A, &v(rdf::type_), &c3())));
    assert!(RdfsReasoner::new()
        .compile(&schema)
        .apply(&base)
        .contains(&t(&I2A, &v(rdf::type_), &c3())));
    Ok(())
}

#[test]
fn debug() {
    let rule_set = RdfsReasoner::with_level(Level::RdfsFull).compile_triples(&BTreeSet::new());
    let txt = format!("{rule_set:?}");
    assert!(txt.contains("RdfsFull"));
    assert!(txt.contains("schema_len: 0"));
}

#[cfg(feature = "all_tests")]
#[test]
fn deep_hierarchies_at_full_level() {
    let depth = 60;
    let class = |i: usize| Term::iri_unchecked(format!("{NS}K{i}"));
    let prop = |i: usize| Term::iri_unchecked(format!("{NS}q{i}"));
    let mut schema = vec![];
    for i in 1..depth {
        schema.push(t(&class(i), &v(rdfs::subClassOf), &class(i - 1)));
        schema.push(t(&prop(i), &v(rdfs::subPropertyOf), &prop(i - 1)));
    }
    schema.push(t(&prop(0), &v(rdfs::domain), &class(depth - 1)));
    let base = vec![t(&I1A, &prop(depth - 1), &I2A)];
    let all = closure(Level::RdfsFull, schema, base);

    assert!(all.contains(&t(&class(depth - 1), &v(rdfs::subClassOf), &class(0))));
    assert!(all.contains(&t(&prop(depth - 1), &v(rdfs::subPropertyOf), &prop(0))));
    for i in 0..depth {
        assert!(all.contains(&t(&I1A, &prop(i), &I2A)));
        assert!(all.contains(&t(&I1A, &v(rdf::type_), &class(i))));
        assert!(all.contains(&t(&class(i), &v(rdfs::subClassOf), &v(rdfs::Resource))));
    }
}
