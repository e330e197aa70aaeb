//! The contract shared by the three layers.
use std::rc::Rc;

use strata::api::listener::ChangeCounter;
use strata::api::ns::{rdf, rdfs, Namespace};
use strata::inmem::StoreError;
use strata::reasoner::InferenceError;
use strata::prelude::*;
use test_case::test_case;

mod common;
use common::*;

fn ex(suffix: &str) -> Term {
    Namespace::new("http://example.org/")
        .and_then(|ns| ns.get(suffix))
        .unwrap()
}

#[test_case(triple(&ex("r1"), &foaf("name"), &Term::literal("foo")) ; "new literal value")]
#[test_case(triple(&iri(RHM), &foaf("knows"), &iri(TBL)) ; "new link")]
#[test_case(triple(&iri(TBL), &foaf("knows"), &iri(RHM)) ; "already asserted")]
#[test_case(triple(&iri(RHM), &iri(rdf::type_), &foaf("Person")) ; "already entailed")]
fn write_through_visibility(st: Triple) -> TestResult {
    let Layers { model, view, .. } = setup();
    view.insert(&st)?;
    assert!(model.has(&st));
    assert!(view.contains(&st)?);
    Ok(())
}

#[test]
fn schema_isolation() -> TestResult {
    let Layers { schema, model, .. } = setup();
    let rule_set = RdfsReasoner::new().compile(&schema);
    let base = model.snapshot();
    let before = rule_set.apply(&base);

    schema.insert(&triple(&foaf("name"), &iri(rdfs::subPropertyOf), &foaf("attribute")))?;
    schema.insert(&triple(&foaf("Agent"), &iri(rdfs::subClassOf), &ex("Thing")))?;
    schema.add_sub_store(
        [triple(&foaf("knows"), &iri(rdfs::domain), &ex("Friendly"))]
            .into_iter()
            .collect(),
    );
    let after = rule_set.apply(&base);

    assert_eq!(before, after);
    assert_eq!(format!("{before:?}"), format!("{after:?}"));
    assert_ne!(before, RdfsReasoner::new().compile(&schema).apply(&base));
    Ok(())
}

#[test]
fn rebind_does_not_change_entailment_power() -> TestResult {
    let Layers { schema, view, .. } = setup();
    let before = view.to_triple_set()?;

    schema.insert(&triple(&foaf("Agent"), &iri(rdfs::subClassOf), &ex("Thing")))?;
    view.rebind()?;
    assert_eq!(view.to_triple_set()?, before);
    Ok(())
}

#[test]
fn rebind_refreshes_base_changes() -> TestResult {
    let Layers { model, view, .. } = setup();
    let before = view.entailed()?;
    let res = fresh_resource();
    model.insert(&triple(&res, &foaf("knows"), &iri(TBL)))?;
    view.rebind()?;
    let after = view.entailed()?;
    assert!(!before.contains(&triple(&res, &iri(rdf::type_), &foaf("Person"))));
    assert!(after.contains(&triple(&res, &iri(rdf::type_), &foaf("Person"))));
    Ok(())
}

#[test]
fn one_notification_per_logical_change() -> TestResult {
    let Layers { model, view, .. } = setup();
    let on_view = Rc::new(ChangeCounter::default());
    let on_model = Rc::new(ChangeCounter::default());
    view.register(on_view.clone());
    model.register(on_model.clone());

    let st = triple(&ex("r1"), &foaf("name"), &Term::literal("foo"));
    view.insert(&st)?;
    assert_eq!((on_view.added_batches(), on_view.added_triples()), (1, 1));
    assert_eq!((on_model.added_batches(), on_model.added_triples()), (1, 1));

    let batch: Vec<_> = (0..10)
        .map(|i| triple(&ex(&format!("r{i}")), &foaf("name"), &Term::literal("bar")))
        .collect();
    assert_eq!(view.insert_all(batch.clone())?, 10);
    assert_eq!((on_view.added_batches(), on_view.added_triples()), (2, 11));
    assert_eq!((on_model.added_batches(), on_model.added_triples()), (2, 11));

    assert_eq!(model.remove_all(batch)?, 10);
    assert_eq!(on_model.removed_batches(), 1);
    assert_eq!(on_view.removed_batches(), 0, "removed through the model");
    Ok(())
}

#[test_case(true ; "through the view")]
#[test_case(false ; "through the model")]
fn idempotence(through_view: bool) -> TestResult {
    let Layers { model, view, .. } = setup();
    let counter = Rc::new(ChangeCounter::default());
    let st = triple(&ex("r1"), &foaf("name"), &Term::literal("foo"));
    let insert = |st: &Triple| -> Result<bool, Box<dyn std::error::Error>> {
        Ok(if through_view {
            view.insert(st)?
        } else {
            model.insert(st)?
        })
    };
    if through_view {
        view.register(counter.clone());
    } else {
        model.register(counter.clone());
    }

    assert!(insert(&st)?);
    assert!(!insert(&st)?);
    assert!(view.contains(&st)?);
    assert!(model.has(&st));
    assert_eq!(counter.added_batches(), 1);
    Ok(())
}

#[test]
fn entailed_but_not_materialized() -> TestResult {
    init_logger();
    let schema = SchemaView::new();
    schema.insert(&triple(&ex("name"), &iri(rdfs::subPropertyOf), &ex("attribute")))?;
    let base = TripleStore::new();
    let view = InferenceView::bind(RdfsReasoner::new().compile(&schema), base.clone());

    view.insert(&triple(&ex("r1"), &ex("name"), &Term::literal("foo")))?;
    let entailed = triple(&ex("r1"), &ex("attribute"), &Term::literal("foo"));
    assert!(view.contains(&entailed)?);
    assert!(!base.has(&entailed));
    Ok(())
}

#[test]
fn schema_change_needs_a_new_rule_set() -> TestResult {
    init_logger();
    let schema = SchemaView::new();
    let base = TripleStore::new();
    let view = InferenceView::bind(RdfsReasoner::new().compile(&schema), base.clone());
    view.insert(&triple(&ex("r1"), &ex("name"), &Term::literal("foo")))?;

    schema.insert(&triple(&ex("name"), &iri(rdfs::subPropertyOf), &ex("attribute")))?;
    view.rebind()?;
    let entailed = triple(&ex("r1"), &ex("attribute"), &Term::literal("foo"));
    assert!(!view.contains(&entailed)?);

    let view = InferenceView::bind(RdfsReasoner::new().compile(&schema), base);
    assert!(view.contains(&entailed)?);
    Ok(())
}

#[test]
fn mutation_during_iteration_is_an_error() -> TestResult {
    let Layers { model, view, .. } = setup();
    let st = triple(&ex("r1"), &foaf("name"), &Term::literal("foo"));
    let mut triples = view.triples()?;
    assert!(triples.next().is_some());

    assert_eq!(
        view.insert(&st),
        Err(InferenceError::Store(StoreError::ConcurrentMutation(1)))
    );
    assert_eq!(model.insert(&st), Err(StoreError::ConcurrentMutation(1)));
    assert!(!view.contains(&st)?, "reads are allowed");
    drop(triples);
    assert!(view.insert(&st)?);
    Ok(())
}

#[test]
fn mutation_after_the_base_triples_is_an_error() -> TestResult {
    let Layers { model, view, .. } = setup();
    let name = triple(&iri(RHM), &foaf("name"), &Term::literal("Robert Hoffmann"));
    let label = triple(&iri(RHM), &iri(rdfs::label), &Term::literal("Robert Hoffmann"));
    assert!(view.contains(&label)?);

    let mut triples = view.triples()?;
    let mut seen: Vec<Triple> = triples.by_ref().take(model.len() + 1).collect();
    assert_eq!(seen.len(), model.len() + 1, "now yielding entailed triples");
    assert_eq!(
        view.remove(&name),
        Err(InferenceError::Store(StoreError::ConcurrentMutation(1)))
    );
    assert_eq!(model.remove(&name), Err(StoreError::ConcurrentMutation(1)));
    seen.extend(triples);
    assert!(seen.contains(&label));
    assert!(view.contains(&label)?, "still entailed");

    assert!(view.remove(&name)?);
    assert!(!view.contains(&label)?);
    assert!(!view.triples()?.any(|t| t == label));
    Ok(())
}

#[test]
fn unbound_view() {
    let view = InferenceView::unbound(TripleStore::new());
    assert!(matches!(view.triples(), Err(InferenceError::UnboundRuleSet)));
    assert_eq!(view.rebind(), Err(InferenceError::UnboundRuleSet));
}

#[test]
fn invalid_pattern() {
    let Layers { model, view, .. } = setup();
    let pattern = Pattern::any().with_s(Term::literal("foo"));
    assert!(matches!(
        model.triples_matching(&pattern),
        Err(StoreError::InvalidPattern(_))
    ));
    assert!(matches!(
        view.triples_matching(&pattern),
        Err(InferenceError::Store(StoreError::InvalidPattern(_)))
    ));
}
