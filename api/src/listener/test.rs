use super::*;
use crate::term::Term;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn some_triples(n: usize) -> Vec<Triple> {
    (0..n)
        .map(|i| {
            Triple::new(
                Term::iri_unchecked(format!("http://example.org/s{i}")),
                Term::iri_unchecked("http://example.org/p"),
                Term::literal(format!("{i}")),
            )
            .unwrap()
        })
        .collect()
}

#[test]
fn register_and_fire() {
    init();
    let registry = ListenerRegistry::new();
    let counter = Rc::new(ChangeCounter::default());
    registry.register(counter.clone());
    assert_eq!(registry.len(), 1);

    registry.fire_added(&some_triples(3));
    assert!(counter.has_changed());
    assert_eq!(counter.added_batches(), 1);
    assert_eq!(counter.added_triples(), 3);

    registry.fire_removed(&some_triples(1));
    assert_eq!(counter.removed_batches(), 1);
    assert_eq!(counter.removed_triples(), 1);
}

#[test]
fn empty_batches_are_not_delivered() {
    init();
    let registry = ListenerRegistry::new();
    let counter = Rc::new(ChangeCounter::default());
    registry.register(counter.clone());
    registry.fire_added(&[]);
    registry.fire_removed(&[]);
    assert!(!counter.has_changed());
}

#[test]
fn events_are_not_changes() {
    init();
    let registry = ListenerRegistry::new();
    let counter = Rc::new(ChangeCounter::default());
    registry.register(counter.clone());
    registry.fire_event(&StoreEvent::Rebound);
    registry.fire_event(&StoreEvent::Custom("hello".into()));
    assert!(!counter.has_changed());
    assert_eq!(
        counter.events(),
        vec![StoreEvent::Rebound, StoreEvent::Custom("hello".into())]
    );
}

#[test]
fn unregister() {
    init();
    let registry = ListenerRegistry::new();
    let c1 = Rc::new(ChangeCounter::default());
    let c2 = Rc::new(ChangeCounter::default());
    let id1 = registry.register(c1.clone());
    let id2 = registry.register(c2.clone());
    assert_ne!(id1, id2);

    assert!(registry.unregister(id1));
    assert!(!registry.unregister(id1));
    registry.fire_added(&some_triples(1));
    assert!(!c1.has_changed());
    assert!(c2.has_changed());
    assert!(registry.unregister(id2));
    assert!(registry.is_empty());
}

#[test]
fn reset() {
    init();
    let counter = ChangeCounter::default();
    counter.added(&some_triples(2));
    counter.event(&StoreEvent::RuleSetReplaced);
    counter.reset();
    assert!(!counter.has_changed());
    assert_eq!(counter.added_triples(), 0);
    assert!(counter.events().is_empty());
}

/// A listener unregistering itself on its first notification.
struct OneShot {
    registry: Rc<ListenerRegistry>,
    id: Cell<Option<ListenerId>>,
    calls: Cell<usize>,
}

impl ChangeListener for OneShot {
    fn added(&self, _: &[Triple]) {
        self.calls.set(self.calls.get() + 1);
        if let Some(id) = self.id.take() {
            self.registry.unregister(id);
        }
    }
    fn removed(&self, _: &[Triple]) {}
}

#[test]
fn listener_can_unregister_itself_while_notified() {
    init();
    let registry = Rc::new(ListenerRegistry::new());
    let one_shot = Rc::new(OneShot {
        registry: registry.clone(),
        id: Cell::new(None),
        calls: Cell::new(0),
    });
    let id = registry.register(one_shot.clone());
    one_shot.id.set(Some(id));

    registry.fire_added(&some_triples(1));
    registry.fire_added(&some_triples(1));
    assert_eq!(one_shot.calls.get(), 1);
    assert!(registry.is_empty());
}

#[cfg(feature = "all_tests")]
#[test]
fn many_listeners_many_batches() {
    init();
    let registry = ListenerRegistry::new();
    let counters: Vec<_> = (0..100)
        .map(|_| Rc::new(ChangeCounter::default()))
        .collect();
    let ids: Vec<_> = counters
        .iter()
        .map(|c| registry.register(c.clone()))
        .collect();
    let batch = some_triples(1_000);
    for _ in 0..100 {
        registry.fire_added(&batch);
    }
    for id in ids.into_iter().step_by(2) {
        assert!(registry.unregister(id));
    }
    registry.fire_removed(&batch);
    for (i, c) in counters.iter().enumerate() {
        assert_eq!(c.added_batches(), 100);
        assert_eq!(c.added_triples(), 100_000);
        assert_eq!(c.removed_batches(), i % 2);
    }
}
