use projboard_core::{
    ListenerError, ListenerFailurePolicy, MoveOutcome, Project, ProjectId, ProjectListener,
    ProjectStatus, ProjectStore, StoreError,
};
use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

type Calls = Rc<RefCell<Vec<Vec<Project>>>>;

fn recording_store(policy: ListenerFailurePolicy) -> (ProjectStore, Calls) {
    let mut store = ProjectStore::new(policy);
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    store.add_listener(move |projects| {
        sink.borrow_mut().push(projects.to_vec());
        Ok(())
    });
    (store, calls)
}

#[derive(Default)]
struct CountingView {
    calls: usize,
}

impl ProjectListener for CountingView {
    fn on_projects_changed(&mut self, _projects: &[Project]) -> Result<(), ListenerError> {
        self.calls += 1;
        Ok(())
    }
}

#[test]
fn ids_are_unique_across_many_projects() {
    let mut store = ProjectStore::default();
    let mut seen = HashSet::new();
    for index in 0..10_000 {
        let id = store
            .add_project(format!("project {index}"), "description", 2)
            .unwrap();
        assert!(seen.insert(id), "duplicate id at {index}");
    }
    assert_eq!(store.len(), 10_000);
}

proptest! {
    #[test]
    fn ids_stay_pairwise_distinct(titles in prop::collection::vec("[a-z]{1,8}", 1..200)) {
        let mut store = ProjectStore::default();
        let ids: Vec<ProjectId> = titles
            .iter()
            .map(|title| store.add_project(title.clone(), "description", 1).unwrap())
            .collect();
        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }
}

#[test]
fn every_listener_gets_one_call_per_add_with_post_mutation_snapshot() {
    let (mut store, first) = recording_store(ListenerFailurePolicy::Isolate);
    let second: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&second);
    store.add_listener(move |projects| {
        sink.borrow_mut().push(projects.to_vec());
        Ok(())
    });

    let a = store.add_project("A", "description", 1).unwrap();
    let b = store.add_project("B", "description", 2).unwrap();

    for calls in [&first, &second] {
        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].len(), 1);
        assert_eq!(calls[0][0].id, a);
        assert_eq!(calls[1].len(), 2);
        assert_eq!(calls[1][1].id, b);
    }
}

#[test]
fn listeners_fire_in_registration_order() {
    let mut store = ProjectStore::default();
    let order = Rc::new(RefCell::new(Vec::new()));
    for label in ["first", "second", "third"] {
        let sink = Rc::clone(&order);
        store.add_listener(move |_| {
            sink.borrow_mut().push(label);
            Ok(())
        });
    }
    store.add_project("t", "description", 1).unwrap();
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn effective_move_notifies_with_updated_status() {
    let (mut store, calls) = recording_store(ListenerFailurePolicy::Isolate);
    let id = store.add_project("t", "description", 1).unwrap();

    let outcome = store.move_project(&id, ProjectStatus::Finished).unwrap();

    assert_eq!(outcome, MoveOutcome::Moved);
    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1][0].status, ProjectStatus::Finished);
}

#[test]
fn moving_to_current_status_does_not_notify() {
    let (mut store, calls) = recording_store(ListenerFailurePolicy::Isolate);
    let id = store.add_project("t", "description", 1).unwrap();
    let before = calls.borrow().len();

    let outcome = store.move_project(&id, ProjectStatus::Active).unwrap();

    assert_eq!(outcome, MoveOutcome::Unchanged);
    assert_eq!(calls.borrow().len(), before);
}

#[test]
fn moving_missing_id_is_silent() {
    let (mut store, calls) = recording_store(ListenerFailurePolicy::Isolate);
    store.add_project("t", "description", 1).unwrap();
    let before = calls.borrow().len();

    let outcome = store
        .move_project(&ProjectId::from("nonexistent-id"), ProjectStatus::Finished)
        .unwrap();

    assert_eq!(outcome, MoveOutcome::NotFound);
    assert_eq!(calls.borrow().len(), before);
}

#[test]
fn duplicate_shared_listener_is_notified_once() {
    let mut store = ProjectStore::default();
    let view = Rc::new(RefCell::new(CountingView::default()));

    let first = store.add_shared_listener(Rc::clone(&view));
    let second = store.add_shared_listener(Rc::clone(&view));
    store.add_project("t", "description", 1).unwrap();

    assert_eq!(first, second);
    assert_eq!(store.listener_count(), 1);
    assert_eq!(view.borrow().calls, 1);
}

#[test]
fn removed_listener_stops_receiving() {
    let mut store = ProjectStore::default();
    let view = Rc::new(RefCell::new(CountingView::default()));
    let subscription = store.add_shared_listener(Rc::clone(&view));

    store.add_project("a", "description", 1).unwrap();
    assert!(store.remove_listener(subscription));
    store.add_project("b", "description", 1).unwrap();

    assert_eq!(view.borrow().calls, 1);
}

#[test]
fn isolated_failure_does_not_block_later_listeners() {
    let mut store = ProjectStore::new(ListenerFailurePolicy::Isolate);
    store.add_listener(|_| Err(ListenerError::failed("render exploded")));
    let view = Rc::new(RefCell::new(CountingView::default()));
    store.add_shared_listener(Rc::clone(&view));

    let id = store.add_project("t", "description", 1).unwrap();

    assert!(store.get(&id).is_some());
    assert_eq!(view.borrow().calls, 1);
}

#[test]
fn fail_fast_stops_at_first_failure_but_keeps_mutation() {
    let mut store = ProjectStore::new(ListenerFailurePolicy::FailFast);
    let failing = store.add_listener(|_| Err(ListenerError::failed("render exploded")));
    let view = Rc::new(RefCell::new(CountingView::default()));
    store.add_shared_listener(Rc::clone(&view));

    let err = store.add_project("t", "description", 1).unwrap_err();

    assert_eq!(
        err,
        StoreError::Listener {
            subscription: failing,
            source: ListenerError::failed("render exploded"),
        }
    );
    assert_eq!(store.len(), 1);
    assert_eq!(view.borrow().calls, 0);
}

#[test]
fn borrowed_listener_is_reported_busy() {
    let mut store = ProjectStore::new(ListenerFailurePolicy::FailFast);
    let view = Rc::new(RefCell::new(CountingView::default()));
    store.add_shared_listener(Rc::clone(&view));

    let _held = view.borrow_mut();
    let err = store.add_project("t", "description", 1).unwrap_err();

    assert!(matches!(
        err,
        StoreError::Listener {
            source: ListenerError::Busy,
            ..
        }
    ));
}
