//! Shared handle to the one store of a running board.
//!
//! Components receive a clone of this handle instead of reaching for a global
//! instance. Every clone points at the same store.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::{
    ListenerError, MoveOutcome, ProjectListener, ProjectStore, StoreError, StoreResult,
    SubscriptionId,
};
use log::warn;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct SharedProjectStore {
    inner: Rc<RefCell<ProjectStore>>,
}

impl SharedProjectStore {
    pub fn new(store: ProjectStore) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    /// Returns whether both handles point at the same store.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn add_listener<F>(&self, listener: F) -> StoreResult<SubscriptionId>
    where
        F: FnMut(&[Project]) -> Result<(), ListenerError> + 'static,
    {
        Ok(self.write()?.add_listener(listener))
    }

    pub fn add_shared_listener<L>(&self, listener: Rc<RefCell<L>>) -> StoreResult<SubscriptionId>
    where
        L: ProjectListener + 'static,
    {
        Ok(self.write()?.add_shared_listener(listener))
    }

    pub fn remove_listener(&self, id: SubscriptionId) -> StoreResult<bool> {
        Ok(self.write()?.remove_listener(id))
    }

    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> StoreResult<ProjectId> {
        self.write()?.add_project(title, description, people)
    }

    /// Outer error: nothing was stored. Inner error: stored, but a listener
    /// failed under `FailFast`.
    pub fn commit_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> StoreResult<(ProjectId, StoreResult<()>)> {
        Ok(self.write()?.commit_project(title, description, people))
    }

    pub fn move_project(&self, id: &ProjectId, new_status: ProjectStatus) -> StoreResult<MoveOutcome> {
        self.write()?.move_project(id, new_status)
    }

    /// Copies the current collection.
    pub fn snapshot(&self) -> StoreResult<Vec<Project>> {
        Ok(self.read()?.projects().to_vec())
    }

    pub fn projects_with_status(&self, status: ProjectStatus) -> StoreResult<Vec<Project>> {
        Ok(self.read()?.projects_with_status(status))
    }

    pub fn get(&self, id: &ProjectId) -> StoreResult<Option<Project>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn read(&self) -> StoreResult<Ref<'_, ProjectStore>> {
        self.inner.try_borrow().map_err(|_| {
            warn!("event=store_read module=store status=error reason=reentrant");
            StoreError::Reentrant
        })
    }

    fn write(&self) -> StoreResult<RefMut<'_, ProjectStore>> {
        self.inner.try_borrow_mut().map_err(|_| {
            warn!("event=store_write module=store status=error reason=reentrant");
            StoreError::Reentrant
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SharedProjectStore;
    use crate::model::project::ProjectStatus;
    use crate::store::project_store::StoreError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn clones_share_one_store() {
        let store = SharedProjectStore::default();
        let other = store.clone();
        other.add_project("t", "description", 1).unwrap();
        assert!(store.ptr_eq(&other));
        assert_eq!(store.snapshot().unwrap().len(), 1);
    }

    #[test]
    fn removed_listener_stops_receiving_through_any_clone() {
        let store = SharedProjectStore::default();
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        let subscription = store
            .add_listener(move |_| {
                *sink.borrow_mut() += 1;
                Ok(())
            })
            .unwrap();

        store.add_project("first", "description", 1).unwrap();
        assert!(store.clone().remove_listener(subscription).unwrap());
        store.add_project("second", "description", 1).unwrap();

        assert_eq!(*calls.borrow(), 1);
        assert!(!store.remove_listener(subscription).unwrap());
    }

    #[test]
    fn listener_mutation_is_rejected_as_reentrant() {
        let store = SharedProjectStore::default();
        let inner = store.clone();
        let observed = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&observed);
        store
            .add_listener(move |projects| {
                if projects.len() == 1 {
                    *sink.borrow_mut() = Some(inner.add_project("nested", "nested!", 1));
                }
                Ok(())
            })
            .unwrap();

        store.add_project("outer", "description", 1).unwrap();

        assert_eq!(*observed.borrow(), Some(Err(StoreError::Reentrant)));
        assert_eq!(store.projects_with_status(ProjectStatus::Active).unwrap().len(), 1);
    }
}
