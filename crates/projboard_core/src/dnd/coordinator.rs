//! Routes drag events between roles and the store.
//!
//! # Invariants
//! - A target is released before the store is asked to move a project, so the
//!   target can itself be a store listener.
//! - A drop without a usable payload never reaches the store.

use crate::dnd::roles::{Draggable, DropTarget};
use crate::dnd::transfer::DataTransfer;
use crate::store::project_store::{MoveOutcome, StoreError, StoreResult};
use crate::store::shared::SharedProjectStore;
use log::debug;
use std::cell::RefCell;

/// Result of a drop event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Payload was absent or malformed; nothing was requested.
    NoPayload,
    /// The store handled the move request.
    Move(MoveOutcome),
}

pub struct DragDropCoordinator {
    store: SharedProjectStore,
}

impl DragDropCoordinator {
    pub fn new(store: SharedProjectStore) -> Self {
        Self { store }
    }

    pub fn drag_start<D: Draggable + ?Sized>(&self, source: &mut D, transfer: &mut DataTransfer) {
        source.handle_drag_start(transfer);
        debug!("event=drag_start module=dnd status=ok types={:?}", transfer.types());
    }

    pub fn drag_end<D: Draggable + ?Sized>(&self, source: &mut D) {
        source.handle_drag_end();
        debug!("event=drag_end module=dnd status=ok");
    }

    /// Returns whether the host should prevent the default "no drop" behavior.
    pub fn drag_over<T: DropTarget + ?Sized>(
        &self,
        target: &RefCell<T>,
        transfer: &DataTransfer,
    ) -> bool {
        match target.try_borrow_mut() {
            Ok(mut target) => target.handle_drag_over(transfer),
            Err(_) => false,
        }
    }

    pub fn drag_leave<T: DropTarget + ?Sized>(&self, target: &RefCell<T>) {
        if let Ok(mut target) = target.try_borrow_mut() {
            target.handle_drag_leave();
        }
    }

    /// Lets the target read the payload, then requests the move.
    ///
    /// # Errors
    /// - `StoreError::Reentrant` when called from inside a notification.
    /// - `StoreError::Listener` under a fail-fast listener policy.
    pub fn drop<T: DropTarget + ?Sized>(
        &self,
        target: &RefCell<T>,
        transfer: &DataTransfer,
    ) -> StoreResult<DropOutcome> {
        let request = target
            .try_borrow_mut()
            .map_err(|_| StoreError::Reentrant)?
            .handle_drop(transfer);

        let Some(request) = request else {
            debug!("event=drop module=dnd status=noop reason=no_payload");
            return Ok(DropOutcome::NoPayload);
        };

        let outcome = self
            .store
            .move_project(&request.project_id, request.target)?;
        debug!(
            "event=drop module=dnd status=ok project_id={} target={} outcome={outcome:?}",
            request.project_id, request.target
        );
        Ok(DropOutcome::Move(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::{DragDropCoordinator, DropOutcome};
    use crate::dnd::roles::{DropState, DropTarget, MoveRequest};
    use crate::dnd::transfer::{read_project_id, DataTransfer, TEXT_PLAIN};
    use crate::model::project::ProjectStatus;
    use crate::store::project_store::MoveOutcome;
    use crate::store::shared::SharedProjectStore;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FinishedBin {
        state: DropState,
    }

    impl DropTarget for FinishedBin {
        fn target_status(&self) -> ProjectStatus {
            ProjectStatus::Finished
        }

        fn handle_drag_over(&mut self, _transfer: &DataTransfer) -> bool {
            self.state = DropState::Armed;
            true
        }

        fn handle_drop(&mut self, transfer: &DataTransfer) -> Option<MoveRequest> {
            self.state = DropState::Idle;
            read_project_id(transfer).map(|project_id| MoveRequest {
                project_id,
                target: self.target_status(),
            })
        }

        fn handle_drag_leave(&mut self) {
            self.state = DropState::Idle;
        }

        fn drop_state(&self) -> DropState {
            self.state
        }
    }

    #[test]
    fn drop_without_payload_skips_store() {
        let coordinator = DragDropCoordinator::new(SharedProjectStore::default());
        let target = RefCell::new(FinishedBin::default());
        let outcome = coordinator.drop(&target, &DataTransfer::new()).unwrap();
        assert_eq!(outcome, DropOutcome::NoPayload);
    }

    #[test]
    fn drop_with_foreign_id_is_a_store_noop() {
        let coordinator = DragDropCoordinator::new(SharedProjectStore::default());
        let target = RefCell::new(FinishedBin::default());
        let transfer = DataTransfer::from_entries([(TEXT_PLAIN, "nonexistent-id")]);
        let outcome = coordinator.drop(&target, &transfer).unwrap();
        assert_eq!(outcome, DropOutcome::Move(MoveOutcome::NotFound));
    }

    #[test]
    fn drop_moves_known_project() {
        let store = SharedProjectStore::default();
        let id = store.add_project("t", "description", 1).unwrap();
        let coordinator = DragDropCoordinator::new(store.clone());
        let target = RefCell::new(FinishedBin::default());

        coordinator.drag_over(&target, &DataTransfer::from_entries([(TEXT_PLAIN, id.as_str())]));
        assert_eq!(target.borrow().drop_state(), DropState::Armed);

        let transfer = DataTransfer::from_entries([(TEXT_PLAIN, id.as_str())]);
        let outcome = coordinator.drop(&target, &transfer).unwrap();
        assert_eq!(outcome, DropOutcome::Move(MoveOutcome::Moved));
        assert_eq!(target.borrow().drop_state(), DropState::Idle);
        assert_eq!(store.get(&id).unwrap().unwrap().status, ProjectStatus::Finished);
    }
}
