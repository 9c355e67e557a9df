//! Board composition root.
//!
//! # Responsibility
//! - Create the one store of a running board and inject it into components.
//! - Translate host events (submit, drag, drop) into component calls.
//!
//! # Invariants
//! - Exactly one `ProjectStore` exists per `ProjectBoard`.
//! - List views are registered as listeners exactly once.

use crate::config::BoardConfig;
use crate::dnd::coordinator::{DragDropCoordinator, DropOutcome};
use crate::dnd::transfer::DataTransfer;
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::{ProjectStore, StoreResult};
use crate::store::shared::SharedProjectStore;
use crate::ui::component::mount;
use crate::ui::project_input::{ProjectInput, SubmitError};
use crate::ui::project_list::ProjectListView;
use crate::ui::surface::{InsertPosition, SharedSurface};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

/// Host element every screen component attaches to.
pub const APP_HOST_ID: &str = "app";

pub struct ProjectBoard {
    store: SharedProjectStore,
    input: Rc<RefCell<ProjectInput>>,
    active: Rc<RefCell<ProjectListView>>,
    finished: Rc<RefCell<ProjectListView>>,
    coordinator: DragDropCoordinator,
}

impl ProjectBoard {
    /// Builds and mounts the form and both lists onto `surface`.
    pub fn new(config: BoardConfig, surface: SharedSurface) -> StoreResult<Self> {
        let store = SharedProjectStore::new(ProjectStore::new(config.listener_failure));

        let input = mount(
            ProjectInput::new(config, store.clone(), Rc::clone(&surface)),
            &surface,
            APP_HOST_ID,
            InsertPosition::AtStart,
            &store,
        )?;
        let active = mount(
            ProjectListView::new(ProjectStatus::Active, Rc::clone(&surface)),
            &surface,
            APP_HOST_ID,
            InsertPosition::AtEnd,
            &store,
        )?;
        let finished = mount(
            ProjectListView::new(ProjectStatus::Finished, Rc::clone(&surface)),
            &surface,
            APP_HOST_ID,
            InsertPosition::AtEnd,
            &store,
        )?;

        info!("event=board_init module=board status=ok");
        Ok(Self {
            coordinator: DragDropCoordinator::new(store.clone()),
            store,
            input,
            active,
            finished,
        })
    }

    pub fn store(&self) -> &SharedProjectStore {
        &self.store
    }

    pub fn input(&self) -> &Rc<RefCell<ProjectInput>> {
        &self.input
    }

    pub fn list(&self, status: ProjectStatus) -> &Rc<RefCell<ProjectListView>> {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Types the three fields into the form and submits it.
    pub fn submit(
        &self,
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<ProjectId, SubmitError> {
        let mut input = self.input.borrow_mut();
        input.set_title(title);
        input.set_description(description);
        input.set_people(people);
        input.submit()
    }

    /// Starts dragging the card for `id`; `None` when no list shows it.
    pub fn begin_drag(&self, id: &ProjectId) -> Option<DataTransfer> {
        for status in [ProjectStatus::Active, ProjectStatus::Finished] {
            let Ok(mut list) = self.list(status).try_borrow_mut() else {
                continue;
            };
            if let Some(item) = list.item_mut(id) {
                let mut transfer = DataTransfer::new();
                self.coordinator.drag_start(item, &mut transfer);
                return Some(transfer);
            }
        }
        None
    }

    /// Ends a drag (drop, cancel or release outside any list).
    pub fn end_drag(&self, id: &ProjectId) {
        for status in [ProjectStatus::Active, ProjectStatus::Finished] {
            let Ok(mut list) = self.list(status).try_borrow_mut() else {
                continue;
            };
            if let Some(item) = list.item_mut(id) {
                self.coordinator.drag_end(item);
                return;
            }
        }
    }

    pub fn drag_over(&self, status: ProjectStatus, transfer: &DataTransfer) -> bool {
        let target: &RefCell<ProjectListView> = self.list(status);
        self.coordinator.drag_over(target, transfer)
    }

    pub fn drag_leave(&self, status: ProjectStatus) {
        let target: &RefCell<ProjectListView> = self.list(status);
        self.coordinator.drag_leave(target);
    }

    pub fn drop(&self, status: ProjectStatus, transfer: &DataTransfer) -> StoreResult<DropOutcome> {
        let target: &RefCell<ProjectListView> = self.list(status);
        self.coordinator.drop(target, transfer)
    }

    /// Projects currently rendered in the list for `status`.
    pub fn list_projects(&self, status: ProjectStatus) -> Vec<Project> {
        self.list(status).borrow().projects()
    }
}
