//! Status list component.
//!
//! # Responsibility
//! - Keep the cards for one status in sync with store snapshots.
//! - Act as the drop target that requests moves into its status.
//!
//! # Invariants
//! - `assigned` holds only projects whose status equals the list's status.
//! - The `droppable` class is set exactly while the list is armed.

use crate::dnd::roles::{DropState, DropTarget, MoveRequest};
use crate::dnd::transfer::{accepts_project_payload, read_project_id, DataTransfer};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::{ListenerError, ProjectListener, StoreResult};
use crate::store::shared::SharedProjectStore;
use crate::ui::component::Component;
use crate::ui::project_item::ProjectItem;
use crate::ui::surface::{Element, ElementKind, SharedSurface};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// CSS class marking an armed drop target.
pub const DROPPABLE_CLASS: &str = "droppable";

pub struct ProjectListView {
    status: ProjectStatus,
    assigned: Vec<ProjectItem>,
    drop_state: DropState,
    surface: SharedSurface,
}

impl ProjectListView {
    pub fn new(status: ProjectStatus, surface: SharedSurface) -> Self {
        Self {
            status,
            assigned: Vec::new(),
            drop_state: DropState::Idle,
            surface,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Section element id, e.g. `active-projects`.
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.status)
    }

    /// Item container id, e.g. `active-projects-list`.
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    /// Section heading, e.g. `ACTIVE PROJECTS`.
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_uppercase())
    }

    pub fn assigned(&self) -> &[ProjectItem] {
        &self.assigned
    }

    pub fn projects(&self) -> Vec<Project> {
        self.assigned
            .iter()
            .map(|item| item.project().clone())
            .collect()
    }

    pub fn item_mut(&mut self, id: &ProjectId) -> Option<&mut ProjectItem> {
        self.assigned.iter_mut().find(|item| item.id() == id)
    }

    fn render_projects(&self) -> Result<(), ListenerError> {
        let cards = self.assigned.iter().map(ProjectItem::to_element).collect();
        let mut surface = self
            .surface
            .try_borrow_mut()
            .map_err(|_| ListenerError::failed("render surface is busy"))?;
        surface.replace_children(&self.list_id(), cards);
        Ok(())
    }

    fn set_droppable(&mut self, armed: bool) {
        self.drop_state = if armed {
            DropState::Armed
        } else {
            DropState::Idle
        };
        if let Ok(mut surface) = self.surface.try_borrow_mut() {
            surface.set_class(&self.list_id(), DROPPABLE_CLASS, armed);
        }
    }
}

impl Component for ProjectListView {
    fn build_element(&self) -> Element {
        Element::new(self.element_id(), ElementKind::ListSection).with_heading(self.heading())
    }

    fn configure(this: &Rc<RefCell<Self>>, store: &SharedProjectStore) -> StoreResult<()> {
        store.add_shared_listener(Rc::clone(this))?;
        Ok(())
    }

    fn render_content(&self) {
        let body = Element::new(self.list_id(), ElementKind::ListBody);
        self.surface
            .borrow_mut()
            .replace_children(&self.element_id(), vec![body]);
    }
}

impl ProjectListener for ProjectListView {
    fn on_projects_changed(&mut self, projects: &[Project]) -> Result<(), ListenerError> {
        self.assigned = projects
            .iter()
            .filter(|project| project.status == self.status)
            .cloned()
            .map(ProjectItem::new)
            .collect();
        debug!(
            "event=list_render module=ui status=ok list={} items={}",
            self.status,
            self.assigned.len()
        );
        self.render_projects()
    }
}

impl DropTarget for ProjectListView {
    fn target_status(&self) -> ProjectStatus {
        self.status
    }

    fn handle_drag_over(&mut self, transfer: &DataTransfer) -> bool {
        if !accepts_project_payload(transfer) {
            return false;
        }
        if self.drop_state == DropState::Idle {
            self.set_droppable(true);
        }
        true
    }

    fn handle_drop(&mut self, transfer: &DataTransfer) -> Option<MoveRequest> {
        self.set_droppable(false);
        read_project_id(transfer).map(|project_id| MoveRequest {
            project_id,
            target: self.status,
        })
    }

    fn handle_drag_leave(&mut self) {
        self.set_droppable(false);
    }

    fn drop_state(&self) -> DropState {
        self.drop_state
    }
}
