//! Project card.

use crate::dnd::roles::{DragState, Draggable};
use crate::dnd::transfer::{write_project_id, DataTransfer};
use crate::model::project::{Project, ProjectId};
use crate::ui::surface::{Element, ElementKind};

/// Card view of one project snapshot; draggable between lists.
#[derive(Debug, Clone)]
pub struct ProjectItem {
    project: Project,
    drag_state: DragState,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            drag_state: DragState::Idle,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn id(&self) -> &ProjectId {
        &self.project.id
    }

    /// `"1 person"` or `"N persons"`.
    pub fn persons(&self) -> String {
        persons_label(self.project.people)
    }

    pub fn to_element(&self) -> Element {
        Element::new(self.project.id.as_str(), ElementKind::Card)
            .with_heading(self.project.title.clone())
            .with_subheading(format!("{} assigned", self.persons()))
            .with_body(self.project.description.clone())
            .draggable()
    }
}

pub fn persons_label(people: u32) -> String {
    if people == 1 {
        "1 person".to_string()
    } else {
        format!("{people} persons")
    }
}

impl Draggable for ProjectItem {
    fn handle_drag_start(&mut self, transfer: &mut DataTransfer) {
        write_project_id(transfer, &self.project.id);
        self.drag_state = DragState::Dragging;
    }

    fn handle_drag_end(&mut self) {
        self.drag_state = DragState::Idle;
    }

    fn drag_state(&self) -> DragState {
        self.drag_state
    }
}
