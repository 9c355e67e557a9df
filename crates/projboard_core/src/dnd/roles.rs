//! Draggable and drop-target roles.
//!
//! Sources and targets are created independently and never reference each
//! other; the data transfer is their only coupling.

use crate::dnd::transfer::DataTransfer;
use crate::model::project::{ProjectId, ProjectStatus};

/// Per-item drag lifecycle. Cancelling a drag is reported as a drag end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Per-target hover lifecycle. `Armed` is a visual affordance only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropState {
    #[default]
    Idle,
    Armed,
}

/// Status transition requested by a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub project_id: ProjectId,
    pub target: ProjectStatus,
}

/// Role of an item that can be picked up.
pub trait Draggable {
    /// Writes this item's identity into the payload.
    fn handle_drag_start(&mut self, transfer: &mut DataTransfer);
    /// Visual cleanup only; never changes store state.
    fn handle_drag_end(&mut self);
    fn drag_state(&self) -> DragState;
}

/// Role of a list that accepts dropped items.
pub trait DropTarget {
    /// Status assigned to projects dropped here.
    fn target_status(&self) -> ProjectStatus;
    /// Returns `true` when the drop should be allowed (default prevented).
    fn handle_drag_over(&mut self, transfer: &DataTransfer) -> bool;
    /// Disarms and returns the transition to request, if the payload is usable.
    fn handle_drop(&mut self, transfer: &DataTransfer) -> Option<MoveRequest>;
    fn handle_drag_leave(&mut self);
    fn drop_state(&self) -> DropState;
}
