//! Core logic for the project board.
//! This crate is the single source of truth for board state and its invariants.

pub mod board;
pub mod config;
pub mod dnd;
pub mod logging;
pub mod model;
pub mod store;
pub mod ui;
pub mod validation;

pub use board::{ProjectBoard, APP_HOST_ID};
pub use config::{BoardConfig, ConfigError, FieldRule, ListenerFailurePolicy};
pub use dnd::coordinator::{DragDropCoordinator, DropOutcome};
pub use dnd::roles::{DragState, Draggable, DropState, DropTarget, MoveRequest};
pub use dnd::transfer::{DataTransfer, DropEffect, TEXT_PLAIN};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{Project, ProjectDraft, ProjectId, ProjectStatus};
pub use store::project_store::{
    ListenerError, MoveOutcome, ProjectListener, ProjectStore, StoreError, StoreResult,
    SubscriptionId,
};
pub use store::shared::SharedProjectStore;
pub use ui::project_input::{FormField, InputRejection, SubmitError, INVALID_INPUT_ALERT};
pub use ui::surface::{Element, ElementKind, InsertPosition, MemorySurface, RenderSurface, SharedSurface};
pub use validation::validator::{validate, Validatable, ValidatableValue};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
