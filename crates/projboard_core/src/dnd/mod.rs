//! Drag-and-drop handoff between project cards and status lists.
//!
//! # Responsibility
//! - Model the platform drag data channel and its one-field payload.
//! - Define the draggable/drop-target roles and route their events.
//!
//! # Invariants
//! - The payload carries only the project id as `text/plain`.
//! - Drop targets never validate ids; unknown ids become store no-ops.

pub mod coordinator;
pub mod roles;
pub mod transfer;
