//! Reactive project state.
//!
//! # Responsibility
//! - Own the project collection and every mutation of it.
//! - Fan out full snapshots to registered listeners after each change.
//!
//! # Invariants
//! - Listeners observe `&[Project]` only; they cannot mutate store state.
//! - Notification is synchronous and ordered by registration.
//! - Reentrant mutation from inside a listener is rejected, never nested.

pub mod project_store;
pub mod shared;
