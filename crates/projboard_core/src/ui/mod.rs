//! Screen components and the rendering collaborator contract.
//!
//! # Responsibility
//! - Turn store snapshots into element trees on a `RenderSurface`.
//! - Host the form and list components that feed the store and coordinator.
//!
//! # Invariants
//! - Components only read projects; every mutation goes through the store.

pub mod component;
pub mod project_input;
pub mod project_item;
pub mod project_list;
pub mod surface;
