//! Domain model for the project board.
//!
//! # Responsibility
//! - Define the canonical project record shared by store, views and bridges.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are never deleted; only `status` changes after creation.

pub mod project;
