//! Input validation predicates.
//!
//! # Responsibility
//! - Gate store mutation behind fixed required/length/range checks.
//!
//! # Invariants
//! - Validation is pure; it never touches store or surface state.

pub mod validator;
