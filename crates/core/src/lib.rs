//! Shared domain types and pure domain logic for ShiftMaster.
//!
//! - [`types`] -- id and timestamp aliases used by every crate.
//! - [`error`] -- the domain error taxonomy.
//! - [`roles`] / [`statuses`] -- the closed vocabularies of the data model.
//! - [`scheduling`] -- the shift re-anchoring transform and week windowing.
//! - [`color`] -- team color validation.

pub mod color;
pub mod error;
pub mod roles;
pub mod scheduling;
pub mod statuses;
pub mod types;
