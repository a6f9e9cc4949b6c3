//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! API-facing structs serialize in camelCase, matching the wire format the
//! SPA consumes (`userId`, `startTime`, ...).

pub mod availability;
pub mod dashboard;
pub mod notification;
pub mod shift;
pub mod team;
pub mod time_off;
pub mod user;
