//! Shift entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use shiftmaster_core::types::{DbId, Timestamp};

use crate::models::user::UserView;

/// A row from the `shifts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: DbId,
    pub user_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub status: String,
    pub notes: Option<String>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Shift listing entry enriched with the owning user (password stripped).
///
/// `user` is `None` when the owner has since been deleted; shifts survive
/// their user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftWithUser {
    #[serde(flatten)]
    pub shift: Shift,
    pub user: Option<UserView>,
}

/// DTO for creating a new shift. `createdBy` is stamped from the caller's
/// claim, not taken from the body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShift {
    pub user_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    /// Defaults to `scheduled`.
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing shift. All fields are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShift {
    pub user_id: Option<DbId>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Equality/range filters accepted by the shift listing.
#[derive(Debug, Default)]
pub struct ShiftFilter {
    pub user_id: Option<DbId>,
    pub status: Option<String>,
    /// Inclusive lower bound on `start_time`.
    pub start_from: Option<Timestamp>,
    /// Inclusive upper bound on `start_time`.
    pub start_to: Option<Timestamp>,
}
