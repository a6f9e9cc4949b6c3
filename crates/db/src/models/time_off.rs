//! Time-off request entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use shiftmaster_core::types::{DbId, Timestamp};

use crate::models::user::UserSummary;

/// A row from the `time_off_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequest {
    pub id: DbId,
    pub user_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Request category: vacation, sick, personal, other.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub reviewed_by: Option<DbId>,
    pub reviewed_at: Option<Timestamp>,
    pub reason: Option<String>,
    pub created_at: Timestamp,
}

/// Listing entry enriched with a minimal projection of the requester.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffWithUser {
    #[serde(flatten)]
    pub request: TimeOffRequest,
    pub user: Option<UserSummary>,
}

/// DTO for creating a new time-off request. Status always starts `pending`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeOffRequest {
    pub user_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub reason: Option<String>,
}
