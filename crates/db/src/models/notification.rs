//! Notification entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use shiftmaster_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub message: String,
    /// Notification category: shift, timeoff, swap, schedule, general.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub read: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a notification. Always starts unread.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotification {
    pub user_id: DbId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}
