//! Per-day availability model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use shiftmaster_core::types::{DbId, Timestamp};

/// A row from the `availability` table. At most one per (user, date).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub id: DbId,
    pub user_id: DbId,
    pub date: NaiveDate,
    pub status: String,
    /// Optional `[{"start": "09:00", "end": "17:00"}, ...]` ranges.
    pub time_ranges: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

/// DTO for writing availability. A write for an existing (user, date)
/// replaces the old record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAvailability {
    pub user_id: DbId,
    pub date: NaiveDate,
    pub status: String,
    pub time_ranges: Option<serde_json::Value>,
}
