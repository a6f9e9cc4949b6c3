//! Team entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use shiftmaster_core::types::{DbId, Timestamp};

use crate::models::user::UserView;

/// A row from the `teams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Team listing entry: the team plus how many users belong to it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamWithCount {
    #[serde(flatten)]
    pub team: Team,
    pub member_count: i64,
}

/// Team detail: the team plus its member roster (passwords stripped).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetail {
    #[serde(flatten)]
    pub team: Team,
    pub members: Vec<UserView>,
}

/// DTO for creating a new team.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeam {
    pub name: String,
    /// Hex RGB, `#rrggbb`. Validated at the boundary and by a DB CHECK.
    pub color: String,
    pub description: Option<String>,
}

/// DTO for updating an existing team. All fields are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeam {
    pub name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
}
