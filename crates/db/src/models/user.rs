//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use shiftmaster_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`UserView`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    /// `None` for SSO users that never set a local password.
    pub password_hash: Option<String>,
    pub role: String,
    pub team_id: Option<DbId>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub team_id: Option<DbId>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            team_id: user.team_id,
            avatar_url: user.avatar_url,
            phone: user.phone,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Minimal user projection joined into time-off listings.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    /// Already-hashed password; set by the auth layer, never by clients.
    #[serde(skip)]
    pub password_hash: Option<String>,
    /// Defaults to `Employee` when omitted.
    #[serde(default = "default_role")]
    pub role: String,
    pub team_id: Option<DbId>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
}

fn default_role() -> String {
    shiftmaster_core::roles::ROLE_EMPLOYEE.to_string()
}

/// DTO for updating an existing user. All fields are optional; the id and
/// password are not patchable through this type.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub team_id: Option<DbId>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
}
