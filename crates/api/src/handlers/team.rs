//! Handlers for the `/teams` resource.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shiftmaster_core::color::is_hex_color;
use shiftmaster_core::error::CoreError;
use shiftmaster_core::types::DbId;
use shiftmaster_db::models::team::{CreateTeam, Team, TeamDetail, TeamWithCount, UpdateTeam};
use shiftmaster_db::models::user::UserView;
use shiftmaster_db::repositories::{TeamRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::state::AppState;

/// GET /api/teams
///
/// Each entry carries the number of users currently assigned to the team.
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<TeamWithCount>>> {
    let teams = TeamRepo::list(&state.pool).await?;
    let counts: HashMap<DbId, i64> = TeamRepo::member_counts(&state.pool)
        .await?
        .into_iter()
        .collect();

    let listing = teams
        .into_iter()
        .map(|team| {
            let member_count = counts.get(&team.id).copied().unwrap_or(0);
            TeamWithCount { team, member_count }
        })
        .collect();
    Ok(Json(listing))
}

/// GET /api/teams/{id}
///
/// Returns the team together with its member roster.
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TeamDetail>> {
    let team = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Team", id }))?;

    let members = UserRepo::list(&state.pool, Some(id), None)
        .await?
        .into_iter()
        .map(UserView::from)
        .collect();

    Ok(Json(TeamDetail { team, members }))
}

/// POST /api/teams
pub async fn create(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Json(input): Json<CreateTeam>,
) -> AppResult<(StatusCode, Json<Team>)> {
    validate_color(&input.color)?;
    let team = TeamRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// PUT /api/teams/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeam>,
) -> AppResult<Json<Team>> {
    if let Some(color) = &input.color {
        validate_color(color)?;
    }
    let team = TeamRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Team", id }))?;
    Ok(Json(team))
}

/// DELETE /api/teams/{id}
///
/// Members keep their (now dangling) team assignment.
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TeamRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Team", id }))
    }
}

fn validate_color(color: &str) -> Result<(), AppError> {
    if !is_hex_color(color) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Color must be #rrggbb, got: {color}"
        ))));
    }
    Ok(())
}
