//! Handlers for the `/shifts` resource.
//!
//! Creating a shift also writes an assignment notification for the shift's
//! owner (see `shiftmaster_events`). The reschedule endpoint backs the
//! drag-and-drop board: it moves a shift to a new (user, day) cell while
//! keeping its clock time.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use shiftmaster_core::error::CoreError;
use shiftmaster_core::scheduling::reanchor;
use shiftmaster_core::statuses::ALL_SHIFT_STATUSES;
use shiftmaster_core::types::{DbId, Timestamp};
use shiftmaster_db::models::shift::{CreateShift, Shift, ShiftFilter, ShiftWithUser, UpdateShift};
use shiftmaster_db::models::user::UserView;
use shiftmaster_db::repositories::{ShiftRepo, UserRepo};
use shiftmaster_events::{DomainEvent, Notifier};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::state::AppState;

/// Query parameters accepted by `GET /api/shifts`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListShiftsQuery {
    pub user_id: Option<DbId>,
    pub status: Option<String>,
    /// Inclusive lower bound on shift start.
    pub start_date: Option<Timestamp>,
    /// Inclusive upper bound on shift start.
    pub end_date: Option<Timestamp>,
}

/// Request body for `PATCH /api/shifts/{id}/reschedule`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    /// The user receiving the shift (may be the current owner).
    pub user_id: DbId,
    /// The calendar day the shift was dropped onto.
    pub date: NaiveDate,
}

/// GET /api/shifts
///
/// Each entry is enriched with the owning user; `user` is null when the
/// owner has since been deleted.
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListShiftsQuery>,
) -> AppResult<Json<Vec<ShiftWithUser>>> {
    let filter = ShiftFilter {
        user_id: query.user_id,
        status: query.status,
        start_from: query.start_date,
        start_to: query.end_date,
    };
    let shifts = ShiftRepo::list(&state.pool, &filter).await?;
    let users = user_lookup(&state, &shifts).await?;

    let listing = shifts
        .into_iter()
        .map(|shift| {
            let user = users.get(&shift.user_id).cloned();
            ShiftWithUser { shift, user }
        })
        .collect();
    Ok(Json(listing))
}

/// GET /api/shifts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ShiftWithUser>> {
    let shift = ShiftRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shift", id }))?;
    let user = UserRepo::find_by_id(&state.pool, shift.user_id)
        .await?
        .map(UserView::from);
    Ok(Json(ShiftWithUser { shift, user }))
}

/// POST /api/shifts
///
/// Creates the shift and notifies its owner.
pub async fn create(
    State(state): State<AppState>,
    RequireManager(manager): RequireManager,
    Json(input): Json<CreateShift>,
) -> AppResult<(StatusCode, Json<Shift>)> {
    if let Some(status) = &input.status {
        validate_status(status)?;
    }

    let shift = ShiftRepo::create(&state.pool, &input, Some(manager.user_id)).await?;

    Notifier::handle(
        &state.pool,
        &DomainEvent::ShiftCreated {
            shift_id: shift.id,
            user_id: shift.user_id,
            start_time: shift.start_time,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(shift)))
}

/// PUT /api/shifts/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShift>,
) -> AppResult<Json<Shift>> {
    if let Some(status) = &input.status {
        validate_status(status)?;
    }
    let shift = ShiftRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shift", id }))?;
    Ok(Json(shift))
}

/// PATCH /api/shifts/{id}/reschedule
///
/// Board drop: reassign the shift to `userId` and re-anchor both endpoints
/// onto `date`, keeping the original clock time.
pub async fn reschedule(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<RescheduleRequest>,
) -> AppResult<Json<Shift>> {
    let shift = ShiftRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shift", id }))?;

    let (start_time, end_time) = reanchor(shift.start_time, shift.end_time, input.date);

    let updated = ShiftRepo::reschedule(&state.pool, id, input.user_id, start_time, end_time)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shift", id }))?;
    Ok(Json(updated))
}

/// DELETE /api/shifts/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ShiftRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Shift", id }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build an id-keyed map of the users owning `shifts`.
async fn user_lookup(
    state: &AppState,
    shifts: &[Shift],
) -> Result<HashMap<DbId, UserView>, AppError> {
    let mut ids: Vec<DbId> = shifts.iter().map(|s| s.user_id).collect();
    ids.sort_unstable();
    ids.dedup();

    let users = UserRepo::find_by_ids(&state.pool, &ids).await?;
    Ok(users
        .into_iter()
        .map(|u| (u.id, UserView::from(u)))
        .collect())
}

fn validate_status(status: &str) -> Result<(), AppError> {
    if !ALL_SHIFT_STATUSES.contains(&status) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown shift status: {status}"
        ))));
    }
    Ok(())
}
