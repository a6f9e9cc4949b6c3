//! Handlers for the `/availability` resource.
//!
//! Availability is written upsert-style: one record per (user, date), where
//! a second write for the same day replaces the first.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use shiftmaster_core::error::CoreError;
use shiftmaster_core::statuses::ALL_AVAILABILITY_STATUSES;
use shiftmaster_core::types::DbId;
use shiftmaster_db::models::availability::{Availability, UpsertAvailability};
use shiftmaster_db::repositories::AvailabilityRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters accepted by `GET /api/availability`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAvailabilityQuery {
    pub user_id: Option<DbId>,
    pub date: Option<NaiveDate>,
}

/// GET /api/availability
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListAvailabilityQuery>,
) -> AppResult<Json<Vec<Availability>>> {
    let records = AvailabilityRepo::list(&state.pool, query.user_id, query.date).await?;
    Ok(Json(records))
}

/// PUT /api/availability
pub async fn upsert(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<UpsertAvailability>,
) -> AppResult<Json<Availability>> {
    if !ALL_AVAILABILITY_STATUSES.contains(&input.status.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown availability status: {}",
            input.status
        ))));
    }
    let record = AvailabilityRepo::upsert(&state.pool, &input).await?;
    Ok(Json(record))
}
