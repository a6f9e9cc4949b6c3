//! Handlers for the `/timeoff` resource.
//!
//! Requests are created by any authenticated user and resolved (approved or
//! rejected) by managers. Resolution is terminal and notifies the requester.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use shiftmaster_core::error::CoreError;
use shiftmaster_core::statuses::{is_timeoff_resolution, ALL_TIMEOFF_TYPES};
use shiftmaster_core::types::DbId;
use shiftmaster_db::models::time_off::{CreateTimeOffRequest, TimeOffRequest, TimeOffWithUser};
use shiftmaster_db::models::user::UserSummary;
use shiftmaster_db::repositories::{TimeOffRepo, UserRepo};
use shiftmaster_events::{DomainEvent, Notifier};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::state::AppState;

/// Query parameters accepted by `GET /api/timeoff`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTimeOffQuery {
    pub user_id: Option<DbId>,
    pub status: Option<String>,
}

/// Request body for `PATCH /api/timeoff/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    /// `approved` or `rejected`.
    pub status: String,
}

/// GET /api/timeoff
///
/// Newest first; each entry carries a minimal projection of the requester.
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListTimeOffQuery>,
) -> AppResult<Json<Vec<TimeOffWithUser>>> {
    let requests = TimeOffRepo::list(&state.pool, query.user_id, query.status.as_deref()).await?;

    let mut ids: Vec<DbId> = requests.iter().map(|r| r.user_id).collect();
    ids.sort_unstable();
    ids.dedup();
    let users: HashMap<DbId, UserSummary> = UserRepo::summaries_by_ids(&state.pool, &ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    let listing = requests
        .into_iter()
        .map(|request| {
            let user = users.get(&request.user_id).cloned();
            TimeOffWithUser { request, user }
        })
        .collect();
    Ok(Json(listing))
}

/// GET /api/timeoff/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TimeOffRequest>> {
    let request = TimeOffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TimeOffRequest",
            id,
        }))?;
    Ok(Json(request))
}

/// POST /api/timeoff
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateTimeOffRequest>,
) -> AppResult<(StatusCode, Json<TimeOffRequest>)> {
    if !ALL_TIMEOFF_TYPES.contains(&input.kind.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown time-off type: {}",
            input.kind
        ))));
    }
    if input.end_date < input.start_date {
        return Err(AppError::Core(CoreError::Validation(
            "End date must not precede start date".into(),
        )));
    }

    let request = TimeOffRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// PATCH /api/timeoff/{id}/status
///
/// Approve or reject a pending request, stamping the reviewer from the
/// caller's claims and notifying the requester.
pub async fn resolve(
    State(state): State<AppState>,
    RequireManager(reviewer): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<ResolveRequest>,
) -> AppResult<Json<TimeOffRequest>> {
    if !is_timeoff_resolution(&input.status) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Status must be approved or rejected, got: {}",
            input.status
        ))));
    }

    // The repo only touches rows still pending, so a concurrent double
    // resolution cannot overwrite the first outcome.
    let resolved = TimeOffRepo::resolve(&state.pool, id, &input.status, reviewer.user_id).await?;

    let request = match resolved {
        Some(request) => request,
        None => {
            // Distinguish a missing request from an already-resolved one.
            return match TimeOffRepo::find_by_id(&state.pool, id).await? {
                Some(_) => Err(AppError::Core(CoreError::Conflict(
                    "Request has already been resolved".into(),
                ))),
                None => Err(AppError::Core(CoreError::NotFound {
                    entity: "TimeOffRequest",
                    id,
                })),
            };
        }
    };

    Notifier::handle(
        &state.pool,
        &DomainEvent::TimeOffResolved {
            request_id: request.id,
            user_id: request.user_id,
            status: request.status.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
        },
    )
    .await?;

    Ok(Json(request))
}

/// DELETE /api/timeoff/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TimeOffRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TimeOffRequest",
            id,
        }))
    }
}
