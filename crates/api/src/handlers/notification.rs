//! Handlers for the `/notifications` resource.
//!
//! All operations are scoped to the authenticated user; there is no way to
//! read or mutate another user's notifications.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shiftmaster_core::error::CoreError;
use shiftmaster_core::types::DbId;
use shiftmaster_db::models::notification::Notification;
use shiftmaster_db::repositories::NotificationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Default page size for the notification listing.
const DEFAULT_LIMIT: i64 = 50;

/// Hard cap on the page size.
const MAX_LIMIT: i64 = 100;

/// Query parameters accepted by `GET /api/notifications`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotificationsQuery {
    pub unread_only: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response body for `PATCH /api/notifications/read-all`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAllReadResponse {
    pub marked_read: u64,
}

/// Response body for `GET /api/notifications/unread-count`.
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

/// GET /api/notifications
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<ListNotificationsQuery>,
) -> AppResult<Json<Vec<Notification>>> {
    let unread_only = query.unread_only.unwrap_or(false);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = query.offset.unwrap_or(0).max(0);

    let notifications =
        NotificationRepo::list_for_user(&state.pool, auth_user.user_id, unread_only, limit, offset)
            .await?;
    Ok(Json(notifications))
}

/// PATCH /api/notifications/{id}/read
///
/// Idempotent: marking an already-read notification succeeds again.
pub async fn mark_read(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let found = NotificationRepo::mark_read(&state.pool, id, auth_user.user_id).await?;
    if found {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }))
    }
}

/// PATCH /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<MarkAllReadResponse>> {
    let marked_read = NotificationRepo::mark_all_read(&state.pool, auth_user.user_id).await?;
    Ok(Json(MarkAllReadResponse { marked_read }))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UnreadCountResponse>> {
    let count = NotificationRepo::unread_count(&state.pool, auth_user.user_id).await?;
    Ok(Json(UnreadCountResponse { count }))
}
