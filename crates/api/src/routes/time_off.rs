//! Route definitions for the `/timeoff` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::time_off;
use crate::state::AppState;

/// Routes mounted at `/timeoff`.
///
/// ```text
/// GET    /              -> list (?userId, status)
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// DELETE /{id}          -> delete
/// PATCH  /{id}/status   -> resolve (manager, notifies requester)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(time_off::list).post(time_off::create))
        .route(
            "/{id}",
            get(time_off::get_by_id).delete(time_off::delete),
        )
        .route("/{id}/status", patch(time_off::resolve))
}
