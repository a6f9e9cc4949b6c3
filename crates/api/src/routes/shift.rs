//! Route definitions for the `/shifts` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::shift;
use crate::state::AppState;

/// Routes mounted at `/shifts`.
///
/// ```text
/// GET    /                  -> list (?userId, status, startDate, endDate)
/// POST   /                  -> create (manager, notifies owner)
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update (manager)
/// DELETE /{id}              -> delete (manager)
/// PATCH  /{id}/reschedule   -> reschedule (manager, board drop)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(shift::list).post(shift::create))
        .route(
            "/{id}",
            get(shift::get_by_id)
                .put(shift::update)
                .delete(shift::delete),
        )
        .route("/{id}/reschedule", patch(shift::reschedule))
}
