//! Route definitions for the `/teams` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

/// Routes mounted at `/teams`.
///
/// ```text
/// GET    /      -> list (with member counts)
/// POST   /      -> create (manager)
/// GET    /{id}  -> get_by_id (with member roster)
/// PUT    /{id}  -> update (manager)
/// DELETE /{id}  -> delete (manager)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(team::list).post(team::create))
        .route(
            "/{id}",
            get(team::get_by_id).put(team::update).delete(team::delete),
        )
}
