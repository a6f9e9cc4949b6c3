//! Route definitions for the `/availability` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::availability;
use crate::state::AppState;

/// Routes mounted at `/availability`.
///
/// ```text
/// GET /  -> list (?userId, date)
/// PUT /  -> upsert (one record per user+date)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(availability::list).put(availability::upsert))
}
