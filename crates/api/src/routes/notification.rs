//! Route definitions for the `/notifications` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`. All scoped to the authenticated user.
///
/// ```text
/// GET   /               -> list (?unreadOnly, limit, offset)
/// PATCH /read-all       -> mark_all_read
/// GET   /unread-count   -> unread_count
/// PATCH /{id}/read      -> mark_read (idempotent)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list))
        .route("/read-all", patch(notification::mark_all_read))
        .route("/unread-count", get(notification::unread_count))
        .route("/{id}/read", patch(notification::mark_read))
}
