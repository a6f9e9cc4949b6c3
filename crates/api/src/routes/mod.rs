pub mod auth;
pub mod availability;
pub mod dashboard;
pub mod health;
pub mod notification;
pub mod shift;
pub mod team;
pub mod time_off;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                login-free
/// /auth/login                   login-free
/// /auth/me                      requires auth
///
/// /users                        list, create
/// /users/{id}                   get, update, delete
///
/// /teams                        list, create
/// /teams/{id}                   get, update, delete
///
/// /shifts                       list (?userId, status, startDate, endDate), create
/// /shifts/{id}                  get, update, delete
/// /shifts/{id}/reschedule       board drop (PATCH)
///
/// /timeoff                     list (?userId, status), create
/// /timeoff/{id}                get, delete
/// /timeoff/{id}/status         approve/reject (PATCH)
///
/// /notifications                list (?unreadOnly, limit, offset)
/// /notifications/read-all       mark all read (PATCH)
/// /notifications/unread-count   unread count (GET)
/// /notifications/{id}/read      mark read (PATCH)
///
/// /availability                 list (?userId, date), upsert (PUT)
///
/// /dashboard/stats              aggregate counters (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", user::router())
        .nest("/teams", team::router())
        .nest("/shifts", shift::router())
        .nest("/timeoff", time_off::router())
        .nest("/notifications", notification::router())
        .nest("/availability", availability::router())
        .nest("/dashboard", dashboard::router())
}
