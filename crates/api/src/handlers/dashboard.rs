//! Handler for the dashboard stats endpoint.

use axum::extract::State;
use axum::Json;
use shiftmaster_core::scheduling::{day_bounds, week_bounds};
use shiftmaster_db::models::dashboard::DashboardStats;
use shiftmaster_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard/stats
///
/// Aggregate counters for the current week (Monday-anchored) and day, all
/// computed against UTC.
pub async fn stats(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DashboardStats>> {
    let today = chrono::Utc::now().date_naive();
    let (week_start, week_end) = week_bounds(today);
    let (day_start, day_end) = day_bounds(today);

    let pool = &state.pool;
    let total_employees = DashboardRepo::count_employees(pool).await?;
    let total_teams = DashboardRepo::count_teams(pool).await?;
    let shifts_this_week = DashboardRepo::count_shifts_between(pool, week_start, week_end).await?;
    let today_shifts = DashboardRepo::count_shifts_between(pool, day_start, day_end).await?;
    let pending_time_off_requests = DashboardRepo::count_pending_time_off(pool).await?;
    let hours_scheduled =
        DashboardRepo::hours_scheduled_between(pool, week_start, week_end).await?;
    let covered =
        DashboardRepo::count_users_with_shift_between(pool, week_start, week_end).await?;

    // Share of non-admin users holding at least one shift this week.
    let coverage_rate = if total_employees > 0 {
        covered * 100 / total_employees
    } else {
        0
    };

    Ok(Json(DashboardStats {
        total_employees,
        total_teams,
        shifts_this_week,
        today_shifts,
        pending_time_off_requests,
        hours_scheduled,
        coverage_rate,
    }))
}
