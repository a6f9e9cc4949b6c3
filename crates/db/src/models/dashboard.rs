//! Dashboard aggregate DTO.

use serde::Serialize;

/// Aggregate counters for `GET /api/dashboard/stats`.
///
/// `hours_scheduled` and `coverage_rate` are derived from actual shift data:
/// total shift hours in the current week, and the share of non-admin users
/// holding at least one shift this week.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: i64,
    pub total_teams: i64,
    pub shifts_this_week: i64,
    pub today_shifts: i64,
    pub pending_time_off_requests: i64,
    pub hours_scheduled: i64,
    /// Percentage 0-100.
    pub coverage_rate: i64,
}
