//! Aggregate queries backing the dashboard stats endpoint.

use sqlx::PgPool;
use shiftmaster_core::roles::ROLE_ADMIN;
use shiftmaster_core::statuses::TIMEOFF_PENDING;
use shiftmaster_core::types::Timestamp;

/// Read-only count/sum queries; never writes.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Number of users that are not admins.
    pub async fn count_employees(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role <> $1")
            .bind(ROLE_ADMIN)
            .fetch_one(pool)
            .await?;
        Ok(count.unwrap_or(0))
    }

    /// Total number of teams.
    pub async fn count_teams(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(pool)
            .await?;
        Ok(count.unwrap_or(0))
    }

    /// Number of shifts whose start falls within `[from, to)`.
    pub async fn count_shifts_between(
        pool: &PgPool,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM shifts WHERE start_time >= $1 AND start_time < $2",
        )
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Total scheduled hours (sum of actual shift durations) for shifts
    /// starting within `[from, to)`, rounded to whole hours.
    pub async fn hours_scheduled_between(
        pool: &PgPool,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        let seconds: Option<f64> = sqlx::query_scalar(
            "SELECT SUM(EXTRACT(EPOCH FROM (end_time - start_time)))::float8
             FROM shifts WHERE start_time >= $1 AND start_time < $2",
        )
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await?;
        Ok((seconds.unwrap_or(0.0) / 3600.0).round() as i64)
    }

    /// Number of distinct non-admin users holding at least one shift that
    /// starts within `[from, to)`.
    pub async fn count_users_with_shift_between(
        pool: &PgPool,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(DISTINCT s.user_id)
             FROM shifts s
             JOIN users u ON u.id = s.user_id
             WHERE u.role <> $1 AND s.start_time >= $2 AND s.start_time < $3",
        )
        .bind(ROLE_ADMIN)
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Number of time-off requests still pending review.
    pub async fn count_pending_time_off(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM time_off_requests WHERE status = $1")
                .bind(TIMEOFF_PENDING)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }
}
