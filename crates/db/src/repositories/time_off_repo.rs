//! Repository for the `time_off_requests` table.

use sqlx::PgPool;
use shiftmaster_core::types::DbId;

use crate::models::time_off::{CreateTimeOffRequest, TimeOffRequest};

/// Column list for `time_off_requests` queries.
const COLUMNS: &str = "id, user_id, start_date, end_date, type, status, \
                       reviewed_by, reviewed_at, reason, created_at";

/// Provides CRUD operations for time-off requests.
pub struct TimeOffRepo;

impl TimeOffRepo {
    /// Insert a new request. Status always starts `pending`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTimeOffRequest,
    ) -> Result<TimeOffRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO time_off_requests (user_id, start_date, end_date, type, reason)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimeOffRequest>(&query)
            .bind(input.user_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.kind)
            .bind(&input.reason)
            .fetch_one(pool)
            .await
    }

    /// Find a request by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TimeOffRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM time_off_requests WHERE id = $1");
        sqlx::query_as::<_, TimeOffRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List requests with optional equality filters, newest first.
    pub async fn list(
        pool: &PgPool,
        user_id: Option<DbId>,
        status: Option<&str>,
    ) -> Result<Vec<TimeOffRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM time_off_requests
             WHERE ($1::bigint IS NULL OR user_id = $1)
               AND ($2::text IS NULL OR status = $2)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, TimeOffRequest>(&query)
            .bind(user_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Resolve a pending request to `approved` or `rejected`, stamping the
    /// reviewer and review time.
    ///
    /// Only rows still in `pending` are touched; returns `None` if the id
    /// does not exist or the request was already resolved.
    pub async fn resolve(
        pool: &PgPool,
        id: DbId,
        status: &str,
        reviewed_by: DbId,
    ) -> Result<Option<TimeOffRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE time_off_requests SET
                status = $2,
                reviewed_by = $3,
                reviewed_at = NOW()
             WHERE id = $1 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimeOffRequest>(&query)
            .bind(id)
            .bind(status)
            .bind(reviewed_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete a request unconditionally. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM time_off_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
