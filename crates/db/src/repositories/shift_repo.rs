//! Repository for the `shifts` table.

use sqlx::PgPool;
use shiftmaster_core::statuses::SHIFT_SCHEDULED;
use shiftmaster_core::types::{DbId, Timestamp};

use crate::models::shift::{CreateShift, Shift, ShiftFilter, UpdateShift};

/// Column list for `shifts` queries.
const COLUMNS: &str =
    "id, user_id, start_time, end_time, status, notes, created_by, created_at, updated_at";

/// Provides CRUD operations for shifts.
pub struct ShiftRepo;

impl ShiftRepo {
    /// Insert a new shift, returning the created row.
    ///
    /// `created_by` is the id of the caller, taken from their claim.
    pub async fn create(
        pool: &PgPool,
        input: &CreateShift,
        created_by: Option<DbId>,
    ) -> Result<Shift, sqlx::Error> {
        let query = format!(
            "INSERT INTO shifts (user_id, start_time, end_time, status, notes, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shift>(&query)
            .bind(input.user_id)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.status.as_deref().unwrap_or(SHIFT_SCHEDULED))
            .bind(&input.notes)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a shift by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Shift>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shifts WHERE id = $1");
        sqlx::query_as::<_, Shift>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List shifts matching `filter`, ordered by start time ascending.
    pub async fn list(pool: &PgPool, filter: &ShiftFilter) -> Result<Vec<Shift>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shifts
             WHERE ($1::bigint IS NULL OR user_id = $1)
               AND ($2::text IS NULL OR status = $2)
               AND ($3::timestamptz IS NULL OR start_time >= $3)
               AND ($4::timestamptz IS NULL OR start_time <= $4)
             ORDER BY start_time ASC"
        );
        sqlx::query_as::<_, Shift>(&query)
            .bind(filter.user_id)
            .bind(&filter.status)
            .bind(filter.start_from)
            .bind(filter.start_to)
            .fetch_all(pool)
            .await
    }

    /// Update a shift. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShift,
    ) -> Result<Option<Shift>, sqlx::Error> {
        let query = format!(
            "UPDATE shifts SET
                user_id = COALESCE($2, user_id),
                start_time = COALESCE($3, start_time),
                end_time = COALESCE($4, end_time),
                status = COALESCE($5, status),
                notes = COALESCE($6, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shift>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite owner and both endpoints in one write (board drop).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn reschedule(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        start_time: Timestamp,
        end_time: Timestamp,
    ) -> Result<Option<Shift>, sqlx::Error> {
        let query = format!(
            "UPDATE shifts SET
                user_id = $2,
                start_time = $3,
                end_time = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shift>(&query)
            .bind(id)
            .bind(user_id)
            .bind(start_time)
            .bind(end_time)
            .fetch_optional(pool)
            .await
    }

    /// Delete a shift unconditionally. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shifts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
