//! Repository for the `availability` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use shiftmaster_core::types::DbId;

use crate::models::availability::{Availability, UpsertAvailability};

/// Column list for `availability` queries.
const COLUMNS: &str = "id, user_id, date, status, time_ranges, created_at";

/// Provides upsert-style access to per-day availability.
pub struct AvailabilityRepo;

impl AvailabilityRepo {
    /// Insert or replace the record for `(user_id, date)`.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertAvailability,
    ) -> Result<Availability, sqlx::Error> {
        let query = format!(
            "INSERT INTO availability (user_id, date, status, time_ranges)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_availability_user_date
             DO UPDATE SET status = EXCLUDED.status, time_ranges = EXCLUDED.time_ranges
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Availability>(&query)
            .bind(input.user_id)
            .bind(input.date)
            .bind(&input.status)
            .bind(&input.time_ranges)
            .fetch_one(pool)
            .await
    }

    /// List availability with optional filters on user and date, ordered by
    /// date ascending.
    pub async fn list(
        pool: &PgPool,
        user_id: Option<DbId>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Availability>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM availability
             WHERE ($1::bigint IS NULL OR user_id = $1)
               AND ($2::date IS NULL OR date = $2)
             ORDER BY date ASC"
        );
        sqlx::query_as::<_, Availability>(&query)
            .bind(user_id)
            .bind(date)
            .fetch_all(pool)
            .await
    }
}
