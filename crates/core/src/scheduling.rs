//! Pure scheduling computations.
//!
//! The schedule board moves a shift by dropping its card onto a
//! (user, day) cell. The data transform behind that drop is [`reanchor`]:
//! the shift keeps its original clock time but is moved to the target
//! calendar date. No overlap or availability checking happens here or
//! anywhere else; two shifts for the same user may overlap freely.
//!
//! [`week_bounds`] and [`day_bounds`] produce the UTC windows the dashboard
//! counts shifts against.

use chrono::{Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};

use crate::types::Timestamp;

/// Re-anchor a shift's start/end clock time onto a new calendar date.
///
/// The hour and minute of both endpoints are preserved; seconds are
/// dropped. An overnight shift (end clock earlier than start clock) is
/// re-anchored as-is, matching the board's behavior.
pub fn reanchor(start: Timestamp, end: Timestamp, target_date: NaiveDate) -> (Timestamp, Timestamp) {
    let new_start = at_clock_time(target_date, start.hour(), start.minute());
    let new_end = at_clock_time(target_date, end.hour(), end.minute());
    (new_start, new_end)
}

/// The UTC instant at `hour:minute` on `date`.
fn at_clock_time(date: NaiveDate, hour: u32, minute: u32) -> Timestamp {
    let naive = date
        .and_hms_opt(hour, minute, 0)
        .expect("hour/minute taken from a valid timestamp");
    Utc.from_utc_datetime(&naive)
}

/// Half-open UTC window `[monday, next monday)` of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (Timestamp, Timestamp) {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    let start = at_clock_time(monday, 0, 0);
    (start, start + Duration::days(7))
}

/// Half-open UTC window `[midnight, next midnight)` of `date`.
pub fn day_bounds(date: NaiveDate) -> (Timestamp, Timestamp) {
    let start = at_clock_time(date, 0, 0);
    (start, start + Duration::days(1))
}
