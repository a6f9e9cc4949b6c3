//! The canonical domain events of the scheduling domain.

use chrono::NaiveDate;
use shiftmaster_core::types::{DbId, Timestamp};

/// A domain mutation that carries a user-facing side effect.
///
/// There are exactly two today; both fan out to a single notification for
/// the affected user via [`Notifier`](crate::Notifier).
#[derive(Debug, Clone)]
pub enum DomainEvent {
    /// A shift was created and assigned to `user_id`.
    ShiftCreated {
        shift_id: DbId,
        user_id: DbId,
        start_time: Timestamp,
    },

    /// A pending time-off request was approved or rejected.
    TimeOffResolved {
        request_id: DbId,
        /// The original requester, who receives the notification.
        user_id: DbId,
        /// `approved` or `rejected`.
        status: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}
