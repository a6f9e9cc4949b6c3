//! Status and type vocabularies for shifts, time-off requests, availability,
//! and notifications.
//!
//! Stored as plain strings; the database enforces the same sets via CHECK
//! constraints, these constants keep handler code free of stringly typos.

// Shift lifecycle.
pub const SHIFT_SCHEDULED: &str = "scheduled";
pub const SHIFT_COMPLETED: &str = "completed";
pub const SHIFT_CANCELLED: &str = "cancelled";

pub const ALL_SHIFT_STATUSES: &[&str] = &[SHIFT_SCHEDULED, SHIFT_COMPLETED, SHIFT_CANCELLED];

// Time-off request lifecycle. Transitions are pending -> approved|rejected only.
pub const TIMEOFF_PENDING: &str = "pending";
pub const TIMEOFF_APPROVED: &str = "approved";
pub const TIMEOFF_REJECTED: &str = "rejected";

// Time-off request categories.
pub const TIMEOFF_TYPE_VACATION: &str = "vacation";
pub const TIMEOFF_TYPE_SICK: &str = "sick";
pub const TIMEOFF_TYPE_PERSONAL: &str = "personal";
pub const TIMEOFF_TYPE_OTHER: &str = "other";

pub const ALL_TIMEOFF_TYPES: &[&str] = &[
    TIMEOFF_TYPE_VACATION,
    TIMEOFF_TYPE_SICK,
    TIMEOFF_TYPE_PERSONAL,
    TIMEOFF_TYPE_OTHER,
];

// Notification categories.
pub const NOTIFICATION_SHIFT: &str = "shift";
pub const NOTIFICATION_TIMEOFF: &str = "timeoff";
pub const NOTIFICATION_SWAP: &str = "swap";
pub const NOTIFICATION_SCHEDULE: &str = "schedule";
pub const NOTIFICATION_GENERAL: &str = "general";

// Per-day availability.
pub const AVAILABILITY_AVAILABLE: &str = "Available";
pub const AVAILABILITY_UNAVAILABLE: &str = "Unavailable";
pub const AVAILABILITY_PREFERRED: &str = "Preferred";

pub const ALL_AVAILABILITY_STATUSES: &[&str] = &[
    AVAILABILITY_AVAILABLE,
    AVAILABILITY_UNAVAILABLE,
    AVAILABILITY_PREFERRED,
];

/// Whether `status` is a legal resolution for a time-off request.
///
/// Only `approved` and `rejected` are accepted; in particular a request can
/// never be moved back to `pending` through the resolution endpoint.
pub fn is_timeoff_resolution(status: &str) -> bool {
    status == TIMEOFF_APPROVED || status == TIMEOFF_REJECTED
}
