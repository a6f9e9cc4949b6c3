//! Repository layer: one unit struct with static async methods per entity.
//!
//! Repositories return `sqlx::Error`; domain mapping (404s, validation)
//! happens in the API layer.

mod availability_repo;
mod dashboard_repo;
mod notification_repo;
mod shift_repo;
mod team_repo;
mod time_off_repo;
mod user_repo;

pub use availability_repo::AvailabilityRepo;
pub use dashboard_repo::DashboardRepo;
pub use notification_repo::NotificationRepo;
pub use shift_repo::ShiftRepo;
pub use team_repo::TeamRepo;
pub use time_off_repo::TimeOffRepo;
pub use user_repo::UserRepo;
