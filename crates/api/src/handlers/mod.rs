pub mod auth;
pub mod availability;
pub mod dashboard;
pub mod notification;
pub mod shift;
pub mod team;
pub mod time_off;
pub mod user;
