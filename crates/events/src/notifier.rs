//! Turns domain events into notification rows.

use shiftmaster_core::statuses::{NOTIFICATION_SHIFT, NOTIFICATION_TIMEOFF};
use shiftmaster_db::models::notification::{CreateNotification, Notification};
use shiftmaster_db::repositories::NotificationRepo;
use shiftmaster_db::DbPool;

use crate::event::DomainEvent;

/// Consumer that writes one notification per [`DomainEvent`].
pub struct Notifier;

impl Notifier {
    /// Handle a single event, writing its notification.
    ///
    /// Called inline by the mutation that produced the event; the
    /// notification write is a second, non-atomic store operation.
    pub async fn handle(pool: &DbPool, event: &DomainEvent) -> Result<Notification, sqlx::Error> {
        let input = Self::notification_for(event);
        let notification = NotificationRepo::create(pool, &input).await?;
        tracing::debug!(
            user_id = notification.user_id,
            kind = %notification.kind,
            "Notification written for domain event"
        );
        Ok(notification)
    }

    /// Build the notification content for an event.
    fn notification_for(event: &DomainEvent) -> CreateNotification {
        match event {
            DomainEvent::ShiftCreated {
                user_id,
                start_time,
                ..
            } => CreateNotification {
                user_id: *user_id,
                title: "New Shift Assigned".to_string(),
                message: format!(
                    "You have been assigned a new shift on {}",
                    start_time.format("%Y-%m-%d")
                ),
                kind: NOTIFICATION_SHIFT.to_string(),
            },

            DomainEvent::TimeOffResolved {
                user_id,
                status,
                start_date,
                end_date,
                ..
            } => {
                let mut titled = status.clone();
                if let Some(first) = titled.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                CreateNotification {
                    user_id: *user_id,
                    title: format!("Time-Off Request {titled}"),
                    message: format!(
                        "Your time-off request for {start_date} to {end_date} has been {status}."
                    ),
                    kind: NOTIFICATION_TIMEOFF.to_string(),
                }
            }
        }
    }
}
