//! Domain events and their notification side effects.
//!
//! Primary mutations that must notify a user publish a [`DomainEvent`];
//! the [`Notifier`] consumes the event and writes the notification row.
//! Keeping the two apart makes the side-effect write independently
//! testable. Dispatch is synchronous within the request, and the two
//! writes are NOT atomic: a failed notification write leaves the primary
//! write in place.

pub mod event;
pub mod notifier;

pub use event::DomainEvent;
pub use notifier::Notifier;
