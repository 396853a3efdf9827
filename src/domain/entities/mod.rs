//! # Domain Entities
//!
//! The quote request aggregate root, its owned responder assignments, and
//! the notification read-model record.

pub mod notification;
pub mod quote_request;
pub mod responder_assignment;

pub use notification::{Notification, NotificationKey, NotificationKind};
pub use quote_request::QuoteRequest;
pub use responder_assignment::ResponderAssignment;
