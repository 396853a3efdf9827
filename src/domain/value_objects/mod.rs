//! # Value Objects
//!
//! Immutable domain values: identifiers, timestamps, money, voyage data
//! and the two lifecycle status enums.

pub mod ids;
pub mod price;
pub mod quote_request_status;
pub mod response_status;
pub mod timestamp;
pub mod voyage;

pub use ids::{AssignmentId, EventId, NotificationId, QuoteRequestId, TenantId};
pub use price::Price;
pub use quote_request_status::QuoteRequestStatus;
pub use response_status::ResponseStatus;
pub use timestamp::Timestamp;
pub use voyage::{CargoType, Port, VesselType, VoyageData};
