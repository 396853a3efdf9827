//! # Identity Value Objects
//!
//! Type-safe identity wrappers for domain identifiers.
//!
//! This module provides newtype wrappers for all domain identifiers,
//! ensuring type safety and preventing accidental mixing of different ID types.
//!
//! ## UUID-based Identifiers
//!
//! - [`QuoteRequestId`] - Quote request (aggregate root) identifier
//! - [`AssignmentId`] - Responder assignment identifier
//! - [`EventId`] - Domain event identifier
//! - [`NotificationId`] - Notification record identifier
//!
//! ## String-based Identifiers
//!
//! - [`TenantId`] - Company-level tenant identifier (requester or responder)

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Quote request identifier.
///
/// A UUID-based identifier uniquely identifying a quote request aggregate.
///
/// # Examples
///
/// ```
/// use freight_rfq::domain::value_objects::ids::QuoteRequestId;
///
/// let id = QuoteRequestId::new_v4();
/// println!("quote request: {}", id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteRequestId(Uuid);

impl QuoteRequestId {
    /// Creates a quote request ID from an existing UUID.
    #[inline]
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generates a new random quote request ID using UUID v4.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for QuoteRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for QuoteRequestId {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Responder assignment identifier.
///
/// A UUID-based identifier for one responder's assignment within a quote
/// request. Assignments have no lifecycle outside their parent aggregate;
/// the ID exists for persistence and notification references only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(Uuid);

impl AssignmentId {
    /// Creates an assignment ID from an existing UUID.
    #[inline]
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generates a new random assignment ID using UUID v4.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for AssignmentId {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Domain event identifier.
///
/// A UUID-based identifier carried by every published message so that
/// consumers can de-duplicate redeliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates an event ID from an existing UUID.
    #[inline]
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generates a new random event ID using UUID v4.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for EventId {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Notification record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Creates a notification ID from an existing UUID.
    #[inline]
    #[must_use]
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generates a new random notification ID using UUID v4.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for NotificationId {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Tenant identifier.
///
/// A string-based, company-level identity. Both the requester that opens a
/// quote request and the responders invited to price it are tenants; user
/// identities never appear in the domain.
///
/// # Examples
///
/// ```
/// use freight_rfq::domain::value_objects::ids::TenantId;
///
/// let tenant = TenantId::new("carrier-nordic");
/// assert_eq!(tenant.as_str(), "carrier-nordic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Creates a tenant ID from a string.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the tenant ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the TenantId and returns the inner String.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TenantId {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TenantId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for TenantId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod quote_request_id {
        use super::*;

        #[test]
        fn new_v4_generates_unique_ids() {
            let id1 = QuoteRequestId::new_v4();
            let id2 = QuoteRequestId::new_v4();
            assert_ne!(id1, id2);
        }

        #[test]
        fn from_uuid_roundtrip() {
            let uuid = Uuid::new_v4();
            let id = QuoteRequestId::new(uuid);
            assert_eq!(id.get(), uuid);
        }

        #[test]
        fn display_formats_as_hyphenated() {
            let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
            let id = QuoteRequestId::new(uuid);
            assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
        }

        #[test]
        fn serde_roundtrip() {
            let id = QuoteRequestId::new_v4();
            let json = serde_json::to_string(&id).unwrap();
            let deserialized: QuoteRequestId = serde_json::from_str(&json).unwrap();
            assert_eq!(id, deserialized);
        }
    }

    mod assignment_id {
        use super::*;

        #[test]
        fn new_v4_generates_unique_ids() {
            assert_ne!(AssignmentId::new_v4(), AssignmentId::new_v4());
        }

        #[test]
        fn serde_roundtrip() {
            let id = AssignmentId::new_v4();
            let json = serde_json::to_string(&id).unwrap();
            let deserialized: AssignmentId = serde_json::from_str(&json).unwrap();
            assert_eq!(id, deserialized);
        }
    }

    mod event_id {
        use super::*;

        #[test]
        fn new_v4_generates_unique_ids() {
            assert_ne!(EventId::new_v4(), EventId::new_v4());
        }

        #[test]
        fn from_uuid_roundtrip() {
            let uuid = Uuid::new_v4();
            assert_eq!(EventId::new(uuid).get(), uuid);
        }
    }

    mod tenant_id {
        use super::*;

        #[test]
        fn new_from_str() {
            let tenant = TenantId::new("shipper-atlantic");
            assert_eq!(tenant.as_str(), "shipper-atlantic");
        }

        #[test]
        fn display_formats_correctly() {
            let tenant = TenantId::new("carrier-baltic");
            assert_eq!(tenant.to_string(), "carrier-baltic");
        }

        #[test]
        fn hash_equality() {
            use std::collections::HashSet;
            let id1 = TenantId::new("carrier-nordic");
            let id2 = TenantId::new("carrier-nordic");

            let mut set = HashSet::new();
            set.insert(id1);
            assert!(set.contains(&id2));
        }

        #[test]
        fn serde_roundtrip() {
            let tenant = TenantId::new("shipper-pacific");
            let json = serde_json::to_string(&tenant).unwrap();
            let deserialized: TenantId = serde_json::from_str(&json).unwrap();
            assert_eq!(tenant, deserialized);
        }

        #[test]
        fn into_inner() {
            let tenant = TenantId::new("freight-forwarder-a");
            assert_eq!(tenant.into_inner(), "freight-forwarder-a");
        }
    }
}
