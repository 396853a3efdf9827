//! # Voyage Value Objects
//!
//! Immutable shipping-voyage description attached to a quote request.
//!
//! A [`VoyageData`] is pure data: two ports, the cargo, the vessel class and
//! a departure date. All fields are required and validated at construction;
//! once the owning quote request exists the voyage is never mutated.
//!
//! # Examples
//!
//! ```
//! use freight_rfq::domain::value_objects::voyage::{
//!     CargoType, Port, VesselType, VoyageData,
//! };
//! use freight_rfq::domain::value_objects::timestamp::Timestamp;
//!
//! let voyage = VoyageData::new(
//!     Port::new("NLRTM", "Rotterdam").unwrap(),
//!     Port::new("SGSIN", "Singapore").unwrap(),
//!     CargoType::Container,
//!     18_500.0,
//!     VesselType::ContainerShip,
//!     Timestamp::now().add_secs(86_400),
//! )
//! .unwrap();
//!
//! assert_eq!(voyage.departure_port().code(), "NLRTM");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of cargo being shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CargoType {
    /// Containerized cargo.
    Container,
    /// Dry bulk cargo (grain, ore, coal).
    Bulk,
    /// Liquid cargo carried in tanks.
    Liquid,
    /// Non-containerized general cargo.
    Breakbulk,
}

impl fmt::Display for CargoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Container => "CONTAINER",
            Self::Bulk => "BULK",
            Self::Liquid => "LIQUID",
            Self::Breakbulk => "BREAKBULK",
        };
        write!(f, "{}", s)
    }
}

/// Class of vessel required for the voyage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VesselType {
    /// Cellular container ship.
    ContainerShip,
    /// Dry bulk carrier.
    BulkCarrier,
    /// Liquid cargo tanker.
    Tanker,
    /// General cargo vessel.
    Cargo,
}

impl fmt::Display for VesselType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ContainerShip => "CONTAINER_SHIP",
            Self::BulkCarrier => "BULK_CARRIER",
            Self::Tanker => "TANKER",
            Self::Cargo => "CARGO",
        };
        write!(f, "{}", s)
    }
}

/// A port, identified by code with a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Port {
    code: String,
    name: String,
}

impl Port {
    /// Creates a port from a code and display name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidVoyage` if either field is empty.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        let name = name.into();
        if code.trim().is_empty() {
            return Err(DomainError::InvalidVoyage(
                "port code must not be empty".to_string(),
            ));
        }
        if name.trim().is_empty() {
            return Err(DomainError::InvalidVoyage(
                "port name must not be empty".to_string(),
            ));
        }
        Ok(Self { code, name })
    }

    /// Returns the port code.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the port display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Immutable voyage description embedded in a quote request.
///
/// # Invariants
///
/// - All fields are required.
/// - `cargo_weight` is strictly positive and finite.
/// - Never mutated after the owning quote request is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoyageData {
    departure_port: Port,
    destination_port: Port,
    cargo_type: CargoType,
    cargo_weight: f64,
    vessel_type: VesselType,
    departure_date: Timestamp,
}

impl VoyageData {
    /// Creates a voyage description with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidVoyage` if `cargo_weight` is not a
    /// positive finite number.
    pub fn new(
        departure_port: Port,
        destination_port: Port,
        cargo_type: CargoType,
        cargo_weight: f64,
        vessel_type: VesselType,
        departure_date: Timestamp,
    ) -> DomainResult<Self> {
        if !cargo_weight.is_finite() || cargo_weight <= 0.0 {
            return Err(DomainError::InvalidVoyage(format!(
                "cargo weight must be positive, got {cargo_weight}"
            )));
        }
        Ok(Self {
            departure_port,
            destination_port,
            cargo_type,
            cargo_weight,
            vessel_type,
            departure_date,
        })
    }

    /// Returns the departure port.
    #[inline]
    #[must_use]
    pub fn departure_port(&self) -> &Port {
        &self.departure_port
    }

    /// Returns the destination port.
    #[inline]
    #[must_use]
    pub fn destination_port(&self) -> &Port {
        &self.destination_port
    }

    /// Returns the cargo type.
    #[inline]
    #[must_use]
    pub fn cargo_type(&self) -> CargoType {
        self.cargo_type
    }

    /// Returns the cargo weight in metric tons.
    #[inline]
    #[must_use]
    pub fn cargo_weight(&self) -> f64 {
        self.cargo_weight
    }

    /// Returns the required vessel type.
    #[inline]
    #[must_use]
    pub fn vessel_type(&self) -> VesselType {
        self.vessel_type
    }

    /// Returns the planned departure date.
    #[inline]
    #[must_use]
    pub fn departure_date(&self) -> Timestamp {
        self.departure_date
    }
}

impl fmt::Display for VoyageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({} {}t, {})",
            self.departure_port.code, self.destination_port.code, self.cargo_type,
            self.cargo_weight, self.vessel_type
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rotterdam() -> Port {
        Port::new("NLRTM", "Rotterdam").unwrap()
    }

    fn singapore() -> Port {
        Port::new("SGSIN", "Singapore").unwrap()
    }

    fn test_voyage() -> VoyageData {
        VoyageData::new(
            rotterdam(),
            singapore(),
            CargoType::Container,
            18_500.0,
            VesselType::ContainerShip,
            Timestamp::from_millis(1_767_225_600_000).unwrap(),
        )
        .unwrap()
    }

    mod port {
        use super::*;

        #[test]
        fn new_valid_port() {
            let port = rotterdam();
            assert_eq!(port.code(), "NLRTM");
            assert_eq!(port.name(), "Rotterdam");
        }

        #[test]
        fn new_rejects_empty_code() {
            let result = Port::new("", "Rotterdam");
            assert!(matches!(result, Err(DomainError::InvalidVoyage(_))));
        }

        #[test]
        fn new_rejects_blank_name() {
            let result = Port::new("NLRTM", "   ");
            assert!(matches!(result, Err(DomainError::InvalidVoyage(_))));
        }

        #[test]
        fn display_format() {
            assert_eq!(rotterdam().to_string(), "Rotterdam (NLRTM)");
        }
    }

    mod voyage_data {
        use super::*;

        #[test]
        fn new_valid_voyage() {
            let voyage = test_voyage();
            assert_eq!(voyage.cargo_type(), CargoType::Container);
            assert_eq!(voyage.vessel_type(), VesselType::ContainerShip);
            assert!((voyage.cargo_weight() - 18_500.0).abs() < f64::EPSILON);
        }

        #[test]
        fn new_rejects_zero_weight() {
            let result = VoyageData::new(
                rotterdam(),
                singapore(),
                CargoType::Bulk,
                0.0,
                VesselType::BulkCarrier,
                Timestamp::from_millis(0).unwrap(),
            );
            assert!(matches!(result, Err(DomainError::InvalidVoyage(_))));
        }

        #[test]
        fn new_rejects_nan_weight() {
            let result = VoyageData::new(
                rotterdam(),
                singapore(),
                CargoType::Liquid,
                f64::NAN,
                VesselType::Tanker,
                Timestamp::from_millis(0).unwrap(),
            );
            assert!(matches!(result, Err(DomainError::InvalidVoyage(_))));
        }

        #[test]
        fn serde_roundtrip() {
            let voyage = test_voyage();
            let json = serde_json::to_string(&voyage).unwrap();
            let deserialized: VoyageData = serde_json::from_str(&json).unwrap();
            assert_eq!(voyage, deserialized);
        }

        #[test]
        fn serde_screaming_snake_case_enums() {
            let json = serde_json::to_string(&CargoType::Breakbulk).unwrap();
            assert_eq!(json, "\"BREAKBULK\"");

            let json = serde_json::to_string(&VesselType::ContainerShip).unwrap();
            assert_eq!(json, "\"CONTAINER_SHIP\"");
        }
    }
}
