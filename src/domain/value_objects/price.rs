//! # Price Value Object
//!
//! Validated monetary amount for quote responses.
//!
//! # Examples
//!
//! ```
//! use freight_rfq::domain::value_objects::price::Price;
//! use rust_decimal::Decimal;
//!
//! let price = Price::new(Decimal::new(125_000, 2)).unwrap();
//! assert_eq!(price.to_string(), "1250.00");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A strictly positive monetary amount.
///
/// Wraps [`rust_decimal::Decimal`] so quote prices are exact and validated
/// at the boundary; a `Price` can never hold zero or a negative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the amount is zero or negative.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::InvalidPrice(format!(
                "price must be positive, got {amount}"
            )));
        }
        Ok(Self(amount))
    }

    /// Creates a price from an integer number of major currency units.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the amount is zero or negative.
    pub fn from_major_units(units: i64) -> DomainResult<Self> {
        Self::new(Decimal::from(units))
    }

    /// Returns the inner decimal amount.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
