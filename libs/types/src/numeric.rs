//! Integer price and quantity newtypes
//!
//! Prices and quantities are positive integers on the wire. Both are
//! newtyped so a price can never be handed to a quantity parameter, and so
//! `Price` can key an ordered map directly.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Limit price (positive integer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Create a new Price
    ///
    /// # Panics
    /// Panics if the value is zero
    pub fn new(value: u64) -> Self {
        assert!(value > 0, "Price must be positive");
        Self(value)
    }

    /// Try to create a Price, rejecting zero
    pub fn try_new(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            Err(ValidationError::NonPositivePrice)
        } else {
            Ok(Self(value))
        }
    }

    /// Get the raw integer value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order or level quantity (non-negative integer)
///
/// Order quantities are created positive and only ever decrease; level
/// totals may legitimately pass through zero while a level is being drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Create a new Quantity
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Try to create a Quantity for an incoming order, rejecting zero
    pub fn try_new(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            Err(ValidationError::NonPositiveQuantity)
        } else {
            Ok(Self(value))
        }
    }

    /// The zero quantity
    pub fn zero() -> Self {
        Self(0)
    }

    /// Check whether this quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtract, clamping at zero
    pub fn saturating_sub(self, rhs: Quantity) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Get the raw integer value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 + rhs.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_saturating_sub_never_underflows(a in 0u64..1_000_000, b in 0u64..1_000_000) {
            let diff = Quantity::new(a).saturating_sub(Quantity::new(b));
            prop_assert_eq!(diff.as_u64(), a.saturating_sub(b));
        }

        #[test]
        fn prop_try_new_accepts_exactly_positive(value in 0u64..1_000) {
            prop_assert_eq!(Price::try_new(value).is_ok(), value > 0);
            prop_assert_eq!(Quantity::try_new(value).is_ok(), value > 0);
        }
    }
}
