//! Client-visible order identifiers
//!
//! Order ids are supplied by the client, not generated by the engine.
//! Uniqueness is only enforced among currently-resting good-for-day orders;
//! a cancelled or fully filled id may be reused by a later submission.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client-supplied identifier for an order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create a new OrderId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Try to create an OrderId, rejecting the empty string
    pub fn try_new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let s = id.into();
        if s.is_empty() {
            Err(ValidationError::EmptyOrderId)
        } else {
            Ok(Self(s))
        }
    }

    /// Get the id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_as_str() {
        let id = OrderId::new("ORD-1");
        assert_eq!(id.as_str(), "ORD-1");
        assert_eq!(id.to_string(), "ORD-1");
    }

    #[test]
    fn test_order_id_try_new() {
        assert!(OrderId::try_new("ORD-1").is_ok());
        assert_eq!(OrderId::try_new(""), Err(ValidationError::EmptyOrderId));
    }

    #[test]
    fn test_order_id_serialization() {
        let id = OrderId::new("ORD-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ORD-1\"");

        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
