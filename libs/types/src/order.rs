//! Order lifecycle types

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// Time-in-force policy for orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Immediate-Or-Cancel: match immediately, discard the remainder
    Ioc,
    /// Good-For-Day: rest until filled or cancelled
    Gfd,
}

/// A resting limit order
///
/// Identity (`id`, `sequence`) and terms (`side`, `price`) are fixed at
/// creation; `quantity` is the only mutable field and only ever decreases.
/// `sequence` is assigned by the book, strictly increasing, and doubles as
/// the time-priority tiebreak within a price level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub time_in_force: TimeInForce,
    pub price: Price,
    pub quantity: Quantity,
    pub sequence: u64,
}

impl Order {
    /// Create a new resting order
    pub fn new(
        id: OrderId,
        side: Side,
        time_in_force: TimeInForce,
        price: Price,
        quantity: Quantity,
        sequence: u64,
    ) -> Self {
        Self {
            id,
            side,
            time_in_force,
            price,
            quantity,
            sequence,
        }
    }

    /// Subtract a fill from the remaining quantity
    ///
    /// The caller clamps `fill` to the remaining quantity; an order that
    /// reaches zero must be removed from its level immediately.
    pub fn reduce(&mut self, fill: Quantity) {
        debug_assert!(fill <= self.quantity, "fill exceeds remaining quantity");
        self.quantity = self.quantity.saturating_sub(fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(quantity: u64) -> Order {
        Order::new(
            OrderId::new("ORD-1"),
            Side::Buy,
            TimeInForce::Gfd,
            Price::new(100),
            Quantity::new(quantity),
            1,
        )
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_order_reduce() {
        let mut o = order(10);
        o.reduce(Quantity::new(4));
        assert_eq!(o.quantity, Quantity::new(6));
        o.reduce(Quantity::new(6));
        assert!(o.quantity.is_zero());
    }

    #[test]
    fn test_order_identity_survives_fill() {
        let mut o = order(10);
        o.reduce(Quantity::new(3));
        assert_eq!(o.id, OrderId::new("ORD-1"));
        assert_eq!(o.price, Price::new(100));
        assert_eq!(o.sequence, 1);
    }

    #[test]
    fn test_side_serialization() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"BUY\"");
        assert_eq!(
            serde_json::to_string(&TimeInForce::Ioc).unwrap(),
            "\"IOC\""
        );
    }
}
