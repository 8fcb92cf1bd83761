//! Bid (buy-side) order book
//!
//! Maintains buy orders grouped by price, best bid (highest price) first.
//! Uses BTreeMap for deterministic iteration order.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};
use types::order::Order;

use super::price_level::PriceLevel;

/// Bid (buy) side of the book
///
/// Levels are keyed by price; the highest price is the best bid. At each
/// price level, orders are maintained in FIFO order.
#[derive(Debug, Clone, Default)]
pub struct BidBook {
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create a new empty bid book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Insert an order, creating its price level on demand
    pub fn insert(&mut self, order: Order) -> bool {
        self.levels.entry(order.price).or_default().insert(order)
    }

    /// Remove a resting order located by price and sequence
    ///
    /// Drops the price level if the removal empties it.
    pub fn remove(&mut self, sequence: u64, price: Price) -> Option<Order> {
        let level = self.levels.get_mut(&price)?;
        let order = level.remove(sequence)?;
        if level.is_empty() {
            self.levels.remove(&price);
        }
        Some(order)
    }

    /// Get the best bid price (highest)
    pub fn best_price(&self) -> Option<Price> {
        // BTreeMap iterates ascending, so the best bid is the last key
        self.levels.keys().next_back().copied()
    }

    /// Get the best bid as (price, total quantity)
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.levels
            .iter()
            .next_back()
            .map(|(price, level)| (*price, level.total_quantity()))
    }

    /// Get mutable access to the level at a price
    pub fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Remove the level at a price outright
    ///
    /// The matching walk calls this the moment a level's total reaches
    /// zero; an empty level must never remain observable.
    pub fn remove_level(&mut self, price: Price) {
        self.levels.remove(&price);
    }

    /// Snapshot of every level as (price, total quantity), best-first
    pub fn levels(&self) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .rev() // descending: highest bid first
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Check if the bid book has no levels
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OrderId;
    use types::order::{Side, TimeInForce};

    fn order(id: &str, price: u64, quantity: u64, sequence: u64) -> Order {
        Order::new(
            OrderId::new(id),
            Side::Buy,
            TimeInForce::Gfd,
            Price::new(price),
            Quantity::new(quantity),
            sequence,
        )
    }

    #[test]
    fn test_best_bid_is_highest_price() {
        let mut book = BidBook::new();
        book.insert(order("B1", 50, 10, 1));
        book.insert(order("B2", 52, 5, 2));
        book.insert(order("B3", 49, 7, 3));

        assert_eq!(book.best_price(), Some(Price::new(52)));
        assert_eq!(book.best_bid(), Some((Price::new(52), Quantity::new(5))));
    }

    #[test]
    fn test_same_price_shares_level() {
        let mut book = BidBook::new();
        book.insert(order("B1", 50, 10, 1));
        book.insert(order("B2", 50, 5, 2));

        assert_eq!(book.level_count(), 1);
        assert_eq!(book.best_bid(), Some((Price::new(50), Quantity::new(15))));
    }

    #[test]
    fn test_remove_drops_empty_level() {
        let mut book = BidBook::new();
        book.insert(order("B1", 50, 10, 1));

        let removed = book.remove(1, Price::new(50)).unwrap();
        assert_eq!(removed.id, OrderId::new("B1"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_remove_unknown_sequence() {
        let mut book = BidBook::new();
        book.insert(order("B1", 50, 10, 1));

        assert!(book.remove(9, Price::new(50)).is_none());
        assert!(book.remove(1, Price::new(51)).is_none());
        assert_eq!(book.level_count(), 1);
    }

    #[test]
    fn test_levels_best_first() {
        let mut book = BidBook::new();
        book.insert(order("B1", 50, 10, 1));
        book.insert(order("B2", 52, 5, 2));
        book.insert(order("B3", 49, 7, 3));

        let levels = book.levels();
        assert_eq!(
            levels,
            vec![
                (Price::new(52), Quantity::new(5)),
                (Price::new(50), Quantity::new(10)),
                (Price::new(49), Quantity::new(7)),
            ]
        );
    }
}
