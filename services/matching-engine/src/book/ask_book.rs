//! Ask (sell-side) order book
//!
//! Maintains sell orders grouped by price, best ask (lowest price) first.
//! Uses BTreeMap for deterministic iteration order.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};
use types::order::Order;

use super::price_level::PriceLevel;

/// Ask (sell) side of the book
///
/// Levels are keyed by price; the lowest price is the best ask. At each
/// price level, orders are maintained in FIFO order.
#[derive(Debug, Clone, Default)]
pub struct AskBook {
    levels: BTreeMap<Price, PriceLevel>,
}

impl AskBook {
    /// Create a new empty ask book
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

    /// Get the best ask price (lowest)
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }

    /// Get the best ask as (price, total quantity)
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.levels
            .iter()
            .next()
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
            .iter() // ascending: lowest ask first
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Check if the ask book has no levels
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
            Side::Sell,
            TimeInForce::Gfd,
            Price::new(price),
            Quantity::new(quantity),
            sequence,
        )
    }

    #[test]
    fn test_best_ask_is_lowest_price() {
        let mut book = AskBook::new();
        book.insert(order("S1", 101, 10, 1));
        book.insert(order("S2", 100, 5, 2));
        book.insert(order("S3", 103, 7, 3));

        assert_eq!(book.best_price(), Some(Price::new(100)));
        assert_eq!(book.best_ask(), Some((Price::new(100), Quantity::new(5))));
    }

    #[test]
    fn test_remove_drops_empty_level() {
        let mut book = AskBook::new();
        book.insert(order("S1", 100, 10, 1));
        book.insert(order("S2", 100, 5, 2));

        assert!(book.remove(1, Price::new(100)).is_some());
        assert_eq!(book.level_count(), 1);
        assert!(book.remove(2, Price::new(100)).is_some());
        assert!(book.is_empty());
    }

    #[test]
    fn test_levels_best_first() {
        let mut book = AskBook::new();
        book.insert(order("S1", 101, 10, 1));
        book.insert(order("S2", 100, 5, 2));
        book.insert(order("S3", 103, 7, 3));

        let levels = book.levels();
        assert_eq!(
            levels,
            vec![
                (Price::new(100), Quantity::new(5)),
                (Price::new(101), Quantity::new(10)),
                (Price::new(103), Quantity::new(7)),
            ]
        );
    }
}
