//! Price level implementation with FIFO queue
//!
//! A price level contains all resting orders at one exact price. Orders are
//! maintained in FIFO (First-In-First-Out) order to enforce time priority,
//! and the level keeps a running quantity total so emptiness and depth
//! queries never rescan the queue.

use std::collections::VecDeque;
use types::numeric::Quantity;
use types::order::Order;

/// A price level containing orders at a specific price
///
/// Maintains strict FIFO ordering for time-priority matching.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Queue of orders at this price level (arrival order = priority order)
    orders: VecDeque<Order>,
    /// Total quantity resting at this level, maintained incrementally
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
            total_quantity: Quantity::zero(),
        }
    }

    /// Append an order at the back of the queue (time priority)
    ///
    /// Returns false without inserting if an order with the same sequence
    /// already exists at this level. Sequences are globally unique, so a
    /// duplicate here indicates a caller bug rather than a user error.
    pub fn insert(&mut self, order: Order) -> bool {
        if self.orders.iter().any(|o| o.sequence == order.sequence) {
            return false;
        }
        self.total_quantity = self.total_quantity + order.quantity;
        self.orders.push_back(order);
        true
    }

    /// Peek at the oldest resting order without removing it
    pub fn peek_front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Subtract a fill from the oldest resting order
    ///
    /// The caller clamps `fill` to the front order's remaining quantity.
    /// Returns the order when the fill consumes it entirely, so the caller
    /// can unregister it; a partial fill leaves the order in place and
    /// returns None. The total is adjusted by exactly `fill` either way.
    pub fn fill_front(&mut self, fill: Quantity) -> Option<Order> {
        let front = self.orders.front_mut()?;
        debug_assert!(fill <= front.quantity, "fill exceeds front order quantity");
        self.total_quantity = self.total_quantity.saturating_sub(fill);
        if front.quantity <= fill {
            self.orders.pop_front()
        } else {
            front.reduce(fill);
            None
        }
    }

    /// Remove the order with the given sequence, adjusting the total
    ///
    /// Used for direct cancellation. Returns None if no such order rests
    /// at this level.
    pub fn remove(&mut self, sequence: u64) -> Option<Order> {
        let position = self.orders.iter().position(|o| o.sequence == sequence)?;
        let order = self.orders.remove(position)?;
        self.total_quantity = self.total_quantity.saturating_sub(order.quantity);
        Some(order)
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the total quantity resting at this level
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

impl Default for PriceLevel {
    fn default() -> Self {
        Self::new()
    }
}
