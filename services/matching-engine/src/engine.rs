//! Order book core
//!
//! A single-instrument limit order book. Every incoming order first crosses
//! against the opposite side in price-time priority; only then may a
//! good-for-day remainder rest. The book is a plain owned value with no
//! global instance — callers construct one per traded instrument and drive
//! it strictly sequentially.

use std::collections::HashMap;
use thiserror::Error;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side, TimeInForce};
use types::trade::Trade;

use crate::book::{AskBook, BidBook, PriceLevel};
use crate::events::BookSnapshot;
use crate::matching::{crossing, executor};

/// Locator for a resting good-for-day order
///
/// The registry keeps this instead of a second handle to the order itself:
/// the order lives in exactly one price level, and side + price + sequence
/// are enough to find it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RestingRef {
    side: Side,
    price: Price,
    sequence: u64,
}

/// Rejections recognized by the book
///
/// Both are clean no-ops: no trades are emitted and no state changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("duplicate order id: {0}")]
    DuplicateOrderId(OrderId),

    #[error("order not found: {0}")]
    OrderNotFound(OrderId),
}

/// Single-instrument limit order book with price-time priority matching
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    bids: BidBook,
    asks: AskBook,
    /// Resting good-for-day orders by client id. IOC remainders are
    /// discarded, never registered.
    registry: HashMap<OrderId, RestingRef>,
    /// Arrival counter; assigned at rest time, never reused or reset
    sequence: u64,
}

impl OrderBook {
    /// Create a new empty order book
    pub fn new() -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
            registry: HashMap::new(),
            sequence: 0,
        }
    }

    /// Submit an order
    ///
    /// Matches against the opposite side first, returning the resulting
    /// trades in the order they occurred. A positive good-for-day remainder
    /// then rests at the back of its price level's queue; an
    /// immediate-or-cancel remainder is discarded unconditionally.
    ///
    /// Rejects with `DuplicateOrderId` if the order is good-for-day and its
    /// id is already registered; the book is left untouched in that case.
    pub fn submit(
        &mut self,
        side: Side,
        time_in_force: TimeInForce,
        price: Price,
        quantity: Quantity,
        id: OrderId,
    ) -> Result<Vec<Trade>, EngineError> {
        if time_in_force == TimeInForce::Gfd && self.registry.contains_key(&id) {
            return Err(EngineError::DuplicateOrderId(id));
        }

        let mut remaining = quantity;
        // Split borrows: one side's book plus the registry, never both sides
        let trades = match side {
            Side::Buy => Self::match_buy(&mut self.asks, &mut self.registry, &id, price, &mut remaining),
            Side::Sell => Self::match_sell(&mut self.bids, &mut self.registry, &id, price, &mut remaining),
        };

        if !remaining.is_zero() && time_in_force == TimeInForce::Gfd {
            self.sequence += 1;
            let order = Order::new(id.clone(), side, time_in_force, price, remaining, self.sequence);
            self.registry.insert(
                id,
                RestingRef {
                    side,
                    price,
                    sequence: self.sequence,
                },
            );
            match side {
                Side::Buy => self.bids.insert(order),
                Side::Sell => self.asks.insert(order),
            };
        }

        Ok(trades)
    }

    /// Cancel a resting order by client id
    ///
    /// Returns false for an unknown (or already-gone) id, leaving the book
    /// unchanged. Cancelling twice is a clean failure, not an error.
    pub fn cancel(&mut self, id: &OrderId) -> bool {
        let Some(entry) = self.registry.remove(id) else {
            return false;
        };
        let removed = match entry.side {
            Side::Buy => self.bids.remove(entry.sequence, entry.price),
            Side::Sell => self.asks.remove(entry.sequence, entry.price),
        };
        debug_assert!(removed.is_some(), "registered order missing from book");
        true
    }

    /// Replace a resting order: cancel, then resubmit as good-for-day
    ///
    /// The replacement always receives a fresh sequence and joins the back
    /// of its new level's queue, so time priority is lost even when price
    /// and side are unchanged. The resubmission may itself cross; any
    /// resulting trades are returned.
    pub fn modify(
        &mut self,
        id: &OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<Vec<Trade>, EngineError> {
        if !self.cancel(id) {
            return Err(EngineError::OrderNotFound(id.clone()));
        }
        self.submit(side, TimeInForce::Gfd, price, quantity, id.clone())
    }

    /// Read-only ladder snapshot, both sides best-first
    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            asks: self.asks.levels(),
            bids: self.bids.levels(),
        }
    }

    /// Get the best bid as (price, total quantity)
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.bids.best_bid()
    }

    /// Get the best ask as (price, total quantity)
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks.best_ask()
    }

    /// Number of currently resting orders
    pub fn resting_count(&self) -> usize {
        self.registry.len()
    }

    /// Walk the ask side for an incoming buy
    ///
    /// Takes the best (lowest) ask level, consumes it front-to-back, and
    /// drops it the moment it empties; stops when no level remains, the
    /// best ask rises above the limit, or the incoming quantity is spent.
    fn match_buy(
        asks: &mut AskBook,
        registry: &mut HashMap<OrderId, RestingRef>,
        taker_id: &OrderId,
        limit: Price,
        remaining: &mut Quantity,
    ) -> Vec<Trade> {
        let mut trades = Vec::new();
        while !remaining.is_zero() {
            let Some(best) = asks.best_price() else { break };
            if !crossing::crosses(Side::Buy, limit, best) {
                break;
            }
            let Some(level) = asks.level_mut(best) else { break };
            Self::consume_level(level, registry, taker_id, limit, remaining, &mut trades);
            if level.is_empty() {
                asks.remove_level(best);
            }
        }
        trades
    }

    /// Walk the bid side for an incoming sell; mirror of `match_buy`
    fn match_sell(
        bids: &mut BidBook,
        registry: &mut HashMap<OrderId, RestingRef>,
        taker_id: &OrderId,
        limit: Price,
        remaining: &mut Quantity,
    ) -> Vec<Trade> {
        let mut trades = Vec::new();
        while !remaining.is_zero() {
            let Some(best) = bids.best_price() else { break };
            if !crossing::crosses(Side::Sell, limit, best) {
                break;
            }
            let Some(level) = bids.level_mut(best) else { break };
            Self::consume_level(level, registry, taker_id, limit, remaining, &mut trades);
            if level.is_empty() {
                bids.remove_level(best);
            }
        }
        trades
    }

    /// Consume one price level front-to-back
    ///
    /// Emits one trade per fill in arrival order. A fully consumed maker is
    /// removed from the level and unregistered here, in the same step —
    /// the level never reaches back into the book for that. A partially
    /// consumed maker keeps its place at the front with reduced quantity.
    fn consume_level(
        level: &mut PriceLevel,
        registry: &mut HashMap<OrderId, RestingRef>,
        taker_id: &OrderId,
        taker_price: Price,
        remaining: &mut Quantity,
        trades: &mut Vec<Trade>,
    ) {
        while !remaining.is_zero() {
            let Some(maker) = level.peek_front() else { break };
            let fill = (*remaining).min(maker.quantity);
            trades.push(executor::execute(maker, taker_id, taker_price, fill));
            *remaining = remaining.saturating_sub(fill);
            if let Some(consumed) = level.fill_front(fill) {
                registry.remove(&consumed.id);
            }
        }
    }
}
