//! Event structures emitted by the order book

use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};

/// Read-only ladder view of the book
///
/// Both sides are ordered best-to-worst: asks ascending by price, bids
/// descending. Every row has a positive quantity; emptied levels are
/// removed before they can be observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub asks: Vec<(Price, Quantity)>,
    pub bids: Vec<(Price, Quantity)>,
}

impl BookSnapshot {
    /// Check whether the book holds no resting orders at all
    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }
}
