//! Trade execution record

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One match between a resting (maker) order and an incoming (taker) order
///
/// Both the maker's resting price and the taker's submitted limit price are
/// recorded, even when they differ: a taker crossing the book at a more
/// aggressive price than the best resting level still reports its own limit
/// price on its leg. Downstream consumers rely on this exact shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub maker_order_id: OrderId,
    pub maker_price: Price,
    pub taker_order_id: OrderId,
    pub taker_price: Price,
    pub quantity: Quantity,
}

impl Trade {
    pub fn new(
        maker_order_id: OrderId,
        maker_price: Price,
        taker_order_id: OrderId,
        taker_price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            maker_order_id,
            maker_price,
            taker_order_id,
            taker_price,
            quantity,
        }
    }
}

impl fmt::Display for Trade {
    /// Tab-separated `TRADE` wire line; the quantity appears on both legs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TRADE\t{}\t{}\t{}\t{}\t{}\t{}",
            self.maker_order_id,
            self.maker_price,
            self.quantity,
            self.taker_order_id,
            self.taker_price,
            self.quantity
        )
    }
}
