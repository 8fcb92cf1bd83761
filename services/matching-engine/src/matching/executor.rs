//! Trade construction
//!
//! Builds the trade record for one fill between a resting maker order and
//! an incoming taker.

use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Order;
use types::trade::Trade;

/// Build the trade record for one fill
///
/// The maker leg carries the resting order's price; the taker leg carries
/// the incoming order's submitted limit price. The two are both recorded
/// even when they differ — a taker that crosses deep into the book still
/// reports its own limit price, not an effective execution price. That
/// asymmetry is part of the report contract and must not be normalized.
pub(crate) fn execute(
    maker: &Order,
    taker_id: &OrderId,
    taker_price: Price,
    quantity: Quantity,
) -> Trade {
    Trade::new(
        maker.id.clone(),
        maker.price,
        taker_id.clone(),
        taker_price,
        quantity,
    )
}
