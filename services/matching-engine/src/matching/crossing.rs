//! Crossing detection logic
//!
//! Determines when an incoming order can match a resting price level.

use types::numeric::Price;
use types::order::Side;

/// Check if an incoming order crosses a resting price
///
/// A buy crosses when its limit is at or above the resting ask; a sell
/// crosses when its limit is at or below the resting bid.
pub fn crosses(incoming_side: Side, incoming_price: Price, resting_price: Price) -> bool {
    match incoming_side {
        Side::Buy => incoming_price >= resting_price,
        Side::Sell => incoming_price <= resting_price,
    }
}
