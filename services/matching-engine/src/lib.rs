//! Matching Engine
//!
//! Single-instrument limit order book with strict price-time priority
//! matching. Incoming orders cross against the opposite side of the book
//! before any good-for-day remainder rests; immediate-or-cancel remainders
//! are discarded.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced
//! - Deterministic matching (same inputs → same outputs)
//! - Conservation of quantity across fills
//! - No zero-quantity order and no empty price level survives an operation

pub mod book;
pub mod engine;
pub mod events;
pub mod matching;

pub use engine::{EngineError, OrderBook};
pub use events::BookSnapshot;
