//! Types library for the limit order book
//!
//! This library provides the core type definitions shared by the matching
//! engine and its front ends, ensuring type safety and deterministic
//! behavior.
//!
//! # Modules
//! - `ids`: client-visible order identifiers
//! - `numeric`: integer price and quantity newtypes
//! - `order`: order lifecycle types (side, time-in-force, resting order)
//! - `trade`: trade execution record
//! - `errors`: validation error taxonomy

pub mod errors;
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
}
