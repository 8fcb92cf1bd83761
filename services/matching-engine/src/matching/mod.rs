//! Matching logic module
//!
//! Implements the price-time priority matching primitives: crossing
//! detection and trade construction.

pub mod crossing;
pub mod executor;

pub use crossing::crosses;
