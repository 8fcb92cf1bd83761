//! Validation error taxonomy
//!
//! Raised when constructing domain values from untrusted input. The core
//! assumes validated values; front ends use these to reject bad input
//! before it reaches the book.

use thiserror::Error;

/// Errors raised by fallible domain-value constructors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("price must be a positive integer")]
    NonPositivePrice,

    #[error("quantity must be a positive integer")]
    NonPositiveQuantity,

    #[error("order id must not be empty")]
    EmptyOrderId,
}
