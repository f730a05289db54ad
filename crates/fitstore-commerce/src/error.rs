//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Address not found.
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Chat post not found.
    #[error("Message not found: {0}")]
    ChatNotFound(String),

    /// Product has no stock left.
    #[error("Product is out of stock: {0}")]
    OutOfStock(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Unknown product category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unknown sort key.
    #[error("Unknown sort option: {0}")]
    UnknownSort(String),

    /// Unknown order status.
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    /// Pincode is not six digits.
    #[error("Invalid pincode: {0} (expected 6 digits)")]
    InvalidPincode(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Form validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Persistence error.
    #[error("Storage error: {0}")]
    Storage(#[from] fitstore_cache::CacheError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
