//! Validation Errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Malformed client input. Always surfaced to the client, never a server fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No item selected")]
    NoItemSelected,

    #[error("Invalid price for '{key}': {value}")]
    InvalidPrice { key: String, value: String },

    #[error("Negative price for '{key}': {value}")]
    NegativePrice { key: String, value: String },

    #[error("Order amount is too large")]
    AmountOverflow,
}
