//! Payment Error Types

use std::time::Duration;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Failures of the external payment service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Stripe API error (auth, network, invalid amount, not found)
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Identifier is not a PaymentIntent id
    #[error("Invalid payment intent id: {0}")]
    InvalidIntentId(String),

    /// Created intent came back without a client secret
    #[error("Payment intent {0} has no client secret")]
    MissingClientSecret(String),

    /// Upstream call exceeded the configured timeout
    #[error("Stripe request timed out after {0:?}")]
    Timeout(Duration),
}

impl PaymentError {
    /// Whether the caller supplied a bad identifier, as opposed to an upstream failure
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidIntentId(_))
    }

    /// Get user-friendly message
    pub const fn user_message(&self) -> &str {
        match self {
            Self::InvalidIntentId(_) => "That payment could not be found.",
            Self::Timeout(_) => "The payment service took too long to respond. Please try again.",
            _ => "Payment processing failed. Please try again.",
        }
    }
}

impl From<stripe::StripeError> for PaymentError {
    fn from(err: stripe::StripeError) -> Self {
        Self::Stripe(err.to_string())
    }
}
