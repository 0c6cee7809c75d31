//! # shop-payments
//!
//! Stripe PaymentIntent client for the storefront checkout.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────┐  POST /create-payment-intent  ┌──────────┐  create   ┌──────────┐
//! │ Browser  │──────────────────────────────▶│  Server  │──────────▶│  Stripe  │
//! │          │◀──────── clientSecret ────────│          │◀──────────│          │
//! │          │                               └──────────┘           │          │
//! │          │────── confirmPayment (Stripe.js) ───────────────────▶│          │
//! │          │◀───── redirect /success?payment_intent=pi_... ───────│          │
//! └──────────┘                                                      └──────────┘
//! ```
//!
//! The server only ever holds an intent id and its client secret; Stripe owns
//! the intent. `/success` re-queries Stripe by id to show the paid amount.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shop_payments::{PaymentIntents, StripeClient, StripeConfig};
//!
//! let client = StripeClient::new(&StripeConfig::new("sk_test_xxx"));
//!
//! let intent = client.create(2300).await?;
//! // Hand intent.client_secret to Stripe.js
//!
//! let intent = client.retrieve(&intent.id).await?;
//! println!("{} {}", intent.amount, intent.status);
//! ```

mod error;
mod intent;
mod mock;

pub use error::{PaymentError, Result};
pub use intent::{
    CURRENCY, DEFAULT_TIMEOUT, PaymentIntent, PaymentIntents, StripeClient, StripeConfig,
};
pub use mock::MockPaymentIntents;
