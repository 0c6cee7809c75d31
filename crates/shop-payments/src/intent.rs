//! Stripe PaymentIntent Integration
//!
//! Implements the "Stripe Elements (Embedded)" approach: the server creates a
//! PaymentIntent and hands its client secret to the browser, which confirms
//! the payment with Stripe.js.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use stripe::{
    Client, CreatePaymentIntent, CreatePaymentIntentAutomaticPaymentMethods, Currency,
    PaymentIntent as StripePaymentIntent, PaymentIntentId,
};

use crate::error::{PaymentError, Result};

/// Currency of every intent the storefront creates
pub const CURRENCY: Currency = Currency::SGD;

/// Default per-call timeout for Stripe requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Stripe credentials, read once at startup
#[derive(Clone)]
pub struct StripeConfig {
    secret_key: String,
    timeout: Duration,
}

impl StripeConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Local view of a Stripe PaymentIntent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Stripe id (`pi_...`)
    pub id: String,

    /// Secret the browser uses to confirm the payment
    pub client_secret: Option<String>,

    /// Amount in minor currency units
    pub amount: i64,

    /// Lowercase ISO currency code
    pub currency: String,

    /// Stripe status (`requires_payment_method`, `succeeded`, ...)
    pub status: String,
}

impl From<StripePaymentIntent> for PaymentIntent {
    fn from(intent: StripePaymentIntent) -> Self {
        Self {
            id: intent.id.to_string(),
            client_secret: intent.client_secret,
            amount: intent.amount,
            currency: intent.currency.to_string(),
            status: intent.status.to_string(),
        }
    }
}

/// Payment-intent operations (Strategy pattern)
///
/// [`StripeClient`] talks to Stripe; [`crate::MockPaymentIntents`] keeps
/// everything in memory.
#[async_trait]
pub trait PaymentIntents: Send + Sync {
    /// Create an intent for `amount` minor units with automatic payment methods.
    ///
    /// A successful result always carries a client secret.
    async fn create(&self, amount: i64) -> Result<PaymentIntent>;

    /// Fetch an existing intent by id
    async fn retrieve(&self, id: &str) -> Result<PaymentIntent>;
}

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
    timeout: Duration,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(config: &StripeConfig) -> Self {
        Self {
            client: Client::new(config.secret_key.clone()),
            timeout: config.timeout,
        }
    }

    /// Run an upstream call under the configured timeout
    async fn call<F>(&self, request: F) -> Result<StripePaymentIntent>
    where
        F: Future<Output = std::result::Result<StripePaymentIntent, stripe::StripeError>>,
    {
        tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| PaymentError::Timeout(self.timeout))?
            .map_err(PaymentError::from)
    }
}

#[async_trait]
impl PaymentIntents for StripeClient {
    async fn create(&self, amount: i64) -> Result<PaymentIntent> {
        let mut params = CreatePaymentIntent::new(amount, CURRENCY);
        params.automatic_payment_methods = Some(CreatePaymentIntentAutomaticPaymentMethods {
            allow_redirects: None,
            enabled: true,
        });

        let intent = self
            .call(StripePaymentIntent::create(&self.client, params))
            .await
            .inspect_err(|e| tracing::warn!(amount, error = %e, "Failed to create payment intent"))?;

        let intent = PaymentIntent::from(intent);
        if intent.client_secret.is_none() {
            return Err(PaymentError::MissingClientSecret(intent.id));
        }

        tracing::info!(payment_intent = %intent.id, amount, "Created payment intent");

        Ok(intent)
    }

    async fn retrieve(&self, id: &str) -> Result<PaymentIntent> {
        let intent_id: PaymentIntentId = id
            .parse()
            .map_err(|_| PaymentError::InvalidIntentId(id.to_string()))?;

        let intent = self
            .call(StripePaymentIntent::retrieve(&self.client, &intent_id, &[]))
            .await
            .inspect_err(|e| tracing::warn!(payment_intent = %id, error = %e, "Failed to retrieve payment intent"))?;

        tracing::info!(
            payment_intent = %intent.id,
            amount = intent.amount,
            status = %intent.status,
            "Retrieved payment intent"
        );

        Ok(intent.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = StripeConfig::new("sk_test_123");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);

        let config = config.with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_config_debug_redacts_secret() {
        let debug = format!("{:?}", StripeConfig::new("sk_test_123"));
        assert!(!debug.contains("sk_test_123"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_currency_is_sgd() {
        assert_eq!(CURRENCY.to_string(), "sgd");
    }

    #[tokio::test]
    async fn test_call_times_out() {
        let timeout = Duration::from_millis(10);
        let client = StripeClient::new(&StripeConfig::new("sk_test_123").with_timeout(timeout));

        let err = client
            .call(std::future::pending::<
                std::result::Result<StripePaymentIntent, stripe::StripeError>,
            >())
            .await
            .unwrap_err();
        assert_eq!(err, PaymentError::Timeout(timeout));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_retrieve_rejects_malformed_id() {
        let client = StripeClient::new(&StripeConfig::new("sk_test_123"));
        let err = client.retrieve("not-an-intent").await.unwrap_err();
        assert_eq!(err, PaymentError::InvalidIntentId("not-an-intent".into()));
        assert!(err.is_client_error());
    }
}
