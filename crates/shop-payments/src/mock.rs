//! Mock Payment Intents
//!
//! For tests and local runs without Stripe credentials. Intents live in
//! memory and every call succeeds unless the mock is set to fail.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{PaymentError, Result};
use crate::intent::{CURRENCY, PaymentIntent, PaymentIntents};

/// In-memory payment intents
pub struct MockPaymentIntents {
    intents: RwLock<HashMap<String, PaymentIntent>>,
    created: RwLock<Vec<i64>>,
    next_id: AtomicU64,
    failure: Option<PaymentError>,
    omit_client_secret: bool,
}

impl Default for MockPaymentIntents {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPaymentIntents {
    pub fn new() -> Self {
        Self {
            intents: RwLock::new(HashMap::new()),
            created: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            failure: None,
            omit_client_secret: false,
        }
    }

    /// Every call fails with `PaymentError::Stripe(message)`
    pub fn failing(message: impl Into<String>) -> Self {
        Self::failing_with(PaymentError::Stripe(message.into()))
    }

    /// Every call fails with `error`
    pub fn failing_with(error: PaymentError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new()
        }
    }

    /// Created intents come back without a client secret
    #[must_use]
    pub fn without_client_secret(mut self) -> Self {
        self.omit_client_secret = true;
        self
    }

    /// Preload an intent for `retrieve`
    #[must_use]
    pub fn with_intent(mut self, id: &str, amount: i64, status: &str) -> Self {
        let intent = PaymentIntent {
            id: id.to_string(),
            client_secret: Some(format!("{id}_secret_mock")),
            amount,
            currency: CURRENCY.to_string(),
            status: status.to_string(),
        };
        self.intents.get_mut().insert(id.to_string(), intent);
        self
    }

    /// Amounts passed to `create`, in call order
    pub async fn created_amounts(&self) -> Vec<i64> {
        self.created.read().await.clone()
    }

    fn check_failure(&self) -> Result<()> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PaymentIntents for MockPaymentIntents {
    async fn create(&self, amount: i64) -> Result<PaymentIntent> {
        self.check_failure()?;

        if amount < 1 {
            return Err(PaymentError::Stripe(
                "This value must be greater than or equal to 1.".into(),
            ));
        }

        let id = format!("pi_mock_{}", self.next_id.fetch_add(1, Ordering::Relaxed));
        let intent = PaymentIntent {
            id: id.clone(),
            client_secret: (!self.omit_client_secret).then(|| format!("{id}_secret_mock")),
            amount,
            currency: CURRENCY.to_string(),
            status: "requires_payment_method".into(),
        };

        self.created.write().await.push(amount);
        self.intents.write().await.insert(id, intent.clone());

        tracing::debug!(payment_intent = %intent.id, amount, "Created mock payment intent");

        Ok(intent)
    }

    async fn retrieve(&self, id: &str) -> Result<PaymentIntent> {
        self.check_failure()?;

        if !id.starts_with("pi_") {
            return Err(PaymentError::InvalidIntentId(id.to_string()));
        }

        self.intents
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| PaymentError::Stripe(format!("No such payment_intent: '{id}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_echoes_secret() {
        let payments = MockPaymentIntents::new();

        let intent = payments.create(23).await.unwrap();
        assert_eq!(intent.amount, 23);
        assert_eq!(intent.currency, "sgd");
        assert_eq!(
            intent.client_secret.as_deref(),
            Some(format!("{}_secret_mock", intent.id).as_str())
        );
        assert_eq!(payments.created_amounts().await, vec![23]);

        let fetched = payments.retrieve(&intent.id).await.unwrap();
        assert_eq!(fetched, intent);
    }

    #[tokio::test]
    async fn test_create_rejects_zero_amount() {
        let payments = MockPaymentIntents::new();
        assert!(matches!(payments.create(0).await, Err(PaymentError::Stripe(_))));
        assert!(payments.created_amounts().await.is_empty());
    }

    #[tokio::test]
    async fn test_preloaded_intent() {
        let payments = MockPaymentIntents::new().with_intent("pi_123", 2300, "succeeded");

        let intent = payments.retrieve("pi_123").await.unwrap();
        assert_eq!(intent.amount, 2300);
        assert_eq!(intent.status, "succeeded");
    }

    #[tokio::test]
    async fn test_retrieve_errors() {
        let payments = MockPaymentIntents::new();
        assert_eq!(
            payments.retrieve("bogus").await,
            Err(PaymentError::InvalidIntentId("bogus".into()))
        );
        assert!(matches!(
            payments.retrieve("pi_missing").await,
            Err(PaymentError::Stripe(_))
        ));
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let payments = MockPaymentIntents::failing("Invalid API Key provided");
        assert_eq!(
            payments.create(100).await,
            Err(PaymentError::Stripe("Invalid API Key provided".into()))
        );
        assert!(payments.retrieve("pi_123").await.is_err());

        let timeout = PaymentError::Timeout(std::time::Duration::from_secs(10));
        let payments = MockPaymentIntents::failing_with(timeout.clone());
        assert_eq!(payments.create(100).await, Err(timeout));
    }

    #[tokio::test]
    async fn test_without_client_secret() {
        let payments = MockPaymentIntents::new().without_client_secret();
        let intent = payments.create(100).await.unwrap();
        assert_eq!(intent.client_secret, None);
    }
}
