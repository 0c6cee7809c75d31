//! Server Configuration
//!
//! Read from the environment once at startup and passed down; nothing else
//! touches the environment.

use std::path::PathBuf;
use std::time::Duration;

use shop_payments::StripeConfig;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Startup configuration errors. Fatal: the server does not start.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{name} is invalid: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Which payment-intent backend to run against
#[derive(Debug)]
pub enum PaymentBackend {
    Stripe(StripeConfig),
    /// In-memory intents for local runs without credentials
    Mock,
}

#[derive(Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub public_dir: PathBuf,
    pub publishable_key: String,
    pub payments: PaymentBackend,
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mock = var("SHOP_MOCK_PAYMENTS")
            .is_some_and(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes"));

        let payments = if mock {
            PaymentBackend::Mock
        } else {
            let secret_key =
                var("STRIPE_SECRET_KEY").ok_or(ConfigError::Missing("STRIPE_SECRET_KEY"))?;
            let mut stripe = StripeConfig::new(secret_key.trim());

            if let Some(raw) = var("STRIPE_TIMEOUT_SECS") {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or(ConfigError::Invalid {
                        name: "STRIPE_TIMEOUT_SECS",
                        value: raw.clone(),
                    })?;
                stripe = stripe.with_timeout(Duration::from_secs(secs));
            }

            PaymentBackend::Stripe(stripe)
        };

        Ok(Self {
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            public_dir: var("PUBLIC_DIR")
                .unwrap_or_else(|| DEFAULT_PUBLIC_DIR.into())
                .into(),
            publishable_key: var("STRIPE_PUBLISHABLE_KEY").unwrap_or_default(),
            payments,
        })
    }
}
