//! Application State

use std::sync::Arc;

use shop_payments::PaymentIntents;
use shop_web::PageContext;

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Stripe client, or the in-memory mock
    pub payments: Arc<dyn PaymentIntents>,

    /// Values every rendered page needs
    pub pages: Arc<PageContext>,
}

impl AppState {
    pub fn new(payments: Arc<dyn PaymentIntents>, publishable_key: impl Into<String>) -> Self {
        Self {
            payments,
            pages: Arc::new(PageContext {
                publishable_key: publishable_key.into(),
            }),
        }
    }
}
