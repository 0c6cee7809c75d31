//! Route Table

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::{checkout, create_payment_intent, health_check, storefront, success};
use crate::state::AppState;

/// Build the application router. Unmatched paths fall through to the static
/// files under `public_dir`.
pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        // Pages
        .route("/", get(storefront))
        .route("/checkout", get(checkout))
        .route("/success", get(success))
        // Payments
        .route("/create-payment-intent", post(create_payment_intent))
        // Health
        .route("/health", get(health_check))
        // Static files (checkout.js, style.css)
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
