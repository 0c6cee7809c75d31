//! Storefront HTTP Server
//!
//! Axum server for the checkout demo: storefront, checkout and confirmation
//! pages, plus the endpoint that creates Stripe PaymentIntents.

mod config;
mod error;
mod handlers;
mod router;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shop_payments::{MockPaymentIntents, PaymentIntents, StripeClient};

use crate::config::{AppConfig, PaymentBackend};
use crate::router::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fail fast on missing credentials
    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!("✗ Invalid configuration: {}", e);
        tracing::error!("  Set STRIPE_SECRET_KEY in .env, or SHOP_MOCK_PAYMENTS=1 for local runs");
    })?;

    // Initialize payments
    let payments: Arc<dyn PaymentIntents> = match &config.payments {
        PaymentBackend::Stripe(stripe) => {
            tracing::info!("✓ Stripe configured (timeout {:?})", stripe.timeout());
            Arc::new(StripeClient::new(stripe))
        }
        PaymentBackend::Mock => {
            tracing::warn!("⚠ Using in-memory mock payments - no real charges");
            Arc::new(MockPaymentIntents::new())
        }
    };

    if config.publishable_key.is_empty() {
        tracing::warn!("⚠ STRIPE_PUBLISHABLE_KEY not set - the payment form will not load");
    }

    // Build application state
    let state = AppState::new(payments, config.publishable_key.clone());

    // Build router
    let app = build_router(state, &config.public_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 storefront running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /                      - Storefront");
    tracing::info!("  GET  /checkout?item=N       - Checkout page");
    tracing::info!("  POST /create-payment-intent - Create Stripe PaymentIntent");
    tracing::info!("  GET  /success               - Payment confirmation");
    tracing::info!("  GET  /health                - Health check");
    tracing::info!("  Static files from {}", config.public_dir.display());
    tracing::info!("");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
