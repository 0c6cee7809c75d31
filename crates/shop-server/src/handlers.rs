//! HTTP Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use shop_catalog::{calculate_order_amount, lookup};
use shop_web::{
    CheckoutView, SuccessView, render_checkout, render_error, render_storefront, render_success,
};

use crate::error::CreateIntentError;
use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutQuery {
    pub item: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePaymentIntentRequest {
    pub items_price: Map<String, Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
pub struct SuccessQuery {
    pub payment_intent: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Storefront with the three catalog items
pub async fn storefront(State(state): State<AppState>) -> Html<String> {
    Html(render_storefront(&state.pages))
}

/// Checkout page for `?item=`; an unknown item renders an inline error
pub async fn checkout(
    State(state): State<AppState>,
    Query(query): Query<CheckoutQuery>,
) -> Html<String> {
    let view = CheckoutView::from_lookup(lookup(query.item.as_deref()));
    Html(render_checkout(&state.pages, view))
}

/// Create a PaymentIntent for the posted price components.
///
/// The body is parsed as JSON whatever its content type.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreatePaymentIntentResponse>, CreateIntentError> {
    let request: CreatePaymentIntentRequest = serde_json::from_slice(&body)
        .inspect_err(|e| tracing::warn!(error = %e, "Rejected payment intent request body"))?;

    let amount = calculate_order_amount(&request.items_price)
        .inspect_err(|e| tracing::warn!(error = %e, "Rejected order prices"))?;

    let intent = state
        .payments
        .create(amount)
        .await
        .inspect_err(|e| tracing::error!(amount, error = %e, "Payment intent creation failed"))?;

    let client_secret = intent
        .client_secret
        .ok_or(shop_payments::PaymentError::MissingClientSecret(intent.id))?;

    Ok(Json(CreatePaymentIntentResponse { client_secret }))
}

/// Confirmation page for `?payment_intent=`.
///
/// A missing or malformed id is a 400 page, any other payment service
/// failure a 502 page.
pub async fn success(
    State(state): State<AppState>,
    Query(query): Query<SuccessQuery>,
) -> Response {
    let Some(id) = query.payment_intent.filter(|id| !id.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Html(render_error(&state.pages, "No payment specified")),
        )
            .into_response();
    };

    match state.payments.retrieve(&id).await {
        Ok(intent) => Html(render_success(
            &state.pages,
            SuccessView {
                payment_intent_id: id,
                amount: intent.amount,
                status: intent.status,
            },
        ))
        .into_response(),
        Err(e) => {
            let status = if e.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::BAD_GATEWAY
            };
            tracing::error!(payment_intent = %id, error = %e, "Payment intent lookup failed");
            (status, Html(render_error(&state.pages, e.user_message()))).into_response()
        }
    }
}
