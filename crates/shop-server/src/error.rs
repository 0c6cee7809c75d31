//! API Error Responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shop_catalog::ValidationError;
use shop_payments::PaymentError;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Anything that can go wrong while creating a payment intent
#[derive(Error, Debug)]
pub enum CreateIntentError {
    #[error("Invalid request body: {0}")]
    Body(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}

impl IntoResponse for CreateIntentError {
    /// Every failure of the create path is a 403 with `{"error": message}`
    fn into_response(self) -> Response {
        (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
