use crate::application::dto::{ErrorResponse, GatewayNotification, ProcessPaymentParams, ReconcileAck};
use crate::application::PaymentService;
use crate::domain::DomainError;
use crate::ports::ShopifyPort;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use std::sync::Arc;
use tracing::error;

/// Shared state handed to every handler.
pub struct AppState<S: ShopifyPort> {
    pub payment_service: Arc<PaymentService<S>>,
}

impl<S: ShopifyPort> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            payment_service: self.payment_service.clone(),
        }
    }
}

/// Map a domain failure onto the wire. Validation and missing-order problems
/// carry their message; everything else is logged and answered with a fixed
/// body so upstream details never leak.
fn error_response(e: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    match &e {
        DomainError::ValidationError(msg) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(msg.clone())),
        ),
        DomainError::OrderNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(e.to_string())),
        ),
        _ => {
            error!(error = %e, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Internal Server Error".to_string())),
            )
        }
    }
}

/// Checkout hand-off: validate, build and sign the payment, answer with the
/// page that forwards the browser to the gateway.
pub async fn process_payment<S: ShopifyPort>(
    State(state): State<AppState<S>>,
    params: Option<Query<ProcessPaymentParams>>,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    // A query string the extractor cannot decode folds into the same
    // validation path as missing parameters, keeping the JSON error body.
    let params = params.map(|Query(params)| params).unwrap_or_default();

    state
        .payment_service
        .process_payment(params)
        .await
        .map(Html)
        .map_err(error_response)
}

/// Gateway notification. The body is taken raw and parsed here so a
/// malformed delivery gets our 400 body instead of the framework's.
pub async fn payment_webhook<S: ShopifyPort>(
    State(state): State<AppState<S>>,
    body: String,
) -> Result<Json<ReconcileAck>, (StatusCode, Json<ErrorResponse>)> {
    let notification: GatewayNotification = serde_json::from_str(&body).map_err(|e| {
        error!(error = %e, "unparseable webhook body");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid webhook payload".to_string())),
        )
    })?;

    state
        .payment_service
        .reconcile(notification)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Health check.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Pay API is working!" })),
    )
}
