//! # Request Handlers
//!
//! Axum request handlers for the checkout API.
//! Each step of the intent flow returns early on its first failure.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use checkout_core::{
    CheckoutError, CheckoutRequest, CreatePaymentIntentResponse, PaymentIntentParams,
};
use tracing::{debug, error, info, instrument, warn};

/// Body of the health endpoint
pub const HEALTH_BODY: &str = "Server is running";

// =============================================================================
// Errors
// =============================================================================

/// HTTP wrapper for [`CheckoutError`].
///
/// Rendered as a plain-text body carrying the error message.
#[derive(Debug)]
pub struct ApiError(pub CheckoutError);

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.0.to_string()).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint (any method)
pub async fn health() -> &'static str {
    HEALTH_BODY
}

/// Create a payment intent for a single product and return its client secret
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreatePaymentIntentResponse>, ApiError> {
    let request = CheckoutRequest::from_json(&body).map_err(|e| {
        warn!("Rejected checkout body: {}", e);
        e
    })?;

    let Some(amount) = state.price_table.get(&request.product_id) else {
        warn!("No price for product {:?}", request.product_id);
        return Err(CheckoutError::UnknownProduct {
            product_id: request.product_id,
        }
        .into());
    };

    let address = request.shipping_address();
    if address.is_empty() {
        warn!("Checkout for {:?} has no shipping address", request.product_id);
    } else {
        debug!(
            "Shipping to {:?}, {}, {}",
            address.full_name(),
            address.city,
            address.country
        );
    }

    info!(
        "Creating payment intent: product={:?}, amount={}, currency={}",
        request.product_id,
        amount,
        state.price_table.currency()
    );

    let params = PaymentIntentParams::new(amount, state.price_table.currency())
        .with_metadata("product_id", request.product_id.as_str());

    let intent = state
        .provider
        .create_payment_intent(&params)
        .await
        .map_err(|e| {
            let provider = state.provider.provider_name();
            if e.is_upstream() {
                error!("Payment intent rejected upstream by {}: {}", provider, e);
            } else {
                error!("Failed to create payment intent via {}: {}", provider, e);
            }
            e
        })?;

    info!("Created payment intent: {}", intent.id);
    debug!("Client secret for {}: {}", intent.id, intent.client_secret);

    Ok(Json(CreatePaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}

/// Anything but POST on the intent endpoint
pub async fn method_not_allowed(method: Method) -> ApiError {
    warn!("Rejected {} on /create-payment-intent", method);
    ApiError(CheckoutError::MethodNotAllowed)
}
