//! # Routes
//!
//! Axum router configuration for the checkout API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::StatusCode,
    routing::{any, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - ANY  /health - Liveness check
/// - POST /create-payment-intent - Create a payment intent, returns `clientSecret`
///
/// Other methods on `/create-payment-intent` get a 405; unknown paths a 404.
pub fn create_router(state: AppState) -> Router {
    // The browser checkout page is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout,
        ))
        .layer(cors);

    Router::new()
        .route("/health", any(handlers::health))
        .route(
            "/create-payment-intent",
            post(handlers::create_payment_intent).fallback(handlers::method_not_allowed),
        )
        .layer(middleware)
        .with_state(state)
}
