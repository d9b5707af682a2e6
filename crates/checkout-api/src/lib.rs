//! # checkout-api
//!
//! HTTP API layer for forever-checkout.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | ANY | `/health` | Liveness check, `Server is running` |
//! | POST | `/create-payment-intent` | Price the product, create a payment intent, return `{"clientSecret": ...}` |

pub mod handlers;
pub mod routes;
pub mod state;

pub use handlers::ApiError;
pub use routes::create_router;
pub use state::{check_timeouts, AppConfig, AppState, LogFormat};
