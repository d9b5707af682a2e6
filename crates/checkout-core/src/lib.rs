//! # checkout-core
//!
//! Core types and traits for the forever-checkout payment intent service.
//!
//! This crate provides:
//! - `CheckoutRequest` and `CreatePaymentIntentResponse` wire types
//! - `PriceTable` for product pricing
//! - `PaymentIntentProvider` trait for payment processors
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{CheckoutRequest, PaymentIntentParams, PriceTable};
//!
//! let request = CheckoutRequest::from_json(body)?;
//! let table = PriceTable::default();
//!
//! let params = PaymentIntentParams::new(table.amount_for(&request.product_id), table.currency());
//! let intent = provider.create_payment_intent(&params).await?;
//!
//! // Hand intent.client_secret to the browser
//! ```

pub mod error;
pub mod intent;
pub mod product;
pub mod provider;
pub mod request;

// Re-exports for convenience
pub use error::{CheckoutError, CheckoutResult};
pub use intent::{PaymentIntent, PaymentIntentParams, PaymentIntentStatus};
pub use product::{Currency, PriceTable};
pub use provider::{BoxedPaymentIntentProvider, PaymentIntentProvider};
pub use request::{CheckoutRequest, CreatePaymentIntentResponse, ShippingAddress};
