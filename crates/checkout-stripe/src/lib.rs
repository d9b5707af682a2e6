//! # checkout-stripe
//!
//! Stripe provider for forever-checkout.
//!
//! `StripePaymentIntents` creates PaymentIntents with automatic payment
//! methods enabled and returns the client secret the browser needs to
//! confirm the payment with Stripe.js.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_core::{Currency, PaymentIntentParams, PaymentIntentProvider};
//! use checkout_stripe::StripePaymentIntents;
//!
//! // Reads STRIPE_KEY from the environment (or .env)
//! let stripe = StripePaymentIntents::from_env()?;
//!
//! let intent = stripe
//!     .create_payment_intent(&PaymentIntentParams::new(26000, Currency::USD))
//!     .await?;
//!
//! // Send intent.client_secret to the browser
//! ```

pub mod config;
pub mod payment_intents;

// Re-exports
pub use config::StripeConfig;
pub use payment_intents::StripePaymentIntents;
