//! # Payment Intent Provider Trait
//!
//! Seam between the HTTP layer and the payment processor. The API holds a
//! [`BoxedPaymentIntentProvider`] so tests can swap the Stripe client for an
//! in-memory double.

use crate::error::CheckoutResult;
use crate::intent::{PaymentIntent, PaymentIntentParams};
use async_trait::async_trait;
use std::sync::Arc;

/// A processor that can create payment intents.
#[async_trait]
pub trait PaymentIntentProvider: Send + Sync {
    /// Create a payment intent.
    ///
    /// One call is one round trip to the processor; implementations do not
    /// retry.
    async fn create_payment_intent(
        &self,
        params: &PaymentIntentParams,
    ) -> CheckoutResult<PaymentIntent>;

    /// Provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedPaymentIntentProvider = Arc<dyn PaymentIntentProvider>;
