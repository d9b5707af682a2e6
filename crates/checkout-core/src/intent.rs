//! # Payment Intent Types
//!
//! Provider-neutral view of a payment intent and the parameters used to
//! create one.

use crate::product::Currency;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parameters for creating a payment intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntentParams {
    /// Amount in smallest currency unit (cents for USD)
    pub amount: i64,

    pub currency: Currency,

    /// Let the provider pick payment methods from its dashboard settings
    pub automatic_payment_methods: bool,

    /// Idempotency key; the provider generates one when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl PaymentIntentParams {
    /// New params with automatic payment methods enabled
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            automatic_payment_methods: true,
            idempotency_key: None,
            metadata: HashMap::new(),
        }
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Lifecycle status reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
    #[serde(other)]
    Unknown,
}

impl Default for PaymentIntentStatus {
    fn default() -> Self {
        PaymentIntentStatus::RequiresPaymentMethod
    }
}

/// A payment intent created by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Provider's intent ID (pi_...)
    pub id: String,

    pub amount: i64,

    pub currency: Currency,

    /// Token the browser uses to confirm the payment
    pub client_secret: String,

    #[serde(default)]
    pub status: PaymentIntentStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
