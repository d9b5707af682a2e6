//! # Stripe Payment Intents
//!
//! Client for `POST /v1/payment_intents`. The browser completes the payment
//! with the returned client secret, so card data never reaches this service.

use crate::config::StripeConfig;
use async_trait::async_trait;
use checkout_core::{
    CheckoutError, CheckoutResult, Currency, PaymentIntent, PaymentIntentParams,
    PaymentIntentProvider, PaymentIntentStatus,
};
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

const PROVIDER: &str = "stripe";

/// Stripe PaymentIntents provider
pub struct StripePaymentIntents {
    config: StripeConfig,
    client: Client,
}

impl StripePaymentIntents {
    /// Create a new provider; the HTTP client uses the configured timeout
    pub fn new(config: StripeConfig) -> CheckoutResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                CheckoutError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        Self::new(StripeConfig::from_env()?)
    }

    /// Form body for the create call
    fn build_form(params: &PaymentIntentParams) -> Vec<(String, String)> {
        let mut form = vec![
            ("amount".to_string(), params.amount.to_string()),
            ("currency".to_string(), params.currency.as_str().to_string()),
        ];

        if params.automatic_payment_methods {
            form.push((
                "automatic_payment_methods[enabled]".to_string(),
                "true".to_string(),
            ));
        }

        let mut metadata: Vec<_> = params.metadata.iter().collect();
        metadata.sort();
        for (key, value) in metadata {
            form.push((format!("metadata[{}]", key), value.clone()));
        }

        form
    }
}

#[async_trait]
impl PaymentIntentProvider for StripePaymentIntents {
    #[instrument(skip(self, params), fields(amount = params.amount, currency = %params.currency))]
    async fn create_payment_intent(
        &self,
        params: &PaymentIntentParams,
    ) -> CheckoutResult<PaymentIntent> {
        let idempotency_key = params
            .idempotency_key
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let url = format!("{}/v1/payment_intents", self.config.api_base_url);
        debug!("Creating Stripe payment intent: idempotency_key={}", idempotency_key);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .header("Idempotency-Key", &idempotency_key)
            .form(&Self::build_form(params))
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);
            return Err(provider_error(status, &body));
        }

        let intent: StripePaymentIntentResponse = serde_json::from_str(&body).map_err(|e| {
            CheckoutError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })?;

        let client_secret = intent.client_secret.ok_or_else(|| CheckoutError::Provider {
            provider: PROVIDER.to_string(),
            message: format!("payment intent {} has no client secret", intent.id),
        })?;

        info!("Created Stripe payment intent: id={}", intent.id);

        Ok(PaymentIntent {
            currency: Currency::from_code(&intent.currency).unwrap_or(params.currency),
            created_at: intent.created.and_then(|ts| DateTime::from_timestamp(ts, 0)),
            id: intent.id,
            amount: intent.amount,
            client_secret,
            status: intent.status,
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

fn provider_error(status: reqwest::StatusCode, body: &str) -> CheckoutError {
    let message = serde_json::from_str::<StripeErrorResponse>(body)
        .ok()
        .and_then(|r| r.error.message)
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body));

    CheckoutError::Provider {
        provider: PROVIDER.to_string(),
        message,
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripePaymentIntentResponse {
    id: String,
    amount: i64,
    currency: String,
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default)]
    status: PaymentIntentStatus,
    #[serde(default)]
    created: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    #[serde(default)]
    message: Option<String>,
}
