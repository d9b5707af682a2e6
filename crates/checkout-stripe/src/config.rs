//! # Stripe Configuration
//!
//! Configuration management for the Stripe integration.
//! The secret key is loaded from the environment once at startup.

use checkout_core::CheckoutError;
use std::env;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";
const DEFAULT_API_VERSION: &str = "2024-12-18.acacia";
/// Must stay below the API's inbound request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Stripe API configuration
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_..., sk_live_... or restricted rk_...)
    pub secret_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version sent as `Stripe-Version`
    pub api_version: String,

    /// Timeout for each call to Stripe
    pub timeout: Duration,
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `STRIPE_KEY` (or `STRIPE_SECRET_KEY`)
    ///
    /// Optional:
    /// - `STRIPE_API_BASE_URL`
    /// - `STRIPE_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, CheckoutError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CheckoutError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("STRIPE_KEY")
            .or_else(|| lookup("STRIPE_SECRET_KEY"))
            .filter(|k| !k.is_empty())
            .ok_or_else(|| CheckoutError::Configuration("STRIPE_KEY not set".to_string()))?;

        if !is_secret_key(&secret_key) {
            return Err(CheckoutError::Configuration(
                "STRIPE_KEY must start with sk_ or rk_".to_string(),
            ));
        }

        let timeout = match lookup("STRIPE_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                CheckoutError::Configuration(format!("invalid STRIPE_TIMEOUT_SECS: {}", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let mut config = Self::new(secret_key).with_timeout(Duration::from_secs(timeout));
        if let Some(url) = lookup("STRIPE_API_BASE_URL") {
            config = config.with_api_base_url(url);
        }
        Ok(config)
    }

    /// Create config with an explicit key (for testing)
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_") || self.secret_key.starts_with("rk_test_")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder: set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn is_secret_key(key: &str) -> bool {
    key.starts_with("sk_") || key.starts_with("rk_")
}
