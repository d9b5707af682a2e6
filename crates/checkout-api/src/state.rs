//! # Application State
//!
//! Shared state for the Axum application.
//! Built once at startup and cloned into every request; nothing in it is
//! mutated afterwards.

use checkout_core::{BoxedPaymentIntentProvider, PriceTable};
use checkout_stripe::{StripeConfig, StripePaymentIntents};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4242;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Upper bound on handling a single request
    pub request_timeout: Duration,
    /// Explicit price table file; the usual locations are searched when unset
    pub price_table_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from environment variables (and `.env`)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(p) => p
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid PORT: {}", p))?,
            None => DEFAULT_PORT,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(t) => Duration::from_secs(
                t.parse()
                    .map_err(|_| anyhow::anyhow!("invalid REQUEST_TIMEOUT_SECS: {}", t))?,
            ),
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            request_timeout,
            price_table_path: lookup("PRICE_TABLE_PATH").map(PathBuf::from),
            log_format,
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid HOST: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            price_table_path: None,
            log_format: LogFormat::Text,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment processor
    pub provider: BoxedPaymentIntentProvider,
    /// Product prices
    pub price_table: Arc<PriceTable>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by Stripe
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let price_table = load_price_table(&config)?;

        let stripe_config = StripeConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;
        check_timeouts(&stripe_config, &config)?;
        tracing::info!(
            "Stripe mode: {}",
            if stripe_config.is_test_mode() { "test" } else { "live" }
        );

        let stripe = StripePaymentIntents::new(stripe_config)
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        Ok(Self::with_provider(config, price_table, Arc::new(stripe)))
    }

    /// Assemble state from explicit parts
    pub fn with_provider(
        config: AppConfig,
        price_table: PriceTable,
        provider: BoxedPaymentIntentProvider,
    ) -> Self {
        Self {
            provider,
            price_table: Arc::new(price_table),
            config,
        }
    }
}

/// The Stripe call must give up before the request does, otherwise a hung
/// call surfaces as a bare 408 instead of the provider error.
pub fn check_timeouts(stripe: &StripeConfig, config: &AppConfig) -> anyhow::Result<()> {
    if stripe.timeout >= config.request_timeout {
        anyhow::bail!(
            "STRIPE_TIMEOUT_SECS ({}s) must be shorter than REQUEST_TIMEOUT_SECS ({}s)",
            stripe.timeout.as_secs(),
            config.request_timeout.as_secs()
        );
    }
    Ok(())
}

/// Load the price table from config, falling back to the built-in prices
pub fn load_price_table(config: &AppConfig) -> anyhow::Result<PriceTable> {
    if let Some(path) = &config.price_table_path {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let table = PriceTable::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded {} prices from {}", table.len(), path.display());
        return Ok(table);
    }

    let config_paths = [
        "config/products.toml",
        "../config/products.toml",
        "../../config/products.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let table = PriceTable::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded {} prices from {}", table.len(), path);
            return Ok(table);
        }
    }

    tracing::warn!("No price table found, using built-in prices");
    Ok(PriceTable::default())
}
