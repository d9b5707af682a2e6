//! # Forever Checkout
//!
//! Payment intent backend for the Forever storefront.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or put them in .env)
//! export STRIPE_KEY=sk_test_...
//! export PORT=4242
//!
//! # Run the server
//! forever-checkout
//! ```

use checkout_api::{routes, AppConfig, AppState, LogFormat};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    init_tracing(config.log_format);

    print_banner();

    let addr = config.socket_addr()?;
    let state = AppState::new(config)?;

    info!("Payment provider: {}", state.provider.provider_name());
    info!(
        "Prices loaded: {} ({})",
        state.price_table.len(),
        state.price_table.product_ids().join(", ")
    );

    let app = routes::create_router(state);

    info!("Listening on http://{}", addr);
    info!("Intent: POST http://{}/create-payment-intent", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let json = format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(fmt::layer))
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn print_banner() {
    println!(
        r#"
  Forever Checkout
  ━━━━━━━━━━━━━━━━━━━━━━━
  Payment intent service
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
