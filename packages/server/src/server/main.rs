// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use openai_client::OpenAIClient;
use paypal::{PayPalOptions, PayPalService};
use server_core::kernel::{CompletionRelay, PayPalGatewayAdapter, ServerDeps};
use server_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Haven Chat API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(mode = ?config.paypal_mode, "Configuration loaded");

    // Construct upstream clients once and share them by Arc; no ambient
    // global client state.
    let openai_client = Arc::new(OpenAIClient::new(config.openai_api_key));
    let paypal_service = Arc::new(PayPalService::new(PayPalOptions {
        client_id: config.paypal_client_id,
        client_secret: config.paypal_client_secret,
        mode: config.paypal_mode,
    }));

    let deps = Arc::new(ServerDeps::new(
        Arc::new(CompletionRelay::new(openai_client)),
        Arc::new(PayPalGatewayAdapter::new(paypal_service)),
    ));

    // Build application
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Server running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
