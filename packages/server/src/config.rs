use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;
use std::env;

use paypal::Mode;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openai_api_key: String,
    pub paypal_client_id: String,
    pub paypal_client_secret: String,
    pub paypal_mode: Mode,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let paypal_mode = env::var("PAYPAL_MODE").unwrap_or_else(|_| "sandbox".to_string());
        let paypal_mode = Mode::parse(&paypal_mode)
            .ok_or_else(|| anyhow!("PAYPAL_MODE must be \"sandbox\" or \"live\", got {:?}", paypal_mode))?;

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY must be set")?,
            paypal_client_id: env::var("PAYPAL_CLIENT_ID")
                .context("PAYPAL_CLIENT_ID must be set")?,
            paypal_client_secret: env::var("PAYPAL_CLIENT_SECRET")
                .context("PAYPAL_CLIENT_SECRET must be set")?,
            paypal_mode,
        })
    }
}
