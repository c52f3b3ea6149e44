//! Minimal PayPal REST API client.
//!
//! Covers the redirect-based payment flow of the payments v1 API: obtain an
//! OAuth2 token via the client-credentials grant, create a payment, and
//! execute it once the payer has approved. Nothing else.
//!
//! # Example
//!
//! ```rust,ignore
//! use paypal::{Mode, PayPalOptions, PayPalService};
//!
//! let service = PayPalService::new(PayPalOptions {
//!     client_id: std::env::var("PAYPAL_CLIENT_ID")?,
//!     client_secret: std::env::var("PAYPAL_CLIENT_SECRET")?,
//!     mode: Mode::Sandbox,
//! });
//!
//! let payment = service.create_payment(&request).await?;
//! let approval = payment.approval_url();
//! ```

pub mod error;
pub mod models;

pub use error::{PayPalError, Result};
pub use models::*;

use reqwest::Client;
use tracing::warn;

use crate::models::TokenResponse;

/// Credentials and environment for a PayPal REST application.
#[derive(Debug, Clone)]
pub struct PayPalOptions {
    pub client_id: String,
    pub client_secret: String,
    pub mode: Mode,
}

/// PayPal REST API client.
#[derive(Debug, Clone)]
pub struct PayPalService {
    options: PayPalOptions,
    http_client: Client,
    base_url: String,
}

impl PayPalService {
    pub fn new(options: PayPalOptions) -> Self {
        let base_url = options.mode.base_url().to_string();
        Self {
            options,
            http_client: Client::new(),
            base_url,
        }
    }

    /// Override the REST base URL (test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Fetch a bearer token via the client-credentials grant.
    ///
    /// Tokens are requested per call rather than cached; the process keeps no
    /// state between requests.
    async fn access_token(&self) -> Result<String> {
        let response = self
            .http_client
            .post(format!("{}/v1/oauth2/token", self.base_url))
            .basic_auth(&self.options.client_id, Some(&self.options.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "PayPal token request failed");
                PayPalError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "PayPal token error");
            return Err(PayPalError::Api(format!("PayPal token error: {}", error_text)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| PayPalError::Parse(e.to_string()))?;

        Ok(token.access_token)
    }

    /// Create a payment and return the provider's payment resource,
    /// including the link set carrying the approval redirect.
    pub async fn create_payment(&self, request: &CreatePayment) -> Result<Payment> {
        let token = self.access_token().await?;

        let response = self
            .http_client
            .post(format!("{}/v1/payments/payment", self.base_url))
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "PayPal create request failed");
                PayPalError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "PayPal create error");
            return Err(PayPalError::Api(format!("PayPal create error: {}", error_text)));
        }

        response
            .json::<Payment>()
            .await
            .map_err(|e| PayPalError::Parse(e.to_string()))
    }

    /// Execute a previously created, payer-approved payment.
    pub async fn execute_payment(
        &self,
        payment_id: &str,
        request: &ExecutePayment,
    ) -> Result<Payment> {
        let token = self.access_token().await?;

        let response = self
            .http_client
            .post(format!(
                "{}/v1/payments/payment/{}/execute",
                self.base_url, payment_id
            ))
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "PayPal execute request failed");
                PayPalError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "PayPal execute error");
            return Err(PayPalError::Api(format!(
                "PayPal execute error: {}",
                error_text
            )));
        }

        response
            .json::<Payment>()
            .await
            .map_err(|e| PayPalError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_uses_mode_base_url() {
        let service = PayPalService::new(PayPalOptions {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            mode: Mode::Sandbox,
        });
        assert_eq!(service.base_url, "https://api.sandbox.paypal.com");

        let service = PayPalService::new(PayPalOptions {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            mode: Mode::Live,
        });
        assert_eq!(service.base_url, "https://api.paypal.com");
    }

    #[test]
    fn test_base_url_override() {
        let service = PayPalService::new(PayPalOptions {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            mode: Mode::Sandbox,
        })
        .with_base_url("http://localhost:9900");
        assert_eq!(service.base_url, "http://localhost:9900");
    }
}
