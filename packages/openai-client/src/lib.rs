//! Pure OpenAI REST API client
//!
//! A minimal client for the OpenAI chat completions API with no
//! domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{ChatCompletionRequest, Message, OpenAIClient};
//!
//! let client = OpenAIClient::from_env()?;
//!
//! let completion = client
//!     .chat_completion(
//!         ChatCompletionRequest::new("gpt-4o-mini")
//!             .message(Message::system("You are a helpful assistant"))
//!             .message(Message::user("Hello!"))
//!             .max_tokens(200)
//!             .temperature(0.7),
//!     )
//!     .await?;
//!
//! println!("{}", completion.content);
//! ```

pub mod error;
pub mod types;

pub use error::{OpenAIError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// OpenAI API client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| OpenAIError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for Azure, proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Chat completion.
    ///
    /// Sends the conversation to the chat completions endpoint and returns
    /// the first candidate's content. A response with no candidates is an
    /// `Api` error rather than a panic.
    pub async fn chat_completion(&self, request: ChatCompletionRequest) -> Result<ChatCompletion> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI API error");
            return Err(OpenAIError::Api(format!("OpenAI API error: {}", error_text)));
        }

        let raw: types::ChatCompletionRaw = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        let content = raw
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| OpenAIError::Api("No response from OpenAI".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "OpenAI chat completion"
        );

        Ok(ChatCompletion {
            content,
            usage: raw.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = OpenAIClient::new("sk-test").with_base_url("https://custom.api.com");

        assert_eq!(client.api_key, "sk-test");
        assert_eq!(client.base_url, "https://custom.api.com");
    }
}
