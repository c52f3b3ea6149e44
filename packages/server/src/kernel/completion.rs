// Completion implementation using OpenAI
//
// This is the infrastructure implementation of BaseCompletion.
// The system instruction itself lives with the chat route; this adapter
// owns the model selection and sampling parameters.

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{ChatCompletionRequest, Message, OpenAIClient};
use std::sync::Arc;

use super::BaseCompletion;

/// Model used for all chat replies.
const MODEL: &str = "gpt-4o-mini";

/// Completion length cap, in generated tokens.
const MAX_TOKENS: u32 = 200;

/// Sampling temperature.
const TEMPERATURE: f32 = 0.7;

/// OpenAI-backed completion relay
pub struct CompletionRelay {
    client: Arc<OpenAIClient>,
}

impl CompletionRelay {
    pub fn new(client: Arc<OpenAIClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BaseCompletion for CompletionRelay {
    async fn complete(&self, system_prompt: &str, user_input: &str) -> Result<String> {
        let request = ChatCompletionRequest::new(MODEL)
            .message(Message::system(system_prompt))
            .message(Message::user(user_input))
            .max_tokens(MAX_TOKENS)
            .temperature(TEMPERATURE);

        let completion = self
            .client
            .chat_completion(request)
            .await
            .context("OpenAI chat completion failed")?;

        Ok(completion.content)
    }
}
