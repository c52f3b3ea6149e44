//! Chat completion relay.
//!
//! POST /chat with `{"userInput": "..."}`.
//!
//! Forwards the caller's text, prefixed by a fixed system instruction, to
//! the completion service and relays the first candidate back trimmed.
//! The input is passed through unvalidated; a missing field is forwarded
//! as the empty string and the upstream service decides what to do with it.

use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::server::app::AxumAppState;

/// System instruction sent with every conversation.
pub const SYSTEM_PROMPT: &str = "You are a kind, patient, and empathetic chatbot designed to provide emotional support and helpful coping strategies for neurodivergent individuals. You are not a doctor or therapist but a supportive friend who listens and responds warmly.";

#[derive(Debug, Deserialize)]
pub struct ChatRequestBody {
    #[serde(rename = "userInput", default)]
    pub user_input: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct ChatError {
    pub error: String,
}

/// Chat endpoint.
///
/// Returns 200 with the trimmed reply, or 500 with a generic error body.
/// The underlying failure is logged, never surfaced to the caller.
pub async fn chat_handler(
    Extension(state): Extension<AxumAppState>,
    Json(body): Json<ChatRequestBody>,
) -> Result<Json<ChatReply>, (StatusCode, Json<ChatError>)> {
    match state
        .deps
        .completion
        .complete(SYSTEM_PROMPT, &body.user_input)
        .await
    {
        Ok(reply) => Ok(Json(ChatReply {
            reply: reply.trim().to_string(),
        })),
        Err(e) => {
            tracing::error!(error = %e, "Error with OpenAI API");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatError {
                    error: "Failed to generate response".to_string(),
                }),
            ))
        }
    }
}
