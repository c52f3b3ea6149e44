// Haven Chat - API Core
//
// This crate provides the backend for the support chatbot: a completion
// relay in front of OpenAI and a PayPal redirect-based payment flow.

pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;
