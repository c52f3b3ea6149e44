// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Request handlers decide what to prompt for and what to charge; these
// traits only model the upstream calls.
//
// Naming convention: Base* for trait names (e.g., BaseCompletion)

use anyhow::Result;
use async_trait::async_trait;

use paypal::{CreatePayment, ExecutePayment, Payment};

// =============================================================================
// Completion Trait (Infrastructure - text generation)
// =============================================================================

#[async_trait]
pub trait BaseCompletion: Send + Sync {
    /// Generate a reply to a two-message conversation: a fixed system
    /// instruction plus the user's text. Returns the raw candidate text.
    async fn complete(&self, system_prompt: &str, user_input: &str) -> Result<String>;
}

// =============================================================================
// Payment Gateway Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BasePaymentGateway: Send + Sync {
    /// Create a payment and return the provider's payment resource,
    /// including the link set carrying the approval redirect.
    async fn create_payment(&self, request: &CreatePayment) -> Result<Payment>;

    /// Execute a previously created, payer-approved payment.
    async fn execute_payment(
        &self,
        payment_id: &str,
        request: &ExecutePayment,
    ) -> Result<Payment>;
}
