//! Server dependencies for request handlers (using traits for testability)
//!
//! This module provides the central dependency container shared by all
//! request handlers. Both upstream services sit behind trait abstractions
//! so tests can inject mocks.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use paypal::{CreatePayment, ExecutePayment, Payment, PayPalService};

use crate::kernel::{BaseCompletion, BasePaymentGateway};

// =============================================================================
// PayPalService Adapter (implements BasePaymentGateway trait)
// =============================================================================

/// Wrapper around PayPalService that implements the BasePaymentGateway trait
pub struct PayPalGatewayAdapter(pub Arc<PayPalService>);

impl PayPalGatewayAdapter {
    pub fn new(service: Arc<PayPalService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BasePaymentGateway for PayPalGatewayAdapter {
    async fn create_payment(&self, request: &CreatePayment) -> Result<Payment> {
        self.0
            .create_payment(request)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }

    async fn execute_payment(
        &self,
        payment_id: &str,
        request: &ExecutePayment,
    ) -> Result<Payment> {
        self.0
            .execute_payment(payment_id, request)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to request handlers
#[derive(Clone)]
pub struct ServerDeps {
    /// Completion relay for chat replies
    pub completion: Arc<dyn BaseCompletion>,
    /// Payment gateway for the create/execute redirect flow
    pub payments: Arc<dyn BasePaymentGateway>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        completion: Arc<dyn BaseCompletion>,
        payments: Arc<dyn BasePaymentGateway>,
    ) -> Self {
        Self {
            completion,
            payments,
        }
    }
}
