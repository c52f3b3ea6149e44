// Mock implementations for testing
//
// Provides mock upstream services that can be injected into ServerDeps
// for tests. Lives in the library (not behind cfg(test)) so integration
// tests under tests/ can use it.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use paypal::{Amount, CreatePayment, ExecutePayment, Link, Payment};

use super::{BaseCompletion, BasePaymentGateway};

// =============================================================================
// Mock Completion
// =============================================================================

/// Arguments captured from a complete call
#[derive(Debug, Clone)]
pub struct CompletionCallArgs {
    pub system_prompt: String,
    pub user_input: String,
}

pub struct MockCompletion {
    reply: Option<String>,
    echo: bool,
    fail: bool,
    calls: Arc<Mutex<Vec<CompletionCallArgs>>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self {
            reply: None,
            echo: false,
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answer with the given text
    pub fn with_reply(mut self, reply: &str) -> Self {
        self.reply = Some(reply.to_string());
        self
    }

    /// Answer with "echo: {user_input}" so callers can tell replies apart
    pub fn echoing(mut self) -> Self {
        self.echo = true;
        self
    }

    /// Fail every call
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Arguments of every complete call so far
    pub fn calls(&self) -> Vec<CompletionCallArgs> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseCompletion for MockCompletion {
    async fn complete(&self, system_prompt: &str, user_input: &str) -> Result<String> {
        self.calls.lock().unwrap().push(CompletionCallArgs {
            system_prompt: system_prompt.to_string(),
            user_input: user_input.to_string(),
        });

        if self.fail {
            anyhow::bail!("mock completion failure");
        }
        if self.echo {
            return Ok(format!("echo: {}", user_input));
        }
        Ok(self.reply.clone().unwrap_or_else(|| "mock reply".to_string()))
    }
}

// =============================================================================
// Mock Payment Gateway
// =============================================================================

/// Arguments captured from an execute_payment call
#[derive(Debug, Clone)]
pub struct ExecuteCallArgs {
    pub payment_id: String,
    pub payer_id: String,
    pub amounts: Vec<Amount>,
}

pub struct MockPaymentGateway {
    approval_url: Option<String>,
    fail_create: bool,
    fail_execute: bool,
    create_calls: Arc<Mutex<Vec<CreatePayment>>>,
    execute_calls: Arc<Mutex<Vec<ExecuteCallArgs>>>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self {
            approval_url: Some("https://www.sandbox.paypal.com/approve/EC-TEST".to_string()),
            fail_create: false,
            fail_execute: false,
            create_calls: Arc::new(Mutex::new(Vec::new())),
            execute_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the approval URL returned from create_payment
    pub fn with_approval_url(mut self, url: &str) -> Self {
        self.approval_url = Some(url.to_string());
        self
    }

    /// Return a link set with no approval link from create_payment
    pub fn without_approval_url(mut self) -> Self {
        self.approval_url = None;
        self
    }

    /// Fail every create_payment call
    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Fail every execute_payment call
    pub fn failing_execute(mut self) -> Self {
        self.fail_execute = true;
        self
    }

    /// Every create_payment request so far
    pub fn create_calls(&self) -> Vec<CreatePayment> {
        self.create_calls.lock().unwrap().clone()
    }

    /// Every execute_payment request so far
    pub fn execute_calls(&self) -> Vec<ExecuteCallArgs> {
        self.execute_calls.lock().unwrap().clone()
    }
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePaymentGateway for MockPaymentGateway {
    async fn create_payment(&self, request: &CreatePayment) -> Result<Payment> {
        self.create_calls.lock().unwrap().push(request.clone());

        if self.fail_create {
            anyhow::bail!("mock create failure");
        }

        let mut links = vec![Link {
            href: "https://api.sandbox.paypal.com/v1/payments/payment/PAY-MOCK".to_string(),
            rel: "self".to_string(),
            method: Some("GET".to_string()),
        }];
        if let Some(url) = &self.approval_url {
            links.push(Link {
                href: url.clone(),
                rel: "approval_url".to_string(),
                method: Some("REDIRECT".to_string()),
            });
        }

        Ok(Payment {
            id: "PAY-MOCK".to_string(),
            state: Some("created".to_string()),
            links,
        })
    }

    async fn execute_payment(
        &self,
        payment_id: &str,
        request: &ExecutePayment,
    ) -> Result<Payment> {
        self.execute_calls.lock().unwrap().push(ExecuteCallArgs {
            payment_id: payment_id.to_string(),
            payer_id: request.payer_id.clone(),
            amounts: request
                .transactions
                .iter()
                .map(|t| t.amount.clone())
                .collect(),
        });

        if self.fail_execute {
            anyhow::bail!("mock execute failure");
        }

        Ok(Payment {
            id: payment_id.to_string(),
            state: Some("approved".to_string()),
            links: Vec::new(),
        })
    }
}
