//! Payment authorization flow.
//!
//! Three stages, each its own request, correlated only by the identifiers
//! PayPal threads through its redirect chain:
//!
//! 1. POST /pay       - create the payment, redirect the payer to PayPal
//! 2. GET  /success   - PayPal sent the payer back approved; execute
//! 3. GET  /cancel    - PayPal sent the payer back unapproved; acknowledge
//!
//! Nothing is persisted between stages and a repeated callback is executed
//! again; the provider is the only record of what happened.

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use paypal::{Amount, CreatePayment, ExecutePayment, Item, ItemList, Payer, RedirectUrls, Transaction};

use crate::server::app::AxumAppState;

/// Subscription price. Used verbatim at creation and again at execution;
/// the two must stay in sync.
const SUBSCRIPTION_TOTAL: &str = "10.00";
const SUBSCRIPTION_CURRENCY: &str = "USD";

/// Where PayPal sends the payer's browser after the consent screen.
const RETURN_URL: &str = "http://localhost:5000/success";
const CANCEL_URL: &str = "http://localhost:5000/cancel";

/// Where the payer lands after a completed payment.
const UNLIMITED_CHAT_URL: &str = "http://localhost:5500/public/chat-unlimited.html";

/// 302 Found redirect, matching what the payer's browser expects from the
/// consent flow.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Payment creation endpoint.
///
/// Builds the fixed subscription payment and redirects the payer to the
/// provider's approval URL. A provider response without an approval link is
/// handled the same way as a failed call.
pub async fn pay_handler(Extension(state): Extension<AxumAppState>) -> Response {
    tracing::info!("Payment request received");

    let request = CreatePayment {
        intent: "sale".to_string(),
        payer: Payer {
            payment_method: "paypal".to_string(),
        },
        redirect_urls: RedirectUrls {
            return_url: RETURN_URL.to_string(),
            cancel_url: CANCEL_URL.to_string(),
        },
        transactions: vec![Transaction {
            amount: Amount::new(SUBSCRIPTION_CURRENCY, SUBSCRIPTION_TOTAL),
            description: Some("Subscription for chatbot access.".to_string()),
            item_list: Some(ItemList {
                items: vec![Item {
                    name: "Chatbot Subscription".to_string(),
                    sku: "001".to_string(),
                    price: SUBSCRIPTION_TOTAL.to_string(),
                    currency: SUBSCRIPTION_CURRENCY.to_string(),
                    quantity: 1,
                }],
            }),
        }],
    };

    match state.deps.payments.create_payment(&request).await {
        Ok(payment) => match payment.approval_url() {
            Some(url) => found(url),
            None => {
                tracing::error!(payment_id = %payment.id, "PayPal response missing approval_url link");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error creating payment").into_response()
            }
        },
        Err(e) => {
            tracing::error!(error = %e, "PayPal Error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error creating payment").into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SuccessQuery {
    /// Payer identifier appended by PayPal on the return redirect
    #[serde(rename = "PayerID", default)]
    pub payer_id: String,

    /// Payment identifier appended by PayPal on the return redirect
    #[serde(rename = "paymentId", default)]
    pub payment_id: String,
}

/// Return-redirect endpoint: the payer approved, so execute the payment.
///
/// The executed amount is the fixed subscription total, not re-read from
/// the created payment. Missing callback parameters are forwarded as empty
/// strings and rejected by the provider, not here.
pub async fn success_handler(
    Extension(state): Extension<AxumAppState>,
    Query(query): Query<SuccessQuery>,
) -> Response {
    let request = ExecutePayment {
        payer_id: query.payer_id,
        transactions: vec![Transaction {
            amount: Amount::new(SUBSCRIPTION_CURRENCY, SUBSCRIPTION_TOTAL),
            description: None,
            item_list: None,
        }],
    };

    match state
        .deps
        .payments
        .execute_payment(&query.payment_id, &request)
        .await
    {
        Ok(payment) => {
            tracing::info!(
                payment_id = %payment.id,
                state = payment.state.as_deref().unwrap_or("unknown"),
                "Payment successful"
            );
            found(UNLIMITED_CHAT_URL)
        }
        Err(e) => {
            tracing::error!(error = %e, "PayPal execute error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Payment failed").into_response()
        }
    }
}

/// Cancel-redirect endpoint. No state was created, so there is nothing to
/// clean up; acknowledge unconditionally.
pub async fn cancel_handler() -> &'static str {
    "Payment cancelled"
}
