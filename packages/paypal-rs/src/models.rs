//! PayPal REST API wire types (payments v1).

use serde::{Deserialize, Serialize};

/// API environment. Selects which REST base URL requests go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sandbox,
    Live,
}

impl Mode {
    /// REST base URL for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Mode::Sandbox => "https://api.sandbox.paypal.com",
            Mode::Live => "https://api.paypal.com",
        }
    }

    /// Parse from a configuration string ("sandbox" or "live").
    pub fn parse(s: &str) -> Option<Mode> {
        match s {
            "sandbox" => Some(Mode::Sandbox),
            "live" => Some(Mode::Live),
            _ => None,
        }
    }
}

// =============================================================================
// OAuth2
// =============================================================================

/// Response from the client-credentials token endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

// =============================================================================
// Payment creation
// =============================================================================

/// Payment creation request (`POST /v1/payments/payment`).
#[derive(Debug, Clone, Serialize)]
pub struct CreatePayment {
    /// Payment intent, e.g. "sale"
    pub intent: String,
    pub payer: Payer,
    pub redirect_urls: RedirectUrls,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Payer {
    /// Funding method, e.g. "paypal"
    pub payment_method: String,
}

/// Where the payer's browser is sent after granting or refusing consent.
#[derive(Debug, Clone, Serialize)]
pub struct RedirectUrls {
    pub return_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_list: Option<ItemList>,
}

/// Monetary amount. PayPal expects the total as a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Amount {
    pub currency: String,
    pub total: String,
}

impl Amount {
    pub fn new(currency: impl Into<String>, total: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            total: total.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemList {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub name: String,
    pub sku: String,
    pub price: String,
    pub currency: String,
    pub quantity: u32,
}

// =============================================================================
// Payment execution
// =============================================================================

/// Payment execution request (`POST /v1/payments/payment/{id}/execute`).
#[derive(Debug, Clone, Serialize)]
pub struct ExecutePayment {
    pub payer_id: String,
    pub transactions: Vec<Transaction>,
}

// =============================================================================
// Payment resource
// =============================================================================

/// Payment resource as returned by create and execute.
///
/// Only the fields this client consumes are modeled; the remainder of the
/// resource is ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Payment {
    pub id: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// HATEOAS link attached to a payment resource.
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
    #[serde(default)]
    pub method: Option<String>,
}

impl Payment {
    /// URL the payer must be sent to in order to approve the payment.
    ///
    /// Returns `None` when the provider did not include an "approval_url"
    /// link, which callers must treat as a malformed upstream response.
    pub fn approval_url(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel == "approval_url")
            .map(|link| link.href.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_base_urls() {
        assert_eq!(Mode::Sandbox.base_url(), "https://api.sandbox.paypal.com");
        assert_eq!(Mode::Live.base_url(), "https://api.paypal.com");
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse("sandbox"), Some(Mode::Sandbox));
        assert_eq!(Mode::parse("live"), Some(Mode::Live));
        assert_eq!(Mode::parse("production"), None);
    }

    #[test]
    fn test_approval_url_lookup() {
        let payment: Payment = serde_json::from_value(serde_json::json!({
            "id": "PAY-123",
            "state": "created",
            "links": [
                {"href": "https://api.sandbox.paypal.com/v1/payments/payment/PAY-123", "rel": "self", "method": "GET"},
                {"href": "https://www.sandbox.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token=EC-60U", "rel": "approval_url", "method": "REDIRECT"},
                {"href": "https://api.sandbox.paypal.com/v1/payments/payment/PAY-123/execute", "rel": "execute", "method": "POST"}
            ]
        }))
        .unwrap();

        assert_eq!(
            payment.approval_url(),
            Some("https://www.sandbox.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token=EC-60U")
        );
    }

    #[test]
    fn test_approval_url_absent() {
        let payment: Payment = serde_json::from_value(serde_json::json!({
            "id": "PAY-456",
            "links": [
                {"href": "https://api.sandbox.paypal.com/v1/payments/payment/PAY-456", "rel": "self"}
            ]
        }))
        .unwrap();

        assert_eq!(payment.approval_url(), None);
    }

    #[test]
    fn test_payment_without_links() {
        let payment: Payment =
            serde_json::from_value(serde_json::json!({"id": "PAY-789"})).unwrap();
        assert!(payment.links.is_empty());
        assert_eq!(payment.approval_url(), None);
    }

    #[test]
    fn test_create_payment_serialization() {
        let request = CreatePayment {
            intent: "sale".to_string(),
            payer: Payer {
                payment_method: "paypal".to_string(),
            },
            redirect_urls: RedirectUrls {
                return_url: "http://localhost:5000/success".to_string(),
                cancel_url: "http://localhost:5000/cancel".to_string(),
            },
            transactions: vec![Transaction {
                amount: Amount::new("USD", "10.00"),
                description: Some("Subscription for chatbot access.".to_string()),
                item_list: Some(ItemList {
                    items: vec![Item {
                        name: "Chatbot Subscription".to_string(),
                        sku: "001".to_string(),
                        price: "10.00".to_string(),
                        currency: "USD".to_string(),
                        quantity: 1,
                    }],
                }),
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["intent"], "sale");
        assert_eq!(json["payer"]["payment_method"], "paypal");
        assert_eq!(json["redirect_urls"]["return_url"], "http://localhost:5000/success");
        assert_eq!(json["transactions"][0]["amount"]["total"], "10.00");
        assert_eq!(json["transactions"][0]["item_list"]["items"][0]["sku"], "001");
    }

    #[test]
    fn test_execute_payment_omits_empty_fields() {
        let request = ExecutePayment {
            payer_id: "PAYER-1".to_string(),
            transactions: vec![Transaction {
                amount: Amount::new("USD", "10.00"),
                description: None,
                item_list: None,
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["payer_id"], "PAYER-1");
        let transaction = &json["transactions"][0];
        assert_eq!(transaction["amount"]["currency"], "USD");
        assert!(transaction.get("description").is_none());
        assert!(transaction.get("item_list").is_none());
    }
}
