//! HTTP DTOs (Data Transfer Objects) for the storefront endpoints.
//!
//! These types define the JSON request/response structure of the API.
//! The wire contract is camelCase throughout; amounts arrive as integer
//! minor units and leave as major-unit decimal strings.

use crate::domain::purchase::PurchaseStatus;
use crate::ports::PurchaseView;
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to open a purchase.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    /// Amount in minor currency units (cents).
    pub amount: i64,
    /// Currency code; the storefront default (usd) applies when absent.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Request to confirm a previously created payment intent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    pub payment_intent_id: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a freshly opened purchase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    /// Opaque token for the client-side payment form.
    pub client_secret: String,
    /// The intent id to pass back on confirmation.
    pub payment_intent_id: String,
}

/// Response for a successful confirmation.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmPaymentResponse {
    pub success: bool,
    pub message: String,
}

/// Error body for the confirm endpoint.
///
/// The confirm flow keeps the `{success, error}` shape so the payment
/// form can branch on a single boolean.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmPaymentErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Response for the access gate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessResponse {
    pub has_purchased: bool,
}

/// Response for the purchase history listing.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseListResponse {
    pub purchases: Vec<PurchaseItemResponse>,
}

/// One purchase row, shaped for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItemResponse {
    pub id: String,
    pub payment_intent_id: String,
    pub ebook_title: String,
    /// Major-unit decimal string, e.g. "49.00".
    pub amount: String,
    pub currency: String,
    pub status: PurchaseStatus,
    /// Set only for completed purchases (ISO 8601).
    pub purchase_date: Option<String>,
    /// When the purchase was opened (ISO 8601).
    pub created_at: String,
}

impl From<PurchaseView> for PurchaseItemResponse {
    fn from(view: PurchaseView) -> Self {
        Self {
            id: view.id.to_string(),
            payment_intent_id: view.payment_intent_id.as_str().to_string(),
            ebook_title: view.ebook_title,
            amount: view.amount.amount().to_string(),
            currency: view.amount.currency().as_str().to_string(),
            status: view.status,
            purchase_date: view
                .purchase_date
                .map(|t| t.as_datetime().to_rfc3339()),
            created_at: view.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response for the liveness probe.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Error code for programmatic handling.
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Currency, Money, PaymentIntentId, PurchaseId, Timestamp};

    // ════════════════════════════════════════════════════════════════════════════
    // Request DTO Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn create_payment_intent_request_deserializes() {
        let json = r#"{"amount": 4900}"#;
        let request: CreatePaymentIntentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, 4900);
        assert!(request.currency.is_none());
    }

    #[test]
    fn create_payment_intent_request_accepts_currency() {
        let json = r#"{"amount": 4900, "currency": "eur"}"#;
        let request: CreatePaymentIntentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.currency, Some("eur".to_string()));
    }

    #[test]
    fn confirm_payment_request_uses_camel_case() {
        let json = r#"{"paymentIntentId": "pi_123"}"#;
        let request: ConfirmPaymentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.payment_intent_id, "pi_123");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Response DTO Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn create_payment_intent_response_serializes_camel_case() {
        let response = CreatePaymentIntentResponse {
            client_secret: "pi_1_secret_x".to_string(),
            payment_intent_id: "pi_1".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""clientSecret":"pi_1_secret_x""#));
        assert!(json.contains(r#""paymentIntentId":"pi_1""#));
    }

    #[test]
    fn access_response_serializes_camel_case() {
        let response = AccessResponse {
            has_purchased: true,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"hasPurchased":true}"#);
    }

    #[test]
    fn confirm_error_response_carries_success_false() {
        let response = ConfirmPaymentErrorResponse {
            success: false,
            error: "Payment failed. Please try again.".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""success":false"#));
    }

    #[test]
    fn purchase_item_response_from_view() {
        let view = PurchaseView {
            id: PurchaseId::new(),
            payment_intent_id: PaymentIntentId::new("pi_1").unwrap(),
            ebook_title: "Master Modern Development with AI-Powered Coding".to_string(),
            amount: Money::from_minor_units(4900, Currency::usd()).unwrap(),
            status: PurchaseStatus::Completed,
            purchase_date: Some(Timestamp::now()),
            created_at: Timestamp::now(),
        };

        let response = PurchaseItemResponse::from(view);
        assert_eq!(response.amount, "49.00");
        assert_eq!(response.currency, "usd");
        assert!(response.purchase_date.is_some());
    }

    #[test]
    fn purchase_item_response_omits_date_for_unresolved() {
        let view = PurchaseView {
            id: PurchaseId::new(),
            payment_intent_id: PaymentIntentId::new("pi_2").unwrap(),
            ebook_title: "Master Modern Development with AI-Powered Coding".to_string(),
            amount: Money::from_minor_units(4900, Currency::usd()).unwrap(),
            status: PurchaseStatus::Pending,
            purchase_date: None,
            created_at: Timestamp::now(),
        };

        let response = PurchaseItemResponse::from(view);
        assert!(response.purchase_date.is_none());
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""status":"pending""#));
    }
}
