//! Payment gateway port.
//!
//! Defines the capability contract for payment processing: submit an
//! intent, later confirm it. The demo adapter satisfies it with a weighted
//! random outcome; a production adapter would satisfy the same interface
//! via a real gateway's confirmation flow. Handlers and the access gate
//! never depend on which implementation is wired in.

use crate::domain::foundation::{Currency, PaymentIntentId, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for payment gateway integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment intent for the given amount.
    ///
    /// Returns the gateway's intent id and an opaque client secret for the
    /// client-side payment form.
    async fn create_intent(
        &self,
        request: CreateIntentRequest,
    ) -> Result<PaymentIntent, GatewayError>;

    /// Ask the gateway whether the payment behind an intent went through.
    async fn confirm_intent(
        &self,
        intent_id: &PaymentIntentId,
    ) -> Result<GatewayOutcome, GatewayError>;
}

/// Request to create a payment intent.
#[derive(Debug, Clone)]
pub struct CreateIntentRequest {
    /// Internal user ID, attached as gateway metadata.
    pub user_id: UserId,

    /// Amount in minor currency units (cents).
    pub amount_minor: i64,

    /// Currency code.
    pub currency: Currency,
}

/// A payment intent issued by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Gateway's intent id (`pi_` prefixed).
    pub id: PaymentIntentId,

    /// Opaque token for the client-side payment form.
    pub client_secret: String,
}

/// Outcome of a confirmation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayOutcome {
    /// The payment went through.
    Approved,

    /// The gateway declined the payment.
    Declined { reason: String },
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// The gateway could not be reached.
    #[error("gateway unreachable: {0}")]
    Unreachable(String),

    /// The gateway rejected the request itself (not the payment).
    #[error("gateway rejected request: {0}")]
    InvalidRequest(String),
}

impl GatewayError {
    pub fn unreachable(message: impl Into<String>) -> Self {
        GatewayError::Unreachable(message.into())
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        GatewayError::InvalidRequest(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn gateway_error_displays_reason() {
        let err = GatewayError::unreachable("connection reset");
        assert_eq!(err.to_string(), "gateway unreachable: connection reset");
    }

    #[test]
    fn outcomes_compare_by_variant() {
        assert_eq!(GatewayOutcome::Approved, GatewayOutcome::Approved);
        assert_ne!(
            GatewayOutcome::Approved,
            GatewayOutcome::Declined {
                reason: "declined".to_string()
            }
        );
    }
}
