//! Purchase-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Unauthorized | 401 |
//! | PaymentDeclined | 400 |
//! | ValidationFailed | 400 |
//! | IntentNotFound | 404 |
//! | AlreadyResolved | 409 |
//! | Persistence | 500 |
//! | Gateway | 502 |

use crate::domain::foundation::{DomainError, ErrorCode, PaymentIntentId, ValidationError};

/// Errors raised by the purchase services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// The caller is not authenticated.
    Unauthorized,

    /// The gateway declined the payment. The user may retry with a new
    /// purchase; the failed record stays failed.
    PaymentDeclined { reason: String },

    /// No purchase record matches the intent for this user.
    IntentNotFound(PaymentIntentId),

    /// The matching purchase was already resolved to a terminal status.
    AlreadyResolved(PaymentIntentId),

    /// Request input failed validation.
    ValidationFailed { field: String, message: String },

    /// A write to the entitlement store failed.
    Persistence(String),

    /// The payment gateway could not be reached or errored.
    Gateway(String),
}

impl PurchaseError {
    pub fn unauthorized() -> Self {
        PurchaseError::Unauthorized
    }

    pub fn payment_declined(reason: impl Into<String>) -> Self {
        PurchaseError::PaymentDeclined {
            reason: reason.into(),
        }
    }

    pub fn intent_not_found(id: PaymentIntentId) -> Self {
        PurchaseError::IntentNotFound(id)
    }

    pub fn already_resolved(id: PaymentIntentId) -> Self {
        PurchaseError::AlreadyResolved(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PurchaseError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        PurchaseError::Persistence(message.into())
    }

    pub fn gateway(message: impl Into<String>) -> Self {
        PurchaseError::Gateway(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PurchaseError::Unauthorized => ErrorCode::Unauthorized,
            PurchaseError::PaymentDeclined { .. } => ErrorCode::PaymentDeclined,
            PurchaseError::IntentNotFound(_) => ErrorCode::PurchaseNotFound,
            PurchaseError::AlreadyResolved(_) => ErrorCode::AlreadyResolved,
            PurchaseError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PurchaseError::Persistence(_) => ErrorCode::DatabaseError,
            PurchaseError::Gateway(_) => ErrorCode::ExternalServiceError,
        }
    }

    /// Returns a user-facing message for this error.
    ///
    /// Persistence and gateway details are kept out of the message; they
    /// are only logged server-side.
    pub fn message(&self) -> String {
        match self {
            PurchaseError::Unauthorized => "Unauthorized".to_string(),
            PurchaseError::PaymentDeclined { .. } => {
                "Payment failed. Please try again.".to_string()
            }
            PurchaseError::IntentNotFound(id) => {
                format!("No purchase found for payment intent {}", id)
            }
            PurchaseError::AlreadyResolved(id) => {
                format!("Payment intent {} was already resolved", id)
            }
            PurchaseError::ValidationFailed { field, message } => {
                format!("Invalid {}: {}", field, message)
            }
            PurchaseError::Persistence(_) => "Failed to update purchase record".to_string(),
            PurchaseError::Gateway(_) => "Payment service unavailable".to_string(),
        }
    }
}

impl std::fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

impl std::error::Error for PurchaseError {}

impl From<DomainError> for PurchaseError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DatabaseError => PurchaseError::Persistence(err.message),
            ErrorCode::Unauthorized => PurchaseError::Unauthorized,
            _ => PurchaseError::Persistence(err.to_string()),
        }
    }
}

impl From<ValidationError> for PurchaseError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field } => field.clone(),
            ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        PurchaseError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent() -> PaymentIntentId {
        PaymentIntentId::new("pi_test_1").unwrap()
    }

    #[test]
    fn codes_map_by_variant() {
        assert_eq!(PurchaseError::unauthorized().code(), ErrorCode::Unauthorized);
        assert_eq!(
            PurchaseError::payment_declined("declined").code(),
            ErrorCode::PaymentDeclined
        );
        assert_eq!(
            PurchaseError::intent_not_found(intent()).code(),
            ErrorCode::PurchaseNotFound
        );
        assert_eq!(
            PurchaseError::already_resolved(intent()).code(),
            ErrorCode::AlreadyResolved
        );
        assert_eq!(
            PurchaseError::persistence("insert failed").code(),
            ErrorCode::DatabaseError
        );
    }

    #[test]
    fn persistence_message_hides_details() {
        let err = PurchaseError::persistence("connection refused to db-host:5432");
        assert!(!err.message().contains("db-host"));
    }

    #[test]
    fn declined_message_tells_user_to_retry() {
        let err = PurchaseError::payment_declined("card_declined");
        assert_eq!(err.message(), "Payment failed. Please try again.");
    }

    #[test]
    fn domain_database_error_becomes_persistence() {
        let err: PurchaseError = DomainError::database("insert failed").into();
        assert!(matches!(err, PurchaseError::Persistence(_)));
    }

    #[test]
    fn validation_error_keeps_field_name() {
        let err: PurchaseError = ValidationError::empty_field("amount").into();
        assert!(matches!(
            err,
            PurchaseError::ValidationFailed { ref field, .. } if field == "amount"
        ));
    }
}
