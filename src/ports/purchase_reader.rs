//! Purchase reader port - read-only queries for page rendering.
//!
//! The access gate lives here: a pure derivation over the entitlement
//! store, re-evaluated on every call, never cached.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Money, PaymentIntentId, PurchaseId, Timestamp, UserId};
use crate::domain::purchase::PurchaseStatus;

/// Read model of a purchase row, shaped for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseView {
    pub id: PurchaseId,
    pub payment_intent_id: PaymentIntentId,
    pub ebook_title: String,
    pub amount: Money,
    pub status: PurchaseStatus,
    pub purchase_date: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Port for read-only purchase queries.
#[async_trait]
pub trait PurchaseReader: Send + Sync {
    /// The access gate: true iff at least one completed purchase exists
    /// for the user.
    async fn has_completed_purchase(&self, user_id: &UserId) -> Result<bool, DomainError>;

    /// List the user's purchases, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<PurchaseView>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn PurchaseReader) {}
    }
}
