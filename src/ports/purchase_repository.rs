//! Purchase repository port - writes against the entitlement store.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PaymentIntentId, Timestamp, UserId};
use crate::domain::purchase::Purchase;

/// How a pending purchase is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Payment went through; `purchase_date` must be stamped.
    Completed,

    /// Payment was declined; `purchase_date` stays unset.
    Failed,
}

/// Result of a guarded resolve update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveUpdate {
    /// Exactly one pending row was transitioned.
    Applied,

    /// No pending row matched the (intent, user) pair. Either the intent
    /// does not exist for this user, or it was already resolved.
    NoPendingMatch,
}

/// Port for persisting purchase records.
///
/// # Contract
///
/// - `insert` writes exactly one new pending row; failure leaves no
///   partial mutation.
/// - `resolve` is a single UPDATE whose predicate matches the payment
///   intent id AND the owning user AND `status = pending`. It must report
///   `NoPendingMatch` when zero rows were affected rather than succeed
///   silently; only the matching user can resolve an intent.
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    /// Insert a new pending purchase record.
    async fn insert(&self, purchase: &Purchase) -> Result<(), DomainError>;

    /// Transition the matching pending purchase to a terminal status.
    async fn resolve(
        &self,
        user_id: &UserId,
        intent_id: &PaymentIntentId,
        resolution: Resolution,
        purchase_date: Option<Timestamp>,
    ) -> Result<ResolveUpdate, DomainError>;

    /// Look up a purchase by intent id, scoped to the owning user.
    async fn find_by_intent(
        &self,
        user_id: &UserId,
        intent_id: &PaymentIntentId,
    ) -> Result<Option<Purchase>, DomainError>;
}
