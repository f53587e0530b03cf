//! Purchase aggregate - one attempted purchase of the ebook.

use crate::domain::foundation::{
    Money, PaymentIntentId, PurchaseId, StateMachine, Timestamp, UserId, ValidationError,
};

use super::PurchaseStatus;

/// One purchase attempt, keyed by user and payment intent.
///
/// Created pending by the intent service, resolved exactly once by the
/// confirmation service, never deleted, never re-opened.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub id: PurchaseId,
    pub user_id: UserId,
    pub payment_intent_id: PaymentIntentId,
    pub ebook_title: String,
    pub amount: Money,
    pub status: PurchaseStatus,
    /// Set only on the transition to `Completed`.
    pub purchase_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Purchase {
    /// Creates a new pending purchase for the given user and intent.
    pub fn create_pending(
        user_id: UserId,
        payment_intent_id: PaymentIntentId,
        ebook_title: impl Into<String>,
        amount: Money,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: PurchaseId::new(),
            user_id,
            payment_intent_id,
            ebook_title: ebook_title.into(),
            amount,
            status: PurchaseStatus::Pending,
            purchase_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the purchase completed and stamps the purchase date.
    pub fn complete(&mut self, at: Timestamp) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(PurchaseStatus::Completed)?;
        self.purchase_date = Some(at);
        self.updated_at = at;
        Ok(())
    }

    /// Marks the purchase failed. No further detail is captured.
    pub fn fail(&mut self) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(PurchaseStatus::Failed)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Returns true if this record grants the owning user full access.
    pub fn grants_access(&self) -> bool {
        self.status.grants_access()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Currency;

    fn test_purchase() -> Purchase {
        Purchase::create_pending(
            UserId::new("user-a").unwrap(),
            PaymentIntentId::new("pi_test_1").unwrap(),
            "Master Modern Development with AI-Powered Coding",
            Money::from_minor_units(4900, Currency::usd()).unwrap(),
        )
    }

    #[test]
    fn create_pending_starts_without_purchase_date() {
        let p = test_purchase();
        assert_eq!(p.status, PurchaseStatus::Pending);
        assert!(p.purchase_date.is_none());
        assert!(!p.grants_access());
    }

    #[test]
    fn complete_stamps_purchase_date() {
        let mut p = test_purchase();
        let now = Timestamp::now();
        p.complete(now).unwrap();

        assert_eq!(p.status, PurchaseStatus::Completed);
        assert_eq!(p.purchase_date, Some(now));
        assert!(p.grants_access());
    }

    #[test]
    fn fail_leaves_purchase_date_unset() {
        let mut p = test_purchase();
        p.fail().unwrap();

        assert_eq!(p.status, PurchaseStatus::Failed);
        assert!(p.purchase_date.is_none());
        assert!(!p.grants_access());
    }

    #[test]
    fn complete_twice_is_rejected() {
        let mut p = test_purchase();
        p.complete(Timestamp::now()).unwrap();
        assert!(p.complete(Timestamp::now()).is_err());
    }

    #[test]
    fn failed_purchase_cannot_be_completed() {
        let mut p = test_purchase();
        p.fail().unwrap();
        assert!(p.complete(Timestamp::now()).is_err());
        assert!(p.purchase_date.is_none());
    }
}
