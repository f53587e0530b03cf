//! Purchase status state machine.
//!
//! A purchase starts pending and resolves exactly once, to completed or
//! failed. Both outcomes are terminal: a failed purchase is never re-opened,
//! the user retries by creating a brand-new purchase record.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a purchase record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    /// Initial state: intent created, payment not yet confirmed.
    /// No access granted.
    Pending,

    /// Payment confirmed. Grants full access.
    Completed,

    /// Payment declined. No access; re-attempt requires a new record.
    Failed,
}

impl PurchaseStatus {
    /// Returns true if this status grants access to the full content.
    ///
    /// Only `Completed` grants access; `Pending` and `Failed` do not.
    pub fn grants_access(&self) -> bool {
        matches!(self, PurchaseStatus::Completed)
    }

    /// Returns true once the purchase has been resolved either way.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, PurchaseStatus::Pending)
    }
}

impl StateMachine for PurchaseStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PurchaseStatus::*;
        matches!((self, target), (Pending, Completed) | (Pending, Failed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PurchaseStatus::*;
        match self {
            Pending => vec![Completed, Failed],
            Completed => vec![],
            Failed => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pending_can_complete() {
        let status = PurchaseStatus::Pending;
        assert!(status.can_transition_to(&PurchaseStatus::Completed));
        assert_eq!(
            status.transition_to(PurchaseStatus::Completed),
            Ok(PurchaseStatus::Completed)
        );
    }

    #[test]
    fn pending_can_fail() {
        let status = PurchaseStatus::Pending;
        assert_eq!(
            status.transition_to(PurchaseStatus::Failed),
            Ok(PurchaseStatus::Failed)
        );
    }

    #[test]
    fn completed_is_terminal() {
        assert!(PurchaseStatus::Completed.is_terminal());
        assert!(PurchaseStatus::Completed
            .transition_to(PurchaseStatus::Failed)
            .is_err());
    }

    #[test]
    fn failed_is_terminal() {
        assert!(PurchaseStatus::Failed.is_terminal());
        assert!(PurchaseStatus::Failed
            .transition_to(PurchaseStatus::Completed)
            .is_err());
    }

    #[test]
    fn only_completed_grants_access() {
        assert!(PurchaseStatus::Completed.grants_access());
        assert!(!PurchaseStatus::Pending.grants_access());
        assert!(!PurchaseStatus::Failed.grants_access());
    }

    #[test]
    fn resolved_means_not_pending() {
        assert!(!PurchaseStatus::Pending.is_resolved());
        assert!(PurchaseStatus::Completed.is_resolved());
        assert!(PurchaseStatus::Failed.is_resolved());
    }

    fn any_status() -> impl Strategy<Value = PurchaseStatus> {
        prop_oneof![
            Just(PurchaseStatus::Pending),
            Just(PurchaseStatus::Completed),
            Just(PurchaseStatus::Failed),
        ]
    }

    proptest! {
        // No transition ever leaves a resolved state.
        #[test]
        fn resolved_states_admit_no_transition(from in any_status(), to in any_status()) {
            if from.is_resolved() {
                prop_assert!(!from.can_transition_to(&to));
            }
        }

        #[test]
        fn valid_transitions_agree_with_can_transition_to(from in any_status(), to in any_status()) {
            let listed = from.valid_transitions().contains(&to);
            prop_assert_eq!(listed, from.can_transition_to(&to));
        }
    }
}
