//! CheckAccessHandler - the access gate.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::purchase::PurchaseError;
use crate::ports::PurchaseReader;

/// Query whether the user may see the full content.
#[derive(Debug, Clone)]
pub struct CheckAccessQuery {
    pub user: AuthenticatedUser,
}

/// Access gate result.
#[derive(Debug, Clone)]
pub struct CheckAccessResult {
    pub has_purchased: bool,
}

/// Read-only derivation over the entitlement store.
///
/// True iff at least one completed purchase exists for the user. Not
/// cached; page-rendering logic re-evaluates it on every navigation.
pub struct CheckAccessHandler {
    reader: Arc<dyn PurchaseReader>,
}

impl CheckAccessHandler {
    pub fn new(reader: Arc<dyn PurchaseReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: CheckAccessQuery) -> Result<CheckAccessResult, PurchaseError> {
        let has_purchased = self
            .reader
            .has_completed_purchase(&query.user.id)
            .await
            .map_err(|e| PurchaseError::persistence(e.to_string()))?;

        Ok(CheckAccessResult { has_purchased })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, UserId};
    use crate::ports::PurchaseView;
    use async_trait::async_trait;

    struct MockPurchaseReader {
        completed_users: Vec<String>,
    }

    #[async_trait]
    impl PurchaseReader for MockPurchaseReader {
        async fn has_completed_purchase(&self, user_id: &UserId) -> Result<bool, DomainError> {
            Ok(self.completed_users.iter().any(|u| u == user_id.as_str()))
        }

        async fn list_for_user(&self, _user_id: &UserId) -> Result<Vec<PurchaseView>, DomainError> {
            Ok(vec![])
        }
    }

    fn query(id: &str) -> CheckAccessQuery {
        CheckAccessQuery {
            user: AuthenticatedUser::new(
                UserId::new(id).unwrap(),
                format!("{id}@example.com"),
                None,
            ),
        }
    }

    #[tokio::test]
    async fn gate_opens_for_user_with_completed_purchase() {
        let handler = CheckAccessHandler::new(Arc::new(MockPurchaseReader {
            completed_users: vec!["user-a".to_string()],
        }));

        let result = handler.handle(query("user-a")).await.unwrap();
        assert!(result.has_purchased);
    }

    #[tokio::test]
    async fn gate_stays_closed_for_other_users() {
        let handler = CheckAccessHandler::new(Arc::new(MockPurchaseReader {
            completed_users: vec!["user-a".to_string()],
        }));

        let result = handler.handle(query("user-b")).await.unwrap();
        assert!(!result.has_purchased);
    }
}
