//! ListPurchasesHandler - purchase history for the signed-in user.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::purchase::PurchaseError;
use crate::ports::{PurchaseReader, PurchaseView};

#[derive(Debug, Clone)]
pub struct ListPurchasesQuery {
    pub user: AuthenticatedUser,
}

#[derive(Debug, Clone)]
pub struct ListPurchasesResult {
    pub purchases: Vec<PurchaseView>,
}

/// Returns every purchase row belonging to the user, newest first.
/// Includes pending and failed attempts so the account page can show
/// the full history, not just entitlements.
pub struct ListPurchasesHandler {
    reader: Arc<dyn PurchaseReader>,
}

impl ListPurchasesHandler {
    pub fn new(reader: Arc<dyn PurchaseReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListPurchasesQuery,
    ) -> Result<ListPurchasesResult, PurchaseError> {
        let purchases = self
            .reader
            .list_for_user(&query.user.id)
            .await
            .map_err(|e| PurchaseError::persistence(e.to_string()))?;

        Ok(ListPurchasesResult { purchases })
    }
}
