//! CreatePaymentIntentHandler - opens the two-phase purchase flow.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, Currency, Money, PaymentIntentId};
use crate::domain::purchase::{Purchase, PurchaseError};
use crate::ports::{CreateIntentRequest, PaymentGateway, PurchaseRepository};

/// Command to create a payment intent for the ebook.
#[derive(Debug, Clone)]
pub struct CreatePaymentIntentCommand {
    pub user: AuthenticatedUser,
    /// Requested amount in minor currency units (cents).
    pub amount_minor: i64,
    /// Currency code; defaults to usd when absent.
    pub currency: Option<String>,
}

/// Result of a successful intent creation.
#[derive(Debug, Clone)]
pub struct CreatePaymentIntentResult {
    pub payment_intent_id: PaymentIntentId,
    pub client_secret: String,
}

/// Handler for opening a purchase.
///
/// Fabricates a payment intent through the gateway, then persists one
/// pending purchase record scoped to the caller. If the insert fails the
/// error is surfaced and no partial mutation remains; the gateway-side
/// intent is abandoned (it is a placeholder token with no real gateway
/// behind it).
pub struct CreatePaymentIntentHandler {
    repository: Arc<dyn PurchaseRepository>,
    gateway: Arc<dyn PaymentGateway>,
    ebook_title: String,
}

impl CreatePaymentIntentHandler {
    pub fn new(
        repository: Arc<dyn PurchaseRepository>,
        gateway: Arc<dyn PaymentGateway>,
        ebook_title: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            gateway,
            ebook_title: ebook_title.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: CreatePaymentIntentCommand,
    ) -> Result<CreatePaymentIntentResult, PurchaseError> {
        // 1. Validate amount and currency up front
        let currency = match cmd.currency {
            Some(code) => Currency::new(code)?,
            None => Currency::usd(),
        };
        let amount = Money::from_minor_units(cmd.amount_minor, currency.clone())?;

        // 2. Fabricate the intent at the gateway
        let intent = self
            .gateway
            .create_intent(CreateIntentRequest {
                user_id: cmd.user.id.clone(),
                amount_minor: cmd.amount_minor,
                currency,
            })
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "payment gateway refused intent creation");
                PurchaseError::gateway(e.to_string())
            })?;

        // 3. Persist the pending purchase record
        let purchase = Purchase::create_pending(
            cmd.user.id,
            intent.id.clone(),
            self.ebook_title.clone(),
            amount,
        );
        self.repository.insert(&purchase).await.map_err(|e| {
            tracing::error!(error = %e, intent = %intent.id, "failed to create purchase record");
            PurchaseError::persistence(e.to_string())
        })?;

        Ok(CreatePaymentIntentResult {
            payment_intent_id: intent.id,
            client_secret: intent.client_secret,
        })
    }
}
