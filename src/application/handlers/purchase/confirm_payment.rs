//! ConfirmPaymentHandler - resolves a pending purchase.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, PaymentIntentId, Timestamp};
use crate::domain::purchase::PurchaseError;
use crate::ports::{
    GatewayOutcome, PaymentGateway, PurchaseRepository, Resolution, ResolveUpdate,
};

/// Command to confirm a previously created payment intent.
#[derive(Debug, Clone)]
pub struct ConfirmPaymentCommand {
    pub user: AuthenticatedUser,
    pub payment_intent_id: PaymentIntentId,
}

/// Result of a successful confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmPaymentResult {
    pub message: String,
}

/// Handler for resolving a pending purchase to completed or failed.
///
/// The gateway decides the outcome; the repository update is guarded on
/// `status = pending` and on the caller's user id, so one user can never
/// resolve another's intent and a resolved record is never transitioned
/// again. Zero affected rows is classified as not-found or
/// already-resolved, never reported as success.
pub struct ConfirmPaymentHandler {
    repository: Arc<dyn PurchaseRepository>,
    gateway: Arc<dyn PaymentGateway>,
}

impl ConfirmPaymentHandler {
    pub fn new(repository: Arc<dyn PurchaseRepository>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            repository,
            gateway,
        }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmPaymentCommand,
    ) -> Result<ConfirmPaymentResult, PurchaseError> {
        // 1. Ask the gateway for the outcome
        let outcome = self
            .gateway
            .confirm_intent(&cmd.payment_intent_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, intent = %cmd.payment_intent_id, "gateway confirmation failed");
                PurchaseError::gateway(e.to_string())
            })?;

        // 2. Apply the matching terminal transition
        let (resolution, purchase_date) = match &outcome {
            GatewayOutcome::Approved => (Resolution::Completed, Some(Timestamp::now())),
            GatewayOutcome::Declined { .. } => (Resolution::Failed, None),
        };

        let update = self
            .repository
            .resolve(
                &cmd.user.id,
                &cmd.payment_intent_id,
                resolution,
                purchase_date,
            )
            .await
            .map_err(|e| {
                tracing::error!(error = %e, intent = %cmd.payment_intent_id, "failed to update purchase record");
                PurchaseError::persistence(e.to_string())
            })?;

        // 3. Zero affected rows is never silent success
        if update == ResolveUpdate::NoPendingMatch {
            return Err(self.classify_no_match(&cmd).await?);
        }

        match outcome {
            GatewayOutcome::Approved => Ok(ConfirmPaymentResult {
                message: "Payment confirmed successfully".to_string(),
            }),
            GatewayOutcome::Declined { reason } => Err(PurchaseError::payment_declined(reason)),
        }
    }

    /// Distinguish an unknown intent from one already resolved.
    async fn classify_no_match(
        &self,
        cmd: &ConfirmPaymentCommand,
    ) -> Result<PurchaseError, PurchaseError> {
        let existing = self
            .repository
            .find_by_intent(&cmd.user.id, &cmd.payment_intent_id)
            .await
            .map_err(|e| PurchaseError::persistence(e.to_string()))?;

        Ok(match existing {
            None => PurchaseError::intent_not_found(cmd.payment_intent_id.clone()),
            Some(_) => PurchaseError::already_resolved(cmd.payment_intent_id.clone()),
        })
    }
}
