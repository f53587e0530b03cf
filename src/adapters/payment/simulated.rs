//! Simulated payment gateway.
//!
//! Stands in for a real payment processor during development and demos.
//! Intent creation always succeeds and returns gateway-shaped identifiers;
//! confirmation approves with the configured probability (default 0.9) so
//! the decline path gets exercised without a card network.

use async_trait::async_trait;
use rand::Rng;
use uuid::Uuid;

use crate::config::PaymentConfig;
use crate::domain::foundation::PaymentIntentId;
use crate::ports::{
    CreateIntentRequest, GatewayError, GatewayOutcome, PaymentGateway, PaymentIntent,
};

/// Payment gateway that simulates a processor in-memory.
pub struct SimulatedGateway {
    success_rate: f64,
}

impl SimulatedGateway {
    pub fn new(config: &PaymentConfig) -> Self {
        Self {
            success_rate: config.success_rate.clamp(0.0, 1.0),
        }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn create_intent(
        &self,
        request: CreateIntentRequest,
    ) -> Result<PaymentIntent, GatewayError> {
        if request.amount_minor <= 0 {
            return Err(GatewayError::invalid_request(
                "amount must be a positive number of minor units",
            ));
        }

        let id = format!("pi_{}", Uuid::new_v4().simple());
        let client_secret = format!("{}_secret_{}", id, Uuid::new_v4().simple());

        tracing::debug!(
            intent_id = %id,
            user_id = %request.user_id,
            amount_minor = request.amount_minor,
            currency = %request.currency,
            "created simulated payment intent"
        );

        let id = PaymentIntentId::new(id)
            .map_err(|e| GatewayError::invalid_request(e.to_string()))?;

        Ok(PaymentIntent { id, client_secret })
    }

    async fn confirm_intent(
        &self,
        intent_id: &PaymentIntentId,
    ) -> Result<GatewayOutcome, GatewayError> {
        let approved = rand::rng().random_bool(self.success_rate);

        tracing::debug!(intent_id = %intent_id, approved, "simulated confirmation");

        if approved {
            Ok(GatewayOutcome::Approved)
        } else {
            Ok(GatewayOutcome::Declined {
                reason: "card declined by simulated processor".to_string(),
            })
        }
    }
}
