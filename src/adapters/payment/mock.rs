//! Mock payment gateway for testing.
//!
//! Configurable implementation of `PaymentGateway` for unit and
//! integration tests. Supports scripted confirmation outcomes, error
//! injection, and call tracking.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::foundation::PaymentIntentId;
use crate::ports::{
    CreateIntentRequest, GatewayError, GatewayOutcome, PaymentGateway, PaymentIntent,
};

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new();
/// mock.script_outcome(GatewayOutcome::Approved);
/// mock.set_error(GatewayError::unreachable("down"));
/// ```
#[derive(Default)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Confirmation outcomes, consumed in order. Empty queue approves.
    scripted_outcomes: VecDeque<GatewayOutcome>,

    /// Error to return from every call until cleared.
    forced_error: Option<GatewayError>,

    /// Intent ids handed out by `create_intent`, in order.
    created_intents: Vec<(PaymentIntentId, i64)>,

    /// Intent ids passed to `confirm_intent`, in order.
    confirmed_intents: Vec<PaymentIntentId>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a confirmation outcome. Outcomes are consumed in FIFO order;
    /// an empty queue approves.
    pub fn script_outcome(&self, outcome: GatewayOutcome) {
        self.inner
            .lock()
            .unwrap()
            .scripted_outcomes
            .push_back(outcome);
    }

    /// Make every call fail with the given error.
    pub fn set_error(&self, error: GatewayError) {
        self.inner.lock().unwrap().forced_error = Some(error);
    }

    /// Clear a forced error.
    pub fn clear_error(&self) {
        self.inner.lock().unwrap().forced_error = None;
    }

    /// Intents created so far, with the amount requested for each.
    pub fn created_intents(&self) -> Vec<(PaymentIntentId, i64)> {
        self.inner.lock().unwrap().created_intents.clone()
    }

    /// Intents that have been confirmed, in call order.
    pub fn confirmed_intents(&self) -> Vec<PaymentIntentId> {
        self.inner.lock().unwrap().confirmed_intents.clone()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_intent(
        &self,
        request: CreateIntentRequest,
    ) -> Result<PaymentIntent, GatewayError> {
        let mut state = self.inner.lock().unwrap();

        if let Some(error) = state.forced_error.clone() {
            return Err(error);
        }

        let raw = format!("pi_mock_{}", Uuid::new_v4().simple());
        let id = PaymentIntentId::new(&raw)
            .map_err(|e| GatewayError::invalid_request(e.to_string()))?;
        state
            .created_intents
            .push((id.clone(), request.amount_minor));

        Ok(PaymentIntent {
            client_secret: format!("{}_secret", raw),
            id,
        })
    }

    async fn confirm_intent(
        &self,
        intent_id: &PaymentIntentId,
    ) -> Result<GatewayOutcome, GatewayError> {
        let mut state = self.inner.lock().unwrap();

        if let Some(error) = state.forced_error.clone() {
            return Err(error);
        }

        state.confirmed_intents.push(intent_id.clone());

        Ok(state
            .scripted_outcomes
            .pop_front()
            .unwrap_or(GatewayOutcome::Approved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Currency, UserId};

    fn request() -> CreateIntentRequest {
        CreateIntentRequest {
            user_id: UserId::new("user-123").unwrap(),
            amount_minor: 4900,
            currency: Currency::usd(),
        }
    }

    #[tokio::test]
    async fn records_created_intents() {
        let mock = MockPaymentGateway::new();

        let intent = mock.create_intent(request()).await.unwrap();

        let created = mock.created_intents();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].0, intent.id);
        assert_eq!(created[0].1, 4900);
    }

    #[tokio::test]
    async fn scripted_outcomes_are_consumed_in_order() {
        let mock = MockPaymentGateway::new();
        mock.script_outcome(GatewayOutcome::Declined {
            reason: "insufficient funds".to_string(),
        });
        mock.script_outcome(GatewayOutcome::Approved);

        let intent_id = PaymentIntentId::new("pi_1").unwrap();

        let first = mock.confirm_intent(&intent_id).await.unwrap();
        assert!(matches!(first, GatewayOutcome::Declined { .. }));

        let second = mock.confirm_intent(&intent_id).await.unwrap();
        assert_eq!(second, GatewayOutcome::Approved);
    }

    #[tokio::test]
    async fn empty_queue_approves() {
        let mock = MockPaymentGateway::new();
        let intent_id = PaymentIntentId::new("pi_1").unwrap();

        let outcome = mock.confirm_intent(&intent_id).await.unwrap();
        assert_eq!(outcome, GatewayOutcome::Approved);
    }

    #[tokio::test]
    async fn forced_error_applies_to_all_calls() {
        let mock = MockPaymentGateway::new();
        mock.set_error(GatewayError::unreachable("down"));

        assert!(mock.create_intent(request()).await.is_err());

        let intent_id = PaymentIntentId::new("pi_1").unwrap();
        assert!(mock.confirm_intent(&intent_id).await.is_err());

        mock.clear_error();
        assert!(mock.create_intent(request()).await.is_ok());
    }
}
