//! Route wiring for the storefront API.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::http::middleware::auth_middleware;
use crate::ports::{PaymentGateway, PurchaseReader, PurchaseRepository, SessionValidator};

use super::handlers;

/// Shared state for the storefront routes.
///
/// Holds the ports behind `Arc` so handlers can construct application
/// handlers per request without re-wiring adapters.
#[derive(Clone)]
pub struct PurchaseAppState {
    pub repository: Arc<dyn PurchaseRepository>,
    pub reader: Arc<dyn PurchaseReader>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub session_validator: Arc<dyn SessionValidator>,
    /// Title stamped onto new purchase records.
    pub ebook_title: String,
}

/// Builds the storefront router.
///
/// All `/api` routes sit behind the auth middleware; `/health` stays
/// open for liveness probes.
pub fn purchase_router(state: PurchaseAppState) -> Router {
    let validator = state.session_validator.clone();

    Router::new()
        .route(
            "/api/create-payment-intent",
            post(handlers::create_payment_intent),
        )
        .route("/api/confirm-payment", post(handlers::confirm_payment))
        .route("/api/access", get(handlers::check_access))
        .route("/api/purchases", get(handlers::list_purchases))
        .route("/api/auth/signout", post(handlers::sign_out))
        .layer(middleware::from_fn_with_state(validator, auth_middleware))
        .route("/health", get(handlers::health))
        .with_state(state)
}
