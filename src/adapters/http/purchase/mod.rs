//! HTTP adapter for the storefront endpoints.
//!
//! Exposes the purchase flow via REST API:
//! - `POST /api/create-payment-intent` - Open a purchase (pending record + client secret)
//! - `POST /api/confirm-payment` - Resolve a pending purchase
//! - `GET /api/access` - The access gate for the signed-in user
//! - `GET /api/purchases` - Purchase history, newest first
//! - `POST /api/auth/signout` - Revoke the current session token
//! - `GET /health` - Liveness probe (unauthenticated)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::{purchase_router, PurchaseAppState};
