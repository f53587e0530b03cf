//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionValidator` - identity provider boundary (validate, revoke)
//! - `PaymentGateway` - payment intent fabrication and confirmation
//! - `PurchaseRepository` - writes against the entitlement store
//! - `PurchaseReader` - read-only queries, including the access gate

mod payment_gateway;
mod purchase_reader;
mod purchase_repository;
mod session_validator;

pub use payment_gateway::{
    CreateIntentRequest, GatewayError, GatewayOutcome, PaymentGateway, PaymentIntent,
};
pub use purchase_reader::{PurchaseReader, PurchaseView};
pub use purchase_repository::{PurchaseRepository, Resolution, ResolveUpdate};
pub use session_validator::SessionValidator;
