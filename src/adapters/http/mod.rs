//! HTTP adapters - REST API implementations.

pub mod middleware;
pub mod purchase;

// Re-export key types for convenience
pub use purchase::purchase_router;
pub use purchase::PurchaseAppState;
