//! PostgreSQL adapters for the entitlement store.

mod purchase_reader;
mod purchase_repository;

pub use purchase_reader::PostgresPurchaseReader;
pub use purchase_repository::PostgresPurchaseRepository;
