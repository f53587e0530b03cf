//! Purchase domain - the entitlement record and its lifecycle.
//!
//! A purchase record correlates one payment attempt across the two-phase
//! flow (intent creation, confirmation) and, once completed, grants the
//! owning user access to the ebook.

mod aggregate;
mod errors;
mod status;

pub use aggregate::Purchase;
pub use errors::PurchaseError;
pub use status::PurchaseStatus;
