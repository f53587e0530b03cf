//! Payment adapters implementing the `PaymentGateway` port.

mod mock;
mod simulated;

pub use mock::MockPaymentGateway;
pub use simulated::SimulatedGateway;
