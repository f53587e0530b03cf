//! Purchase handlers - the services behind the storefront API.
//!
//! Every command and query carries an explicit `AuthenticatedUser`;
//! handlers never re-derive the session themselves.

mod check_access;
mod confirm_payment;
mod create_payment_intent;
mod list_purchases;

pub use check_access::{CheckAccessHandler, CheckAccessQuery, CheckAccessResult};
pub use confirm_payment::{ConfirmPaymentCommand, ConfirmPaymentHandler, ConfirmPaymentResult};
pub use create_payment_intent::{
    CreatePaymentIntentCommand, CreatePaymentIntentHandler, CreatePaymentIntentResult,
};
pub use list_purchases::{ListPurchasesHandler, ListPurchasesQuery, ListPurchasesResult};
