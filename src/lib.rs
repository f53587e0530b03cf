//! Bookgate - Storefront backend for a single ebook
//!
//! Implements the purchase-gating flow: payment intents open pending
//! purchase records, confirmations resolve them to completed or failed,
//! and the access gate derives entitlement from completed purchases.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
