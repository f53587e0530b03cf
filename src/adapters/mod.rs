//! Adapters - implementations of the ports against real infrastructure.
//!
//! Each submodule adapts one external concern to the port traits the
//! application layer depends on:
//!
//! - `auth` - session token validation (JWT) plus a test mock
//! - `payment` - payment gateway (simulated) plus a test mock
//! - `postgres` - entitlement store (purchases table)
//! - `http` - axum routes, DTOs, and middleware

pub mod auth;
pub mod http;
pub mod payment;
pub mod postgres;
