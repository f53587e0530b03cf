//! Session validation port for the identity provider boundary.
//!
//! This port defines the contract for validating session tokens and
//! extracting user identity. It is provider-agnostic: the demo wiring uses
//! a local JWT validator, tests use a mock, and a hosted identity provider
//! could be swapped in without touching handlers.
//!
//! All implementations MUST validate issuer, audience, and expiry before
//! returning a user.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates session tokens and extracts user identity.
///
/// This is the only place tokens are touched. Handlers receive the
/// resulting `AuthenticatedUser` explicitly and never re-derive the session.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature, issuer, audience, and expiry
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient provider errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a session token and return the authenticated user.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;

    /// Sign the session out at the identity provider.
    ///
    /// Stateless token schemes may treat this as a no-op; the contract only
    /// requires that a revoked token is not considered an error.
    async fn revoke(&self, token: &str) -> Result<(), AuthError>;
}
