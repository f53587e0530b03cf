//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Session token configuration
///
/// Session tokens are HS256 JWTs minted by the identity provider that
/// fronts this service. The backend only validates them; it never
/// issues tokens itself.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC signing key shared with the identity provider
    pub jwt_secret: SecretString,

    /// Expected `iss` claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Expected `aud` claim
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// Production requires a signing key of at least 32 bytes; shorter
    /// keys are tolerated in development for local testing.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if *environment == Environment::Production && self.jwt_secret.expose_secret().len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if self.issuer.is_empty() {
            return Err(ValidationError::MissingRequired("JWT issuer"));
        }
        if self.audience.is_empty() {
            return Err(ValidationError::MissingRequired("JWT audience"));
        }
        Ok(())
    }
}

fn default_issuer() -> String {
    "bookgate-idp".to_string()
}

fn default_audience() -> String {
    "bookgate-api".to_string()
}
