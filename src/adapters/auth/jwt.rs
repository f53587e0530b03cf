//! JWT adapter for session token validation.
//!
//! Implements the `SessionValidator` port against HS256 session tokens
//! minted by the identity provider that fronts this service. Validation
//! checks the signature plus the issuer, audience, and expiry claims,
//! then maps the claims to the domain `AuthenticatedUser` type.
//!
//! Revocation is a logged no-op: the tokens are stateless and simply
//! age out at `exp`. The sign-out endpoint still calls `revoke` so a
//! stateful validator (server-side sessions, denylist) can slot in
//! behind the same port.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Claims carried by a session token.
#[derive(Debug, Deserialize)]
struct SessionClaims {
    /// Subject - the user ID
    sub: String,

    /// Expiry timestamp (Unix epoch seconds)
    #[allow(dead_code)]
    exp: i64,

    /// User's email address
    #[serde(default)]
    email: Option<String>,

    /// User's display name
    #[serde(default)]
    name: Option<String>,
}

/// Session validator backed by a shared HMAC signing key.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            },
        )?;

        let claims = data.claims;
        let user_id = UserId::new(&claims.sub).map_err(|_| AuthError::InvalidToken)?;
        let email = claims.email.unwrap_or_default();

        Ok(AuthenticatedUser::new(user_id, email, claims.name))
    }

    async fn revoke(&self, _token: &str) -> Result<(), AuthError> {
        // Stateless tokens cannot be recalled server-side; they expire at `exp`.
        tracing::info!("session sign-out recorded; token will expire naturally");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use secrecy::SecretString;
    use serde::Serialize;

    const SECRET: &str = "test-secret-key-that-is-long-enough!";

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        iss: String,
        aud: String,
        exp: i64,
        email: Option<String>,
        name: Option<String>,
    }

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: SecretString::new(SECRET.to_string()),
            issuer: "bookgate-idp".to_string(),
            audience: "bookgate-api".to_string(),
        }
    }

    fn mint(secret: &str, claims: &TestClaims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn valid_claims() -> TestClaims {
        TestClaims {
            sub: "user-123".to_string(),
            iss: "bookgate-idp".to_string(),
            aud: "bookgate-api".to_string(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
            email: Some("reader@example.com".to_string()),
            name: Some("A Reader".to_string()),
        }
    }

    #[tokio::test]
    async fn validate_accepts_well_formed_token() {
        let validator = JwtSessionValidator::new(&config());
        let token = mint(SECRET, &valid_claims());

        let user = validator.validate(&token).await.unwrap();

        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email, "reader@example.com");
        assert_eq!(user.display_name.as_deref(), Some("A Reader"));
    }

    #[tokio::test]
    async fn validate_rejects_wrong_signing_key() {
        let validator = JwtSessionValidator::new(&config());
        let token = mint("a-completely-different-signing-key!!", &valid_claims());

        let result = validator.validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn validate_rejects_expired_token_distinctly() {
        let validator = JwtSessionValidator::new(&config());
        let mut claims = valid_claims();
        claims.exp = (Utc::now() - Duration::hours(1)).timestamp();
        let token = mint(SECRET, &claims);

        let result = validator.validate(&token).await;
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn validate_rejects_wrong_audience() {
        let validator = JwtSessionValidator::new(&config());
        let mut claims = valid_claims();
        claims.aud = "some-other-service".to_string();
        let token = mint(SECRET, &claims);

        let result = validator.validate(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn validate_rejects_garbage_token() {
        let validator = JwtSessionValidator::new(&config());

        let result = validator.validate("not-a-jwt").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn revoke_is_accepted_for_any_token() {
        let validator = JwtSessionValidator::new(&config());
        assert!(validator.revoke("whatever").await.is_ok());
    }
}
