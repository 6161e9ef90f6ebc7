//! Signed bearer tokens for the admin surface.
//!
//! Tokens are HS256 JWTs carrying the admin id and the credential version
//! current at issue time. A token whose version no longer matches the stored
//! row is stale and gets rejected, so rotating credentials revokes every
//! token issued before the change.

use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Claims embedded in every admin token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin id.
    pub sub: i32,
    /// Credential version at issue time.
    pub cv: i32,
    /// Issued-at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
}

pub struct TokenIssuer {
    secret: String,
    ttl_hours: i64,
}

impl TokenIssuer {
    #[must_use]
    pub const fn new(secret: String, ttl_hours: i64) -> Self {
        Self { secret, ttl_hours }
    }

    /// Issues a token bound to an admin and their current credential version.
    pub fn issue(&self, admin_id: i32, credential_version: i32) -> Result<String> {
        let now = Utc::now();
        let expiry = now
            .checked_add_signed(chrono::Duration::hours(self.ttl_hours))
            .context("Token expiry overflows the timestamp range")?;

        let claims = Claims {
            sub: admin_id,
            cv: credential_version,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        debug!(
            "Issuing token for admin {}, expires in {}h",
            admin_id, self.ttl_hours
        );

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to sign token")
    }

    /// Verifies a token's signature and expiry and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .context("Invalid or expired token")?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let issuer = TokenIssuer::new("test-secret-key-12345".to_string(), 24);

        let token = issuer.issue(1, 3).unwrap();
        assert!(!token.is_empty());

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.cv, 3);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let issuer = TokenIssuer::new("test-secret-key-12345".to_string(), 24);

        let result = issuer.verify("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_different_secrets_reject() {
        let issuer1 = TokenIssuer::new("secret1".to_string(), 24);
        let issuer2 = TokenIssuer::new("secret2".to_string(), 24);

        let token = issuer1.issue(1, 1).unwrap();
        let result = issuer2.verify(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = TokenIssuer::new("test-secret-key-12345".to_string(), -1);

        let token = issuer.issue(1, 1).unwrap();
        let result = issuer.verify(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = TokenIssuer::new("test-secret-key-12345".to_string(), 24);

        let mut token = issuer.issue(1, 1).unwrap();
        token.push('x');
        let result = issuer.verify(&token);
        assert!(result.is_err());
    }
}
