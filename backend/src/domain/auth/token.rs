//! Signed bearer tokens.
//!
//! Tokens are HS256 JWTs carrying the user id and email. Expiry is checked
//! against the injected [`Clock`] rather than the system time, so tests can
//! move time forward deterministically.

use std::sync::Arc;

use chrono::TimeDelta;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::record::RecordId;

/// Token lifetime in days.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Claims embedded in every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    /// Subject user.
    pub user_id: RecordId,
    /// Subject email at issue time.
    pub email: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch. Exclusive.
    pub exp: i64,
}

/// Raised when a token cannot be produced.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signing backend rejected the claims.
    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Issues and verifies bearer tokens with a shared secret.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Build a service signing with `secret` and a [`TOKEN_TTL_DAYS`] lifetime.
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl: TimeDelta::days(TOKEN_TTL_DAYS),
            clock,
        }
    }

    /// Sign a token for the given user, valid from now for the service TTL.
    pub fn issue(&self, user_id: &RecordId, email: &str) -> Result<String, TokenError> {
        let now = self.clock.utc();
        let claims = TokenClaims {
            user_id: user_id.clone(),
            email: email.to_owned(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Claims of a well-signed, unexpired token; `None` otherwise.
    ///
    /// A token is expired from the instant its `exp` is reached.
    pub fn verify(&self, token: &str) -> Option<TokenClaims> {
        let claims = match decode::<TokenClaims>(token, &self.decoding, &self.validation) {
            Ok(data) => data.claims,
            Err(error) => {
                debug!(%error, "rejected bearer token");
                return None;
            }
        };
        if self.clock.utc().timestamp() >= claims.exp {
            debug!(user_id = %claims.user_id, "rejected expired bearer token");
            return None;
        }
        Some(claims)
    }
}

/// Token portion of an `Authorization` header value.
///
/// Only `Bearer <token>` with a single separating space is accepted; the
/// token must be non-empty and free of whitespace.
///
/// # Examples
/// ```
/// use adtech::domain::auth::extract_bearer;
///
/// assert_eq!(extract_bearer("Bearer abc.def"), Some("abc.def"));
/// assert_eq!(extract_bearer("Basic abc"), None);
/// assert_eq!(extract_bearer("Bearer "), None);
/// assert_eq!(extract_bearer("Bearer  abc"), None);
/// ```
pub fn extract_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty() && !token.contains(char::is_whitespace))
}
