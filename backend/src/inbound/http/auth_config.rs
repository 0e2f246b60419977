//! Bearer token configuration parsing and validation.
//!
//! The signing secret and the demo switch come from the environment through
//! [`mockable::Env`] so the rules below can be tested without touching the
//! process environment.
//!
//! - `JWT_SECRET`: HS256 signing secret.
//! - `AUTH_DEMO_MODE`: accept any password of six or more characters.
//!
//! Debug builds and demo mode fall back to [`DEMO_SECRET`] with a warning.
//! Release builds outside demo mode require a secret of at least
//! [`SECRET_MIN_LEN`] bytes.

use mockable::Env;
use sha2::{Digest, Sha256};
use tracing::warn;
use zeroize::{Zeroize, Zeroizing};

pub const JWT_SECRET_ENV: &str = "JWT_SECRET";
pub const DEMO_MODE_ENV: &str = "AUTH_DEMO_MODE";
/// Publicly known fallback secret; never acceptable in production.
pub const DEMO_SECRET: &str = "adtech-platform-secret-key-2024";
/// Minimum secret length accepted by release builds.
pub const SECRET_MIN_LEN: usize = 32;

const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const FINGERPRINT_BYTES: usize = 8;

/// Build mode for configuration strictness.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Defaults are tolerated with a warning.
    Debug,
    /// Missing or weak settings are fatal.
    Release,
}

impl BuildMode {
    /// Mode matching `cfg!(debug_assertions)`.
    ///
    /// # Examples
    /// ```
    /// use adtech::inbound::http::auth_config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// assert_eq!(mode == BuildMode::Debug, cfg!(debug_assertions));
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Errors raised while validating auth configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AuthConfigError {
    /// No secret is configured and no fallback is allowed.
    #[error("missing required environment variable: {name}")]
    MissingSecret { name: &'static str },
    /// The secret is shorter than release builds accept.
    #[error("{name} too short: need >= {min_len} bytes, got {length}")]
    SecretTooShort {
        name: &'static str,
        length: usize,
        min_len: usize,
    },
    /// A toggle holds an unrecognised value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Validated auth settings. The secret is wiped on drop.
pub struct AuthSettings {
    secret: Zeroizing<Vec<u8>>,
    demo_mode: bool,
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("secret", &self.fingerprint())
            .field("demo_mode", &self.demo_mode)
            .finish()
    }
}

impl AuthSettings {
    /// Token signing secret.
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// Whether the permissive demo credential check is enabled.
    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    /// Truncated SHA-256 of the secret, safe to log.
    ///
    /// # Examples
    /// ```
    /// use adtech::inbound::http::auth_config::{BuildMode, auth_settings_from_env};
    /// use mockable::MockEnv;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|_| None);
    /// let settings = auth_settings_from_env(&env, BuildMode::Debug).unwrap();
    /// assert_eq!(settings.fingerprint().len(), 16);
    /// ```
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.secret.as_slice());
        hex::encode(&digest[..FINGERPRINT_BYTES])
    }
}

/// Read auth settings from `env`, applying the strictness of `mode`.
pub fn auth_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<AuthSettings, AuthConfigError> {
    let demo_mode = demo_mode_from_env(env, mode)?;
    let secret = secret_from_env(env, mode, demo_mode)?;
    Ok(AuthSettings { secret, demo_mode })
}

fn demo_mode_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<bool, AuthConfigError> {
    let Some(value) = env.string(DEMO_MODE_ENV) else {
        return Ok(false);
    };
    match parse_bool(&value) {
        Some(flag) => Ok(flag),
        None if mode.is_debug() => {
            warn!(value = %value, "invalid AUTH_DEMO_MODE; demo mode disabled");
            Ok(false)
        }
        None => Err(AuthConfigError::InvalidEnv {
            name: DEMO_MODE_ENV,
            value,
            expected: BOOL_EXPECTED,
        }),
    }
}

fn secret_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    demo_mode: bool,
) -> Result<Zeroizing<Vec<u8>>, AuthConfigError> {
    let lenient = mode.is_debug() || demo_mode;
    match env.string(JWT_SECRET_ENV).filter(|value| !value.is_empty()) {
        Some(mut value) => {
            let length = value.len();
            if length < SECRET_MIN_LEN {
                if !lenient {
                    value.zeroize();
                    return Err(AuthConfigError::SecretTooShort {
                        name: JWT_SECRET_ENV,
                        length,
                        min_len: SECRET_MIN_LEN,
                    });
                }
                warn!(length, min_len = SECRET_MIN_LEN, "JWT_SECRET is short");
            }
            Ok(Zeroizing::new(value.into_bytes()))
        }
        None if lenient => {
            warn!("JWT_SECRET not set; signing tokens with the public demo secret");
            Ok(Zeroizing::new(DEMO_SECRET.as_bytes().to_vec()))
        }
        None => Err(AuthConfigError::MissingSecret {
            name: JWT_SECRET_ENV,
        }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
