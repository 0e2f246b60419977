//! Validated login and registration payloads.
//!
//! Inbound adapters parse raw strings into these types before talking to the
//! auth service, so the service only ever sees trimmed, non-empty values.

use thiserror::Error;
use zeroize::Zeroizing;

/// Raised when a login or registration payload is incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialsValidationError {
    /// Email missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password missing.
    #[error("password must not be empty")]
    EmptyPassword,
    /// Display name missing or blank once trimmed.
    #[error("name must not be empty")]
    EmptyName,
}

/// Email and password presented at login.
///
/// # Examples
/// ```
/// use adtech::domain::auth::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" jane@example.com ", "hunter22").unwrap();
/// assert_eq!(creds.email(), "jane@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Trim the email and require both parts.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CredentialsValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Account email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password as typed; whitespace is preserved.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Account creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    credentials: LoginCredentials,
    name: String,
}

impl Registration {
    /// Validate a sign-up payload.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let credentials = LoginCredentials::try_from_parts(email, password)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CredentialsValidationError::EmptyName);
        }
        Ok(Self {
            credentials,
            name: name.to_owned(),
        })
    }

    /// Email and password.
    pub fn credentials(&self) -> &LoginCredentials {
        &self.credentials
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
