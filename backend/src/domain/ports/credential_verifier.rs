//! Driven port deciding whether a password belongs to a user.
//!
//! The auth service never sees stored secrets. Registration hands the
//! password to [`CredentialVerifier::enrol`] and login asks
//! [`CredentialVerifier::verify`], so an adapter can hash, delegate, or (in
//! demo deployments) accept any well-formed password.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::record::RecordId;

/// Shortest password accepted anywhere.
pub const MIN_PASSWORD_LEN: usize = 6;

define_port_error! {
    /// Failures raised by credential adapters.
    pub enum CredentialError {
        /// The credential backend could not be used.
        Backend { message: String } => "credential backend failed: {message}",
    }
}

/// Password enrolment and verification.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Remember `password` for `user_id`, replacing any earlier one.
    async fn enrol(&self, user_id: &RecordId, password: &str) -> Result<(), CredentialError>;

    /// Whether `password` is correct for `user_id`.
    async fn verify(&self, user_id: &RecordId, password: &str) -> Result<bool, CredentialError>;
}

/// Demo verifier: any password of at least [`MIN_PASSWORD_LEN`] characters
/// is accepted for any known user.
///
/// Only wired when demo mode is switched on explicitly.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoCredentialVerifier;

#[async_trait]
impl CredentialVerifier for DemoCredentialVerifier {
    async fn enrol(&self, _user_id: &RecordId, _password: &str) -> Result<(), CredentialError> {
        Ok(())
    }

    async fn verify(&self, _user_id: &RecordId, password: &str) -> Result<bool, CredentialError> {
        Ok(password.chars().count() >= MIN_PASSWORD_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("secret", true)]
    #[case("pässwörd", true)]
    #[case("short", false)]
    #[case("", false)]
    #[tokio::test]
    async fn demo_verifier_checks_length_only(#[case] password: &str, #[case] accepted: bool) {
        let verifier = DemoCredentialVerifier;
        let user = RecordId::new("user-1");
        verifier.enrol(&user, "ignored").await.expect("enrol is a no-op");
        let outcome = verifier.verify(&user, password).await.expect("demo verify");
        assert_eq!(outcome, accepted);
    }
}
