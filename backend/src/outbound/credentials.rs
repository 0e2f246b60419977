//! Salted SHA-256 credential verifier.
//!
//! Digests live in process memory next to the mock store and vanish on
//! restart. Accounts that never enrolled a password here (the seeded demo
//! users, for instance) cannot log in through this verifier.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroize;

use crate::domain::ports::{CredentialError, CredentialVerifier};
use crate::domain::record::RecordId;

const SALT_BYTES: usize = 16;

#[derive(Clone)]
struct SaltedDigest {
    salt: [u8; SALT_BYTES],
    digest: [u8; 32],
}

impl SaltedDigest {
    fn derive(salt: [u8; SALT_BYTES], password: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(password.as_bytes());
        Self {
            salt,
            digest: hasher.finalize().into(),
        }
    }

    fn matches(&self, password: &str) -> bool {
        let mut candidate = Self::derive(self.salt, password);
        let diff = candidate
            .digest
            .iter()
            .zip(self.digest.iter())
            .fold(0_u8, |acc, (a, b)| acc | (a ^ b));
        candidate.digest.zeroize();
        diff == 0
    }
}

/// Verifier holding one salted digest per enrolled user.
#[derive(Default)]
pub struct HashedCredentialVerifier {
    digests: RwLock<HashMap<RecordId, SaltedDigest>>,
}

impl std::fmt::Debug for HashedCredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashedCredentialVerifier")
            .finish_non_exhaustive()
    }
}

impl HashedCredentialVerifier {
    /// Verifier with no enrolled users.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(err: E) -> CredentialError {
    CredentialError::backend(format!("digest table poisoned: {err}"))
}

#[async_trait]
impl CredentialVerifier for HashedCredentialVerifier {
    async fn enrol(&self, user_id: &RecordId, password: &str) -> Result<(), CredentialError> {
        let entry = SaltedDigest::derive(rand::random(), password);
        self.digests
            .write()
            .map_err(poisoned)?
            .insert(user_id.clone(), entry);
        debug!(%user_id, "enrolled credential");
        Ok(())
    }

    async fn verify(&self, user_id: &RecordId, password: &str) -> Result<bool, CredentialError> {
        let digests = self.digests.read().map_err(poisoned)?;
        Ok(digests
            .get(user_id)
            .is_some_and(|entry| entry.matches(password)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn enrolled_password_verifies() {
        let verifier = HashedCredentialVerifier::new();
        let user = RecordId::new("user-1");
        verifier.enrol(&user, "correct horse").await.expect("enrol");

        assert!(verifier.verify(&user, "correct horse").await.expect("verify"));
        assert!(!verifier.verify(&user, "correct horse ").await.expect("verify"));
    }

    #[rstest]
    #[tokio::test]
    async fn unenrolled_user_is_rejected() {
        let verifier = HashedCredentialVerifier::new();
        let outcome = verifier
            .verify(&RecordId::new("user-1"), "anything")
            .await
            .expect("verify");
        assert!(!outcome);
    }

    #[rstest]
    #[tokio::test]
    async fn re_enrolment_replaces_the_password() {
        let verifier = HashedCredentialVerifier::new();
        let user = RecordId::new("user-1");
        verifier.enrol(&user, "first-pass").await.expect("enrol");
        verifier.enrol(&user, "second-pass").await.expect("enrol");

        assert!(!verifier.verify(&user, "first-pass").await.expect("verify"));
        assert!(verifier.verify(&user, "second-pass").await.expect("verify"));
    }

    #[rstest]
    fn equal_passwords_get_distinct_salts() {
        let a = SaltedDigest::derive(rand::random(), "same");
        let b = SaltedDigest::derive(rand::random(), "same");
        assert_ne!(a.digest, b.digest);
    }
}
