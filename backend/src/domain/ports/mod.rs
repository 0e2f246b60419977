//! Domain ports: the traits adapters implement so the domain and the HTTP
//! layer never name a concrete store.

mod macros;
pub(crate) use macros::define_port_error;

mod audience_segments;
mod billing_ledger;
mod credential_verifier;
mod record_store;
mod snapshot_source;
mod user_directory;

#[cfg(test)]
pub use audience_segments::MockAudienceSegments;
pub use audience_segments::AudienceSegments;
#[cfg(test)]
pub use billing_ledger::MockBillingLedger;
pub use billing_ledger::BillingLedger;
#[cfg(test)]
pub use credential_verifier::MockCredentialVerifier;
pub use credential_verifier::{
    CredentialError, CredentialVerifier, DemoCredentialVerifier, MIN_PASSWORD_LEN,
};
pub use record_store::{RecordStore, StoreError};
#[cfg(test)]
pub use snapshot_source::MockSnapshotSource;
pub use snapshot_source::SnapshotSource;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::UserDirectory;
