//! Driven port for the shared billing profile.

use super::StoreError;
use crate::domain::billing::BillingProfile;

/// Balance and payment methods.
#[cfg_attr(test, mockall::automock)]
pub trait BillingLedger: Send + Sync {
    /// Current profile.
    fn profile(&self) -> Result<BillingProfile, StoreError>;

    /// Replace the outstanding balance and return the updated profile.
    fn set_balance(&self, balance: f64) -> Result<BillingProfile, StoreError>;
}
