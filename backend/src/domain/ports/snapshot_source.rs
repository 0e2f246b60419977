//! Driven port for the stored report snapshots.

use super::StoreError;
use crate::domain::analytics::AnalyticsSnapshot;
use crate::domain::dashboard::DashboardSnapshot;

/// Read access to the precomputed delivery figures.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotSource: Send + Sync {
    /// Daily, device, and country delivery.
    fn analytics(&self) -> Result<AnalyticsSnapshot, StoreError>;

    /// Publisher headline figures.
    fn publisher_dashboard(&self) -> Result<DashboardSnapshot, StoreError>;
}
