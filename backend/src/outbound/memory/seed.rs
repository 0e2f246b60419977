//! Embedded demo data the store starts from and resets to.

use serde::Deserialize;

use crate::domain::advertiser::Advertiser;
use crate::domain::analytics::AnalyticsSnapshot;
use crate::domain::billing::{BillingProfile, Invoice};
use crate::domain::campaign::Campaign;
use crate::domain::creative::Creative;
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::deal::Deal;
use crate::domain::inventory::Inventory;
use crate::domain::ports::StoreError;
use crate::domain::user::User;

const SEED_JSON: &str = include_str!("../../../fixtures/seed.json");

/// Every collection the store holds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(super) struct Collections {
    pub(super) users: Vec<User>,
    pub(super) advertisers: Vec<Advertiser>,
    pub(super) inventory: Vec<Inventory>,
    pub(super) deals: Vec<Deal>,
    pub(super) campaigns: Vec<Campaign>,
    pub(super) creatives: Vec<Creative>,
    pub(super) invoices: Vec<Invoice>,
    pub(super) billing: BillingProfile,
    pub(super) analytics: AnalyticsSnapshot,
    pub(super) publisher_dashboard: DashboardSnapshot,
    pub(super) audience_segments: Vec<String>,
}

impl Collections {
    /// Decode the embedded fixture.
    pub(super) fn embedded() -> Result<Self, StoreError> {
        serde_json::from_str(SEED_JSON).map_err(|err| StoreError::seed(err.to_string()))
    }
}
