//! Advertiser campaigns: flight window, budget, targeting, and delivery
//! metrics.
//!
//! Metrics are owned by the delivery system, not by clients. A new campaign
//! always starts from [`CampaignMetrics::default`] regardless of what the
//! creation payload carries, and patches cannot touch them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::deal::days_after;
use super::filter::Filterable;
use super::labels::labelled_enum;
use super::record::{Record, RecordId, merge};

/// Length of the default flight window in days.
pub const DEFAULT_FLIGHT_DAYS: u64 = 30;

labelled_enum! {
    /// Campaign lifecycle.
    pub enum CampaignStatus {
        /// Being edited; not serving.
        Draft => "draft",
        /// Submitted for review.
        Pending => "pending",
        /// Serving.
        Active => "active",
        /// Halted by the advertiser.
        Paused => "paused",
        /// Flight finished.
        Completed => "completed",
    }
}

labelled_enum! {
    /// Budget delivery pacing.
    pub enum Pacing {
        /// Ad server default pacing.
        Standard => "Standard",
        /// Spread spend evenly across the flight.
        Evenly => "Evenly",
        /// Spend as fast as inventory allows.
        Accelerated => "Accelerated",
    }
}

labelled_enum! {
    /// Device classes a campaign can target.
    pub enum Device {
        /// Desktop browsers.
        Desktop => "Desktop",
        /// Phones.
        Mobile => "Mobile",
        /// Tablets.
        Tablet => "Tablet",
    }
}

labelled_enum! {
    /// Mobile operating systems a campaign can target.
    pub enum OperatingSystem {
        /// Apple iOS.
        Ios => "iOS",
        /// Google Android.
        Android => "Android",
    }
}

/// Campaign flight window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightDates {
    /// First serving day.
    pub start_date: NaiveDate,
    /// Last serving day.
    pub end_date: NaiveDate,
    /// Whether delivery follows a day-parting schedule.
    pub run_on_schedule: bool,
}

impl FlightDates {
    /// Window of [`DEFAULT_FLIGHT_DAYS`] starting on `start`, unscheduled.
    #[must_use]
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start_date: start,
            end_date: days_after(start, DEFAULT_FLIGHT_DAYS),
            run_on_schedule: false,
        }
    }
}

/// Spend limits and pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Lifetime budget.
    pub total: f64,
    /// Daily spend cap.
    pub daily: f64,
    /// Bid price per thousand impressions.
    pub cpm_price: f64,
    /// Maximum impressions per user per day.
    pub frequency_cap: u32,
    /// Delivery pacing.
    pub pacing: Pacing,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            total: 10_000.0,
            daily: 333.0,
            cpm_price: 5.0,
            frequency_cap: 3,
            pacing: Pacing::Standard,
        }
    }
}

/// Supply sources the campaign may buy from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InventorySelection {
    /// Premium owned-and-operated inventory.
    #[serde(rename = "premiumSRMG")]
    pub premium_srmg: bool,
    /// Open exchange inventory.
    #[serde(rename = "openMarket")]
    pub open_market: bool,
}

impl Default for InventorySelection {
    fn default() -> Self {
        Self {
            premium_srmg: true,
            open_market: false,
        }
    }
}

/// Audience and placement targeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Targeting {
    /// Countries or regions.
    #[serde(default)]
    pub geo: Vec<String>,
    /// Device classes.
    #[serde(default)]
    pub devices: Vec<Device>,
    /// Mobile operating systems.
    #[serde(default)]
    pub os: Vec<OperatingSystem>,
    /// Browser names.
    #[serde(default)]
    pub browsers: Vec<String>,
    /// Inventory slot ids.
    #[serde(default)]
    pub ad_slots: Vec<String>,
    /// Page content categories.
    #[serde(default)]
    pub contextual_categories: Vec<String>,
    /// Audience segment names.
    #[serde(default)]
    pub audiences: Vec<String>,
}

impl Default for Targeting {
    fn default() -> Self {
        Self {
            geo: Vec::new(),
            devices: Device::ALL.to_vec(),
            os: Vec::new(),
            browsers: Vec::new(),
            ad_slots: Vec::new(),
            contextual_categories: Vec::new(),
            audiences: Vec::new(),
        }
    }
}

/// Delivery counters reported for a campaign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CampaignMetrics {
    /// Impressions served.
    pub impressions: u64,
    /// Clicks recorded.
    pub clicks: u64,
    /// Click-through rate, percent.
    pub ctr: f64,
    /// Amount spent.
    pub spend: f64,
    /// Conversions attributed.
    pub conversions: u64,
    /// Conversion rate, percent.
    pub cvr: f64,
}

/// An advertiser campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Store identity, `camp-*`.
    pub id: RecordId,
    /// Owning advertiser.
    pub advertiser_id: RecordId,
    /// Campaign name.
    pub name: String,
    /// Lifecycle status.
    pub status: CampaignStatus,
    /// Flight window.
    pub flight_dates: FlightDates,
    /// Spend limits.
    pub budget: Budget,
    /// Supply sources.
    pub inventory: InventorySelection,
    /// Targeting rules.
    pub targeting: Targeting,
    /// Attached creatives.
    pub creative_ids: Vec<RecordId>,
    /// Delivery counters.
    pub metrics: CampaignMetrics,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignDraft {
    /// Owning advertiser.
    pub advertiser_id: RecordId,
    /// Campaign name.
    pub name: String,
    /// Status; defaults to draft.
    pub status: Option<CampaignStatus>,
    /// Flight window; defaults to [`FlightDates::starting`] the creation date.
    pub flight_dates: Option<FlightDates>,
    /// Budget; defaults to [`Budget::default`].
    pub budget: Option<Budget>,
    /// Supply sources; defaults to premium only.
    pub inventory: Option<InventorySelection>,
    /// Targeting; defaults to every device and nothing else.
    pub targeting: Option<Targeting>,
    /// Attached creatives; defaults to none.
    pub creative_ids: Option<Vec<RecordId>>,
}

impl CampaignDraft {
    /// Draft with only the required fields set.
    pub fn new(advertiser_id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            advertiser_id: advertiser_id.into(),
            name: name.into(),
            status: None,
            flight_dates: None,
            budget: None,
            inventory: None,
            targeting: None,
            creative_ids: None,
        }
    }
}

/// Partial update of a campaign.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPatch {
    /// New owning advertiser.
    pub advertiser_id: Option<RecordId>,
    /// New name.
    pub name: Option<String>,
    /// New status.
    pub status: Option<CampaignStatus>,
    /// Replacement flight window.
    pub flight_dates: Option<FlightDates>,
    /// Replacement budget.
    pub budget: Option<Budget>,
    /// Replacement supply sources.
    pub inventory: Option<InventorySelection>,
    /// Replacement targeting.
    pub targeting: Option<Targeting>,
    /// Replacement creative list.
    pub creative_ids: Option<Vec<RecordId>>,
}

impl Record for Campaign {
    const PREFIX: &'static str = "camp";
    const LABEL: &'static str = "Campaign";

    type Draft = CampaignDraft;
    type Patch = CampaignPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: CampaignDraft) -> Self {
        let today = created_at.date_naive();
        Self {
            id,
            advertiser_id: draft.advertiser_id,
            name: draft.name,
            status: draft.status.unwrap_or(CampaignStatus::Draft),
            flight_dates: draft
                .flight_dates
                .unwrap_or_else(|| FlightDates::starting(today)),
            budget: draft.budget.unwrap_or_default(),
            inventory: draft.inventory.unwrap_or_default(),
            targeting: draft.targeting.unwrap_or_default(),
            creative_ids: draft.creative_ids.unwrap_or_default(),
            metrics: CampaignMetrics::default(),
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: CampaignPatch) {
        merge(&mut self.advertiser_id, patch.advertiser_id);
        merge(&mut self.name, patch.name);
        merge(&mut self.status, patch.status);
        merge(&mut self.flight_dates, patch.flight_dates);
        merge(&mut self.budget, patch.budget);
        merge(&mut self.inventory, patch.inventory);
        merge(&mut self.targeting, patch.targeting);
        merge(&mut self.creative_ids, patch.creative_ids);
    }
}

impl Filterable for Campaign {
    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn advertiser_ref(&self) -> Option<&str> {
        Some(self.advertiser_id.as_str())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.flight_dates.start_date)
    }
}
