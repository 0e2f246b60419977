//! Publisher deals granting an advertiser access to inventory.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::filter::Filterable;
use super::labels::labelled_enum;
use super::record::{Record, RecordId, merge};

/// Length of the default deal window in days.
pub const DEFAULT_DEAL_DAYS: u64 = 30;

labelled_enum! {
    /// How the deal is transacted.
    pub enum DealType {
        /// Negotiated directly with the advertiser.
        Direct => "Direct",
        /// Private marketplace.
        Pmp => "PMP",
    }
}

labelled_enum! {
    /// How `priceValue` is interpreted.
    pub enum PriceOption {
        /// The advertiser pays exactly the price.
        FixedPrice => "Fixed Price",
        /// Bids must clear the price.
        PriceFloor => "Price Floor",
    }
}

labelled_enum! {
    /// Deal lifecycle.
    pub enum DealStatus {
        /// Running.
        Active => "active",
        /// Awaiting approval.
        Pending => "pending",
        /// Finished.
        Completed => "completed",
        /// Temporarily halted.
        Paused => "paused",
    }
}

/// A deal between a publisher and an advertiser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    /// Store identity, `deal-*`.
    pub id: RecordId,
    /// Selling publisher.
    pub publisher_id: String,
    /// Deal name.
    pub deal_name: String,
    /// Inventory slot covered by the deal.
    pub inventory_id: RecordId,
    /// Buying advertiser.
    pub advertiser_id: RecordId,
    /// Buying advertiser's display name.
    pub advertiser_name: String,
    /// First day of the deal.
    pub start_date: NaiveDate,
    /// Last day of the deal.
    pub end_date: NaiveDate,
    /// Transaction type.
    pub deal_type: DealType,
    /// Price interpretation.
    pub price_option: PriceOption,
    /// Price in account currency (CPM).
    pub price_value: f64,
    /// Lifecycle status.
    pub status: DealStatus,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a deal.
#[derive(Debug, Clone, PartialEq)]
pub struct DealDraft {
    /// Deal name.
    pub deal_name: String,
    /// Buying advertiser.
    pub advertiser_id: RecordId,
    /// Buying advertiser's display name.
    pub advertiser_name: String,
    /// Selling publisher; defaults to `pub-1`.
    pub publisher_id: Option<String>,
    /// Inventory slot; defaults to `inv-1`.
    pub inventory_id: Option<RecordId>,
    /// First day; defaults to the creation date.
    pub start_date: Option<NaiveDate>,
    /// Last day; defaults to [`DEFAULT_DEAL_DAYS`] after the creation date.
    pub end_date: Option<NaiveDate>,
    /// Transaction type; defaults to direct.
    pub deal_type: Option<DealType>,
    /// Price interpretation; defaults to fixed price.
    pub price_option: Option<PriceOption>,
    /// Price; defaults to zero.
    pub price_value: Option<f64>,
    /// Status; defaults to pending.
    pub status: Option<DealStatus>,
}

/// Partial update of a deal.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealPatch {
    /// New publisher.
    pub publisher_id: Option<String>,
    /// New name.
    pub deal_name: Option<String>,
    /// New inventory slot.
    pub inventory_id: Option<RecordId>,
    /// New advertiser.
    pub advertiser_id: Option<RecordId>,
    /// New advertiser display name.
    pub advertiser_name: Option<String>,
    /// New first day.
    pub start_date: Option<NaiveDate>,
    /// New last day.
    pub end_date: Option<NaiveDate>,
    /// New transaction type.
    pub deal_type: Option<DealType>,
    /// New price interpretation.
    pub price_option: Option<PriceOption>,
    /// New price.
    pub price_value: Option<f64>,
    /// New status.
    pub status: Option<DealStatus>,
}

impl Record for Deal {
    const PREFIX: &'static str = "deal";
    const LABEL: &'static str = "Deal";

    type Draft = DealDraft;
    type Patch = DealPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: DealDraft) -> Self {
        let today = created_at.date_naive();
        Self {
            id,
            publisher_id: draft.publisher_id.unwrap_or_else(|| "pub-1".to_owned()),
            deal_name: draft.deal_name,
            inventory_id: draft.inventory_id.unwrap_or_else(|| RecordId::new("inv-1")),
            advertiser_id: draft.advertiser_id,
            advertiser_name: draft.advertiser_name,
            start_date: draft.start_date.unwrap_or(today),
            end_date: draft
                .end_date
                .unwrap_or_else(|| days_after(today, DEFAULT_DEAL_DAYS)),
            deal_type: draft.deal_type.unwrap_or(DealType::Direct),
            price_option: draft.price_option.unwrap_or(PriceOption::FixedPrice),
            price_value: draft.price_value.unwrap_or_default(),
            status: draft.status.unwrap_or(DealStatus::Pending),
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: DealPatch) {
        merge(&mut self.publisher_id, patch.publisher_id);
        merge(&mut self.deal_name, patch.deal_name);
        merge(&mut self.inventory_id, patch.inventory_id);
        merge(&mut self.advertiser_id, patch.advertiser_id);
        merge(&mut self.advertiser_name, patch.advertiser_name);
        merge(&mut self.start_date, patch.start_date);
        merge(&mut self.end_date, patch.end_date);
        merge(&mut self.deal_type, patch.deal_type);
        merge(&mut self.price_option, patch.price_option);
        merge(&mut self.price_value, patch.price_value);
        merge(&mut self.status, patch.status);
    }
}

impl Filterable for Deal {
    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn kind_label(&self) -> Option<&str> {
        Some(self.deal_type.as_str())
    }

    fn advertiser_ref(&self) -> Option<&str> {
        Some(self.advertiser_id.as_str())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.deal_name, &self.advertiser_name]
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.start_date)
    }
}

/// `date` plus `days`, saturating at the calendar maximum.
pub(crate) fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}
