//! Publisher ad slots offered for sale.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::filter::Filterable;
use super::labels::labelled_enum;
use super::record::{Record, RecordId, merge};

labelled_enum! {
    /// Ad tag integration used by the slot.
    pub enum TagType {
        /// Google Publisher Tag.
        Gpt => "GPT",
        /// Header bidding via Prebid.
        Prebid => "Prebid",
    }
}

labelled_enum! {
    /// Whether the slot is currently sellable.
    pub enum InventoryStatus {
        /// Serving.
        Active => "active",
        /// Paused by the publisher.
        Inactive => "inactive",
    }
}

/// Creative size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Medium rectangle, the default slot size.
    pub const MEDIUM_RECTANGLE: Self = Self {
        width: 300,
        height: 250,
    };
}

/// A sellable ad slot on a publisher website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    /// Store identity, `inv-*`.
    pub id: RecordId,
    /// Owning publisher.
    pub publisher_id: String,
    /// Website hosting the slot.
    pub website_id: String,
    /// Website domain.
    pub domain_name: String,
    /// Publisher-facing slot identifier.
    pub ad_slot_name_id: String,
    /// Slot size.
    pub dimensions: Dimensions,
    /// Tag integration.
    pub tag_type: TagType,
    /// Ad server unit path.
    pub ad_unit_path: String,
    /// Content category of the hosting page.
    pub page_category: String,
    /// Lifecycle status.
    pub status: InventoryStatus,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating an inventory slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryDraft {
    /// Website domain.
    pub domain_name: String,
    /// Publisher-facing slot identifier.
    pub ad_slot_name_id: String,
    /// Owning publisher; defaults to `pub-1`.
    pub publisher_id: Option<String>,
    /// Hosting website; defaults to `web-1`.
    pub website_id: Option<String>,
    /// Slot size; defaults to 300x250.
    pub dimensions: Option<Dimensions>,
    /// Tag integration; defaults to GPT.
    pub tag_type: Option<TagType>,
    /// Ad unit path; defaults to `/default/ad-unit`.
    pub ad_unit_path: Option<String>,
    /// Page category; defaults to `General`.
    pub page_category: Option<String>,
    /// Status; defaults to active.
    pub status: Option<InventoryStatus>,
}

/// Partial update of an inventory slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPatch {
    /// New publisher.
    pub publisher_id: Option<String>,
    /// New website.
    pub website_id: Option<String>,
    /// New domain.
    pub domain_name: Option<String>,
    /// New slot identifier.
    pub ad_slot_name_id: Option<String>,
    /// New size.
    pub dimensions: Option<Dimensions>,
    /// New tag integration.
    pub tag_type: Option<TagType>,
    /// New ad unit path.
    pub ad_unit_path: Option<String>,
    /// New page category.
    pub page_category: Option<String>,
    /// New status.
    pub status: Option<InventoryStatus>,
}

impl Record for Inventory {
    const PREFIX: &'static str = "inv";
    const LABEL: &'static str = "Inventory";

    type Draft = InventoryDraft;
    type Patch = InventoryPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: InventoryDraft) -> Self {
        Self {
            id,
            publisher_id: draft.publisher_id.unwrap_or_else(|| "pub-1".to_owned()),
            website_id: draft.website_id.unwrap_or_else(|| "web-1".to_owned()),
            domain_name: draft.domain_name,
            ad_slot_name_id: draft.ad_slot_name_id,
            dimensions: draft.dimensions.unwrap_or(Dimensions::MEDIUM_RECTANGLE),
            tag_type: draft.tag_type.unwrap_or(TagType::Gpt),
            ad_unit_path: draft
                .ad_unit_path
                .unwrap_or_else(|| "/default/ad-unit".to_owned()),
            page_category: draft.page_category.unwrap_or_else(|| "General".to_owned()),
            status: draft.status.unwrap_or(InventoryStatus::Active),
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: InventoryPatch) {
        merge(&mut self.publisher_id, patch.publisher_id);
        merge(&mut self.website_id, patch.website_id);
        merge(&mut self.domain_name, patch.domain_name);
        merge(&mut self.ad_slot_name_id, patch.ad_slot_name_id);
        merge(&mut self.dimensions, patch.dimensions);
        merge(&mut self.tag_type, patch.tag_type);
        merge(&mut self.ad_unit_path, patch.ad_unit_path);
        merge(&mut self.page_category, patch.page_category);
        merge(&mut self.status, patch.status);
    }
}

impl Filterable for Inventory {
    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn kind_label(&self) -> Option<&str> {
        Some(self.tag_type.as_str())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.domain_name, &self.ad_slot_name_id]
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.created_at.date_naive())
    }
}
