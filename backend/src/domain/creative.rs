//! Advertiser creatives (ad assets).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::filter::Filterable;
use super::inventory::Dimensions;
use super::labels::labelled_enum;
use super::record::{Record, RecordId, merge, merge_optional};

labelled_enum! {
    /// Asset format.
    pub enum CreativeType {
        /// Static or animated banner.
        Display => "Display",
        /// Video spot.
        Video => "Video",
        /// Native placement.
        Native => "Native",
    }
}

labelled_enum! {
    /// Review state. Any state may follow any other.
    pub enum CreativeStatus {
        /// Being prepared.
        Draft => "draft",
        /// Awaiting review.
        Submitted => "submitted",
        /// Cleared to serve.
        Approved => "approved",
        /// Refused by review.
        Rejected => "rejected",
    }
}

/// An uploaded creative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Creative {
    /// Store identity, `creative-*`.
    pub id: RecordId,
    /// Owning advertiser.
    pub advertiser_id: RecordId,
    /// Creative name.
    pub name: String,
    /// Asset format.
    #[serde(rename = "type")]
    pub creative_type: CreativeType,
    /// Uploaded file name.
    pub file_name: String,
    /// Uploaded file size in bytes.
    pub file_size: u64,
    /// Rendered size, when the format has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    /// Click-through destination.
    pub landing_page_url: String,
    /// Review state.
    pub status: CreativeStatus,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a creative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreativeDraft {
    /// Owning advertiser.
    pub advertiser_id: RecordId,
    /// Creative name.
    pub name: String,
    /// Asset format.
    pub creative_type: CreativeType,
    /// File name; defaults to `creative.png`.
    pub file_name: Option<String>,
    /// File size; defaults to zero.
    pub file_size: Option<u64>,
    /// Rendered size; defaults to 300x250.
    pub dimensions: Option<Dimensions>,
    /// Landing page; defaults to empty.
    pub landing_page_url: Option<String>,
    /// Review state; defaults to draft.
    pub status: Option<CreativeStatus>,
}

/// Partial update of a creative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreativePatch {
    /// New owning advertiser.
    pub advertiser_id: Option<RecordId>,
    /// New name.
    pub name: Option<String>,
    /// New format.
    #[serde(rename = "type")]
    pub creative_type: Option<CreativeType>,
    /// New file name.
    pub file_name: Option<String>,
    /// New file size.
    pub file_size: Option<u64>,
    /// New rendered size.
    pub dimensions: Option<Dimensions>,
    /// New landing page.
    pub landing_page_url: Option<String>,
    /// New review state.
    pub status: Option<CreativeStatus>,
}

impl Record for Creative {
    const PREFIX: &'static str = "creative";
    const LABEL: &'static str = "Creative";

    type Draft = CreativeDraft;
    type Patch = CreativePatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: CreativeDraft) -> Self {
        Self {
            id,
            advertiser_id: draft.advertiser_id,
            name: draft.name,
            creative_type: draft.creative_type,
            file_name: draft
                .file_name
                .unwrap_or_else(|| "creative.png".to_owned()),
            file_size: draft.file_size.unwrap_or_default(),
            dimensions: Some(draft.dimensions.unwrap_or(Dimensions::MEDIUM_RECTANGLE)),
            landing_page_url: draft.landing_page_url.unwrap_or_default(),
            status: draft.status.unwrap_or(CreativeStatus::Draft),
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: CreativePatch) {
        merge(&mut self.advertiser_id, patch.advertiser_id);
        merge(&mut self.name, patch.name);
        merge(&mut self.creative_type, patch.creative_type);
        merge(&mut self.file_name, patch.file_name);
        merge(&mut self.file_size, patch.file_size);
        merge_optional(&mut self.dimensions, patch.dimensions);
        merge(&mut self.landing_page_url, patch.landing_page_url);
        merge(&mut self.status, patch.status);
    }
}

impl Filterable for Creative {
    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn kind_label(&self) -> Option<&str> {
        Some(self.creative_type.as_str())
    }

    fn advertiser_ref(&self) -> Option<&str> {
        Some(self.advertiser_id.as_str())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.created_at.date_naive())
    }
}
