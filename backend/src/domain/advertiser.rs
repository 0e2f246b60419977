//! Advertiser companies owned by advertiser users.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::filter::Filterable;
use super::record::{Record, RecordId, merge};

/// Industry assigned when the caller leaves it blank.
pub const DEFAULT_INDUSTRY: &str = "General";

/// An advertiser company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Advertiser {
    /// Store identity, `adv-*`.
    pub id: RecordId,
    /// Owning user.
    pub user_id: RecordId,
    /// Company name.
    pub company_name: String,
    /// Industry vertical.
    pub industry: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating an advertiser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertiserDraft {
    /// Owning user.
    pub user_id: RecordId,
    /// Company name.
    pub company_name: String,
    /// Industry vertical, defaulting to [`DEFAULT_INDUSTRY`].
    pub industry: Option<String>,
}

/// Partial update of an advertiser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserPatch {
    /// New company name.
    pub company_name: Option<String>,
    /// New industry.
    pub industry: Option<String>,
    /// New owning user.
    pub user_id: Option<RecordId>,
}

impl Record for Advertiser {
    const PREFIX: &'static str = "adv";
    const LABEL: &'static str = "Advertiser";

    type Draft = AdvertiserDraft;
    type Patch = AdvertiserPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: AdvertiserDraft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            company_name: draft.company_name,
            industry: draft
                .industry
                .unwrap_or_else(|| DEFAULT_INDUSTRY.to_owned()),
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: AdvertiserPatch) {
        merge(&mut self.company_name, patch.company_name);
        merge(&mut self.industry, patch.industry);
        merge(&mut self.user_id, patch.user_id);
    }
}

impl Filterable for Advertiser {
    fn kind_label(&self) -> Option<&str> {
        Some(&self.industry)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.company_name, &self.industry]
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.created_at.date_naive())
    }
}
