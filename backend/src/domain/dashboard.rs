//! Publisher dashboard: stored headline snapshot plus counts recomputed from
//! inventory and deals.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::analytics::{AnalyticsSnapshot, DailyRevenue};
use super::deal::{Deal, DealStatus, DealType};
use super::inventory::{Inventory, InventoryStatus};
use super::record::RecordId;

/// Days of revenue shown on the dashboard.
pub const REVENUE_WINDOW_DAYS: usize = 7;
/// Deals listed under recent activity.
pub const RECENT_DEAL_COUNT: usize = 5;

/// Revenue attributed to one buyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CampaignRevenue {
    /// Buyer or campaign name.
    pub name: String,
    /// Revenue.
    pub revenue: f64,
}

/// Share of impressions per supply source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventorySource {
    /// Supply source name.
    pub source: String,
    /// Share, percent.
    pub value: f64,
    /// Chart colour.
    pub color: String,
}

/// Stored publisher headline figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Effective revenue per thousand impressions.
    #[serde(rename = "eCPM")]
    pub ecpm: f64,
    /// Impressions served.
    pub impressions: u64,
    /// Filled requests, percent.
    pub fill_rate: f64,
    /// Revenue.
    pub revenue: f64,
    /// Best-earning buyers.
    pub top_campaigns: Vec<CampaignRevenue>,
    /// Supply mix.
    pub inventory_breakdown: Vec<InventorySource>,
}

/// Headline figures plus live counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Effective revenue per thousand impressions.
    #[serde(rename = "eCPM")]
    pub ecpm: f64,
    /// Impressions served.
    pub impressions: u64,
    /// Filled requests, percent.
    pub fill_rate: f64,
    /// Revenue.
    pub revenue: f64,
    /// Active inventory slots.
    pub active_inventory: usize,
    /// All inventory slots.
    pub total_inventory: usize,
    /// Active deals.
    pub active_deals: usize,
    /// Deals awaiting approval.
    pub pending_deals: usize,
    /// All deals.
    pub total_deals: usize,
}

/// Condensed deal row for the activity list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecentDeal {
    /// Deal identity.
    pub id: RecordId,
    /// Deal name.
    pub name: String,
    /// Buyer name.
    pub advertiser: String,
    /// Transaction type.
    #[serde(rename = "type")]
    pub deal_type: DealType,
    /// Price.
    pub price: f64,
    /// Lifecycle status.
    pub status: DealStatus,
}

/// Publisher dashboard payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublisherDashboard {
    /// Headline figures and counts.
    pub summary: DashboardSummary,
    /// Last [`REVENUE_WINDOW_DAYS`] days of revenue, oldest first.
    pub revenue_by_day: Vec<DailyRevenue>,
    /// Best-earning buyers.
    pub top_campaigns: Vec<CampaignRevenue>,
    /// Supply mix.
    pub inventory_breakdown: Vec<InventorySource>,
    /// Newest deals first.
    pub recent_deals: Vec<RecentDeal>,
}

impl PublisherDashboard {
    /// Assemble the dashboard from stored data.
    #[must_use]
    pub fn build(
        snapshot: DashboardSnapshot,
        analytics: &AnalyticsSnapshot,
        inventory: &[Inventory],
        mut deals: Vec<Deal>,
    ) -> Self {
        let deals_with = |status: DealStatus| deals.iter().filter(|d| d.status == status).count();
        let summary = DashboardSummary {
            ecpm: snapshot.ecpm,
            impressions: snapshot.impressions,
            fill_rate: snapshot.fill_rate,
            revenue: snapshot.revenue,
            active_inventory: inventory
                .iter()
                .filter(|slot| slot.status == InventoryStatus::Active)
                .count(),
            total_inventory: inventory.len(),
            active_deals: deals_with(DealStatus::Active),
            pending_deals: deals_with(DealStatus::Pending),
            total_deals: deals.len(),
        };

        let mut revenue_by_day = analytics.revenue_by_day();
        let skip = revenue_by_day.len().saturating_sub(REVENUE_WINDOW_DAYS);
        revenue_by_day.drain(..skip);

        deals.sort_by_key(|deal| Reverse(deal.created_at));
        let recent_deals = deals
            .into_iter()
            .take(RECENT_DEAL_COUNT)
            .map(|deal| RecentDeal {
                id: deal.id,
                name: deal.deal_name,
                advertiser: deal.advertiser_name,
                deal_type: deal.deal_type,
                price: deal.price_value,
                status: deal.status,
            })
            .collect();

        Self {
            summary,
            revenue_by_day,
            top_campaigns: snapshot.top_campaigns,
            inventory_breakdown: snapshot.inventory_breakdown,
            recent_deals,
        }
    }
}
