//! Advertiser analytics: the stored delivery snapshot and the report derived
//! from it on each request.
//!
//! Every ratio goes through [`ratio`], which yields `0.0` for a zero
//! denominator, so empty or undelivered data never produces NaN.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::campaign::{Campaign, CampaignStatus};
use super::creative::{Creative, CreativeType};
use super::filter::DateRange;
use super::record::RecordId;

/// Number of campaigns listed in [`AnalyticsReport::top_campaigns`].
pub const TOP_CAMPAIGN_COUNT: usize = 5;

/// Delivery for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetric {
    /// Calendar day.
    pub date: NaiveDate,
    /// Impressions served.
    pub impressions: u64,
    /// Clicks recorded.
    pub clicks: u64,
    /// Conversions attributed.
    pub conversions: u64,
    /// Amount spent.
    pub spend: f64,
}

/// Share of delivery per device class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceShare {
    /// Device class name.
    pub device: String,
    /// Share of impressions, percent.
    pub percentage: f64,
    /// Impressions served.
    pub impressions: u64,
}

/// Delivery per country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeoPerformance {
    /// Country name.
    pub country: String,
    /// Impressions served.
    pub impressions: u64,
    /// Clicks recorded.
    pub clicks: u64,
    /// Amount spent.
    pub spend: f64,
}

/// Stored delivery data the report is computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    /// Daily delivery, oldest first.
    pub daily_metrics: Vec<DailyMetric>,
    /// Device breakdown.
    pub device_breakdown: Vec<DeviceShare>,
    /// Country breakdown.
    pub geo_performance: Vec<GeoPerformance>,
}

/// Revenue for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyRevenue {
    /// Calendar day.
    pub date: NaiveDate,
    /// Revenue (advertiser spend).
    pub revenue: f64,
}

impl AnalyticsSnapshot {
    /// Revenue series, oldest first. Publisher revenue is advertiser spend.
    #[must_use]
    pub fn revenue_by_day(&self) -> Vec<DailyRevenue> {
        self.daily_metrics
            .iter()
            .map(|day| DailyRevenue {
                date: day.date,
                revenue: day.spend,
            })
            .collect()
    }
}

/// `numerator / denominator`, or `0.0` when the denominator is zero.
///
/// # Examples
/// ```
/// use adtech::domain::analytics::ratio;
///
/// assert_eq!(ratio(5.0, 0.0), 0.0);
/// assert_eq!(ratio(1.0, 4.0), 0.25);
/// ```
#[must_use]
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Summed delivery with derived rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTotals {
    /// Impressions served.
    pub impressions: u64,
    /// Clicks recorded.
    pub clicks: u64,
    /// Conversions attributed.
    pub conversions: u64,
    /// Amount spent.
    pub spend: f64,
    /// Clicks per hundred impressions.
    pub ctr: f64,
    /// Spend per click.
    pub cpc: f64,
    /// Spend per thousand impressions.
    pub cpm: f64,
}

impl PerformanceTotals {
    fn accumulate(mut self, impressions: u64, clicks: u64, conversions: u64, spend: f64) -> Self {
        self.impressions = self.impressions.saturating_add(impressions);
        self.clicks = self.clicks.saturating_add(clicks);
        self.conversions = self.conversions.saturating_add(conversions);
        self.spend += spend;
        self
    }

    fn with_rates(mut self) -> Self {
        let impressions = self.impressions as f64;
        let clicks = self.clicks as f64;
        self.ctr = ratio(clicks, impressions) * 100.0;
        self.cpc = ratio(self.spend, clicks);
        self.cpm = ratio(self.spend, impressions) * 1000.0;
        self
    }

    /// Totals over daily delivery rows.
    #[must_use]
    pub fn from_days(days: &[DailyMetric]) -> Self {
        days.iter()
            .fold(Self::default(), |acc, day| {
                acc.accumulate(day.impressions, day.clicks, day.conversions, day.spend)
            })
            .with_rates()
    }

    /// Totals over campaign counters.
    #[must_use]
    pub fn from_campaigns(campaigns: &[Campaign]) -> Self {
        campaigns
            .iter()
            .fold(Self::default(), |acc, campaign| {
                let m = &campaign.metrics;
                acc.accumulate(m.impressions, m.clicks, m.conversions, m.spend)
            })
            .with_rates()
    }
}

/// Headline figures of the analytics report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Impressions over the selected days.
    pub total_impressions: u64,
    /// Clicks over the selected days.
    pub total_clicks: u64,
    /// Conversions over the selected days.
    pub total_conversions: u64,
    /// Spend over the selected days.
    pub total_spent: f64,
    /// Clicks per hundred impressions.
    #[serde(rename = "avgCTR")]
    pub avg_ctr: f64,
    /// Spend per click.
    #[serde(rename = "avgCPC")]
    pub avg_cpc: f64,
    /// Spend per thousand impressions.
    #[serde(rename = "avgCPM")]
    pub avg_cpm: f64,
    /// Campaigns in scope that are active.
    pub active_campaigns: usize,
    /// Campaigns in scope.
    pub total_campaigns: usize,
    /// Totals over the campaigns' own counters.
    pub campaign_totals: PerformanceTotals,
}

/// Campaign ranked by lifetime budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CampaignBudgetRank {
    /// Campaign identity.
    pub id: RecordId,
    /// Campaign name.
    pub name: String,
    /// Lifecycle status.
    pub status: CampaignStatus,
    /// Lifetime budget.
    pub budget: f64,
}

/// Number of creatives of one format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreativeTypeCount {
    /// Asset format.
    #[serde(rename = "type")]
    pub creative_type: CreativeType,
    /// Creatives of that format.
    pub count: usize,
}

/// Which slice of the data a report covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsScope {
    /// Restrict campaigns and creatives to one advertiser.
    pub advertiser_id: Option<String>,
    /// Restrict daily rows to a date range.
    pub dates: DateRange,
}

/// Advertiser analytics report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    /// Headline figures.
    pub summary: AnalyticsSummary,
    /// Daily rows in scope, oldest first.
    pub performance_by_day: Vec<DailyMetric>,
    /// Device breakdown.
    pub device_breakdown: Vec<DeviceShare>,
    /// Country breakdown.
    pub geo_breakdown: Vec<GeoPerformance>,
    /// Campaigns with the largest budgets.
    pub top_campaigns: Vec<CampaignBudgetRank>,
    /// Creative counts per format, in order of first appearance.
    pub creatives_by_type: Vec<CreativeTypeCount>,
}

impl AnalyticsReport {
    /// Compute the report for `scope` from stored records.
    #[must_use]
    pub fn build(
        snapshot: &AnalyticsSnapshot,
        campaigns: Vec<Campaign>,
        creatives: &[Creative],
        scope: &AnalyticsScope,
    ) -> Self {
        let owned_by = |advertiser: &RecordId| {
            scope
                .advertiser_id
                .as_deref()
                .is_none_or(|wanted| advertiser.as_str() == wanted)
        };
        let mut campaigns: Vec<Campaign> = campaigns
            .into_iter()
            .filter(|campaign| owned_by(&campaign.advertiser_id))
            .collect();
        let performance_by_day: Vec<DailyMetric> = snapshot
            .daily_metrics
            .iter()
            .filter(|day| scope.dates.contains(day.date))
            .copied()
            .collect();

        let daily = PerformanceTotals::from_days(&performance_by_day);
        let summary = AnalyticsSummary {
            total_impressions: daily.impressions,
            total_clicks: daily.clicks,
            total_conversions: daily.conversions,
            total_spent: daily.spend,
            avg_ctr: daily.ctr,
            avg_cpc: daily.cpc,
            avg_cpm: daily.cpm,
            active_campaigns: campaigns
                .iter()
                .filter(|campaign| campaign.status == CampaignStatus::Active)
                .count(),
            total_campaigns: campaigns.len(),
            campaign_totals: PerformanceTotals::from_campaigns(&campaigns),
        };

        campaigns.sort_by(|a, b| b.budget.total.total_cmp(&a.budget.total));
        let top_campaigns = campaigns
            .into_iter()
            .take(TOP_CAMPAIGN_COUNT)
            .map(|campaign| CampaignBudgetRank {
                id: campaign.id,
                name: campaign.name,
                status: campaign.status,
                budget: campaign.budget.total,
            })
            .collect();

        let creatives_by_type = count_by_type(
            creatives
                .iter()
                .filter(|creative| owned_by(&creative.advertiser_id)),
        );

        Self {
            summary,
            performance_by_day,
            device_breakdown: snapshot.device_breakdown.clone(),
            geo_breakdown: snapshot.geo_performance.clone(),
            top_campaigns,
            creatives_by_type,
        }
    }
}

fn count_by_type<'a>(creatives: impl Iterator<Item = &'a Creative>) -> Vec<CreativeTypeCount> {
    let mut counts: Vec<CreativeTypeCount> = Vec::new();
    for creative in creatives {
        match counts
            .iter_mut()
            .find(|entry| entry.creative_type == creative.creative_type)
        {
            Some(entry) => entry.count += 1,
            None => counts.push(CreativeTypeCount {
                creative_type: creative.creative_type,
                count: 1,
            }),
        }
    }
    counts
}

#[cfg(test)]
mod tests;
