//! Report derivation over small hand-built data sets.

use super::*;
use crate::domain::campaign::{CampaignDraft, CampaignMetrics};
use crate::domain::creative::{CreativeDraft, CreativeStatus};
use crate::domain::record::Record;
use chrono::{DateTime, TimeZone, Utc};
use rstest::{fixture, rstest};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).expect("valid date")
}

fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0)
        .single()
        .expect("valid instant")
}

fn campaign(id: &str, advertiser: &str, budget: f64, status: CampaignStatus) -> Campaign {
    let mut campaign = Campaign::from_draft(
        RecordId::new(id),
        created(),
        CampaignDraft {
            status: Some(status),
            ..CampaignDraft::new(advertiser, id)
        },
    );
    campaign.budget.total = budget;
    campaign
}

fn creative(advertiser: &str, kind: CreativeType) -> Creative {
    Creative::from_draft(
        RecordId::new("creative-1"),
        created(),
        CreativeDraft {
            advertiser_id: RecordId::new(advertiser),
            name: "asset".to_owned(),
            creative_type: kind,
            file_name: None,
            file_size: None,
            dimensions: None,
            landing_page_url: None,
            status: Some(CreativeStatus::Approved),
        },
    )
}

#[fixture]
fn snapshot() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        daily_metrics: vec![
            DailyMetric {
                date: day(1),
                impressions: 1_000,
                clicks: 10,
                conversions: 1,
                spend: 5.0,
            },
            DailyMetric {
                date: day(2),
                impressions: 3_000,
                clicks: 30,
                conversions: 2,
                spend: 15.0,
            },
            DailyMetric {
                date: day(3),
                impressions: 4_000,
                clicks: 0,
                conversions: 0,
                spend: 20.0,
            },
        ],
        device_breakdown: Vec::new(),
        geo_performance: Vec::new(),
    }
}

#[rstest]
fn summary_totals_and_rates_cover_days_in_scope(snapshot: AnalyticsSnapshot) {
    let scope = AnalyticsScope {
        advertiser_id: None,
        dates: DateRange::new(Some(day(1)), Some(day(2))),
    };
    let report = AnalyticsReport::build(&snapshot, Vec::new(), &[], &scope);

    assert_eq!(report.performance_by_day.len(), 2);
    assert_eq!(report.summary.total_impressions, 4_000);
    assert_eq!(report.summary.total_clicks, 40);
    assert_eq!(report.summary.total_conversions, 3);
    assert_eq!(report.summary.total_spent, 20.0);
    assert_eq!(report.summary.avg_ctr, 1.0);
    assert_eq!(report.summary.avg_cpc, 0.5);
    assert_eq!(report.summary.avg_cpm, 5.0);
}

#[rstest]
fn zero_impressions_yield_zero_rates() {
    let campaigns = vec![
        campaign("camp-a", "adv-1", 100.0, CampaignStatus::Draft),
        campaign("camp-b", "adv-1", 200.0, CampaignStatus::Draft),
    ];
    let report = AnalyticsReport::build(
        &AnalyticsSnapshot::default(),
        campaigns,
        &[],
        &AnalyticsScope::default(),
    );

    let totals = report.summary.campaign_totals;
    assert_eq!(totals.impressions, 0);
    for value in [totals.ctr, totals.cpc, totals.cpm, report.summary.avg_ctr] {
        assert_eq!(value, 0.0);
        assert!(!value.is_nan());
    }
}

#[rstest]
fn campaign_totals_sum_counters() {
    let mut delivered = campaign("camp-a", "adv-1", 100.0, CampaignStatus::Active);
    delivered.metrics = CampaignMetrics {
        impressions: 2_000,
        clicks: 20,
        ctr: 1.0,
        spend: 10.0,
        conversions: 2,
        cvr: 10.0,
    };
    let totals = PerformanceTotals::from_campaigns(&[delivered]);
    assert_eq!(totals.ctr, 1.0);
    assert_eq!(totals.cpc, 0.5);
    assert_eq!(totals.cpm, 5.0);
}

#[rstest]
fn top_campaigns_rank_by_budget_within_advertiser(snapshot: AnalyticsSnapshot) {
    let campaigns = vec![
        campaign("camp-a", "adv-1", 100.0, CampaignStatus::Active),
        campaign("camp-b", "adv-2", 900.0, CampaignStatus::Active),
        campaign("camp-c", "adv-1", 300.0, CampaignStatus::Paused),
    ];
    let scope = AnalyticsScope {
        advertiser_id: Some("adv-1".to_owned()),
        dates: DateRange::default(),
    };
    let report = AnalyticsReport::build(&snapshot, campaigns, &[], &scope);

    let ranked: Vec<_> = report
        .top_campaigns
        .iter()
        .map(|rank| rank.id.as_str())
        .collect();
    assert_eq!(ranked, ["camp-c", "camp-a"]);
    assert_eq!(report.summary.total_campaigns, 2);
    assert_eq!(report.summary.active_campaigns, 1);
}

#[rstest]
fn top_campaigns_are_capped(snapshot: AnalyticsSnapshot) {
    let campaigns = (0..8)
        .map(|n| campaign(&format!("camp-{n}"), "adv-1", f64::from(n), CampaignStatus::Active))
        .collect();
    let report = AnalyticsReport::build(&snapshot, campaigns, &[], &AnalyticsScope::default());
    assert_eq!(report.top_campaigns.len(), TOP_CAMPAIGN_COUNT);
    assert_eq!(report.top_campaigns.first().map(|r| r.budget), Some(7.0));
}

#[rstest]
fn creatives_are_counted_by_type_in_first_seen_order(snapshot: AnalyticsSnapshot) {
    let creatives = [
        creative("adv-1", CreativeType::Video),
        creative("adv-1", CreativeType::Display),
        creative("adv-1", CreativeType::Video),
        creative("adv-2", CreativeType::Native),
    ];
    let scope = AnalyticsScope {
        advertiser_id: Some("adv-1".to_owned()),
        dates: DateRange::default(),
    };
    let report = AnalyticsReport::build(&snapshot, Vec::new(), &creatives, &scope);
    assert_eq!(
        report.creatives_by_type,
        vec![
            CreativeTypeCount {
                creative_type: CreativeType::Video,
                count: 2
            },
            CreativeTypeCount {
                creative_type: CreativeType::Display,
                count: 1
            },
        ]
    );
}

#[rstest]
fn revenue_series_mirrors_spend(snapshot: AnalyticsSnapshot) {
    let revenue = snapshot.revenue_by_day();
    assert_eq!(revenue.len(), 3);
    assert_eq!(revenue.last().map(|r| r.revenue), Some(20.0));
}
