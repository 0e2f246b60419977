//! Advertiser analytics endpoint.

use actix_web::{HttpResponse, get, web};

use super::ApiResult;
use super::auth::Authenticated;
use super::envelope::{Envelope, ErrorEnvelope, ok};
use super::query::ListQuery;
use super::state::HttpState;
use crate::domain::analytics::AnalyticsReport;

/// Delivery report for one advertiser, or all of them.
///
/// Reads `advertiserId`, `startDate`, and `endDate`; other list parameters
/// are ignored.
#[utoipa::path(
    get,
    path = "/api/advertiser/analytics",
    params(ListQuery),
    responses(
        (status = 200, description = "Analytics report", body = Envelope<AnalyticsReport>),
        (status = 400, description = "Malformed date", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["analytics"],
    operation_id = "advertiserAnalytics",
    security(("bearer" = []))
)]
#[get("/advertiser/analytics")]
pub async fn advertiser_analytics(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    let scope = query.into_inner().into_scope()?;
    let report = AnalyticsReport::build(
        &state.snapshots.analytics()?,
        state.campaigns.list()?,
        &state.creatives.list()?,
        &scope,
    );
    Ok(ok(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{TestApp, bearer, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;

    async fn report(uri: &str) -> AnalyticsReport {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let req = actix_test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer(&harness.token()))
            .to_request();
        let body: Envelope<AnalyticsReport> = actix_test::call_and_read_body_json(&app, req).await;
        body.data
    }

    #[actix_web::test]
    async fn unscoped_report_covers_every_day() {
        let report = report("/api/advertiser/analytics").await;
        assert_eq!(report.performance_by_day.len(), 14);
        assert_eq!(report.summary.total_campaigns, 2);
        assert_eq!(report.device_breakdown.len(), 3);
    }

    #[rstest]
    #[case("startDate=2025-06-20&endDate=2025-06-22", 3)]
    #[case("startDate=2025-07-01", 1)]
    #[case("endDate=2025-06-17", 0)]
    #[actix_web::test]
    async fn date_bounds_are_inclusive(#[case] query: &str, #[case] days: usize) {
        let report = report(&format!("/api/advertiser/analytics?{query}")).await;
        assert_eq!(report.performance_by_day.len(), days);
    }

    #[actix_web::test]
    async fn unknown_advertiser_has_no_campaigns() {
        let report = report("/api/advertiser/analytics?advertiserId=adv-404").await;
        assert_eq!(report.summary.total_campaigns, 0);
        assert!(report.top_campaigns.is_empty());
        assert_eq!(report.summary.campaign_totals.ctr, 0.0);
    }

    #[actix_web::test]
    async fn malformed_dates_are_rejected() {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let req = actix_test::TestRequest::get()
            .uri("/api/advertiser/analytics?startDate=June")
            .insert_header(bearer(&harness.token()))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
