//! Publisher dashboard endpoint.

use actix_web::{HttpResponse, get, web};

use super::ApiResult;
use super::auth::Authenticated;
use super::envelope::{Envelope, ErrorEnvelope, ok};
use super::state::HttpState;
use crate::domain::dashboard::PublisherDashboard;

/// Headline figures, revenue trend, and recent deals.
///
/// Counts are recomputed from the stored inventory and deals on every call.
#[utoipa::path(
    get,
    path = "/api/publisher/dashboard",
    responses(
        (status = 200, description = "Dashboard", body = Envelope<PublisherDashboard>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["dashboard"],
    operation_id = "publisherDashboard",
    security(("bearer" = []))
)]
#[get("/publisher/dashboard")]
pub async fn publisher_dashboard(
    _auth: Authenticated,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    let dashboard = PublisherDashboard::build(
        state.snapshots.publisher_dashboard()?,
        &state.snapshots.analytics()?,
        &state.inventory.list()?,
        state.deals.list()?,
    );
    Ok(ok(dashboard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{TestApp, bearer, test_app};
    use actix_web::test as actix_test;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn counts_follow_stored_deals() {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let token = harness.token();

        let before: Envelope<PublisherDashboard> = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/publisher/dashboard")
                .insert_header(bearer(&token))
                .to_request(),
        )
        .await;

        let _: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/publisher/deals")
                .insert_header(bearer(&token))
                .set_json(json!({
                    "dealName": "Late Night",
                    "advertiserId": "adv-3",
                    "advertiserName": "Top Company"
                }))
                .to_request(),
        )
        .await;

        let after: Envelope<PublisherDashboard> = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/publisher/dashboard")
                .insert_header(bearer(&token))
                .to_request(),
        )
        .await;

        assert_eq!(after.data.summary.total_deals, before.data.summary.total_deals + 1);
        assert_eq!(
            after.data.summary.pending_deals,
            before.data.summary.pending_deals + 1
        );
        assert_eq!(after.data.summary.ecpm, 2.45);
        assert_eq!(
            after.data.recent_deals.first().map(|d| d.name.as_str()),
            Some("Late Night")
        );
    }
}
