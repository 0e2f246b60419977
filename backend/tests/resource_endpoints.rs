//! End-to-end CRUD behaviour through the public router.

mod support;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use futures::future::join_all;
use rstest::rstest;
use serde_json::{Value, json};

use adtech::domain::ErrorCode;
use adtech::domain::campaign::{Budget, Campaign, CampaignStatus, Pacing};
use adtech::domain::inventory::Inventory;
use adtech::domain::ports::RecordStore;
use adtech::inbound::http::envelope::{Envelope, ErrorEnvelope};
use support::{Credentials, Harness, api_app, bearer};

#[actix_web::test]
async fn campaign_creation_fills_defaults_and_is_listed() {
    let harness = Harness::new(Credentials::Demo);
    let app = actix_test::init_service(api_app(harness.state.clone())).await;
    let token = harness.token();

    let req = actix_test::TestRequest::post()
        .uri("/api/advertiser/campaigns")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Autumn Push", "advertiserId": "adv-1" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Envelope<Campaign> = actix_test::read_body_json(res).await;
    assert_eq!(created.data.status, CampaignStatus::Draft);
    assert_eq!(
        created.data.budget,
        Budget {
            total: 10_000.0,
            daily: 333.0,
            cpm_price: 5.0,
            frequency_cap: 3,
            pacing: Pacing::Standard,
        }
    );
    assert_eq!(created.data.metrics.impressions, 0);

    let req = actix_test::TestRequest::get()
        .uri("/api/advertiser/campaigns?search=autumn")
        .insert_header(bearer(&token))
        .to_request();
    let listed: Envelope<Vec<Campaign>> = actix_test::call_and_read_body_json(&app, req).await;
    let ids: Vec<_> = listed.data.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids, [created.data.id]);
}

#[actix_web::test]
async fn deleting_unknown_inventory_is_not_found() {
    let harness = Harness::new(Credentials::Demo);
    let app = actix_test::init_service(api_app(harness.state.clone())).await;
    let token = harness.token();
    let before = RecordStore::<Inventory>::list(harness.store.as_ref())
        .expect("inventory lists")
        .len();

    let req = actix_test::TestRequest::delete()
        .uri("/api/publisher/inventory/unknown-id")
        .insert_header(bearer(&token))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: ErrorEnvelope = actix_test::read_body_json(res).await;
    assert!(!body.success);
    assert_eq!(body.error, "Inventory not found");
    assert_eq!(body.code, ErrorCode::NotFound);

    let after = RecordStore::<Inventory>::list(harness.store.as_ref())
        .expect("inventory lists")
        .len();
    assert_eq!(before, after);
}

#[rstest]
#[case::no_header(None)]
#[case::wrong_scheme(Some("Token abc"))]
#[case::garbage_token(Some("Bearer not-a-jwt"))]
#[actix_web::test]
async fn unauthenticated_writes_leave_the_store_untouched(#[case] header: Option<&str>) {
    let harness = Harness::new(Credentials::Demo);
    let app = actix_test::init_service(api_app(harness.state.clone())).await;
    let before = RecordStore::<Campaign>::list(harness.store.as_ref())
        .expect("campaigns list")
        .len();

    let mut req = actix_test::TestRequest::post()
        .uri("/api/advertiser/campaigns")
        .set_json(json!({ "name": "Sneaky", "advertiserId": "adv-1" }));
    if let Some(value) = header {
        req = req.insert_header(("Authorization", value));
    }
    let res = actix_test::call_service(&app, req.to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorEnvelope = actix_test::read_body_json(res).await;
    assert_eq!(body.error, "Unauthorized");

    let after = RecordStore::<Campaign>::list(harness.store.as_ref())
        .expect("campaigns list")
        .len();
    assert_eq!(before, after);
}

#[actix_web::test]
async fn partial_update_keeps_untouched_fields() {
    let harness = Harness::new(Credentials::Demo);
    let app = actix_test::init_service(api_app(harness.state.clone())).await;
    let token = harness.token();

    let req = actix_test::TestRequest::get()
        .uri("/api/publisher/inventory/inv-1")
        .insert_header(bearer(&token))
        .to_request();
    let original: Envelope<Inventory> = actix_test::call_and_read_body_json(&app, req).await;

    let req = actix_test::TestRequest::put()
        .uri("/api/publisher/inventory/inv-1")
        .insert_header(bearer(&token))
        .set_json(json!({ "status": "inactive", "id": "inv-999" }))
        .to_request();
    let updated: Envelope<Inventory> = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(updated.data.id, original.data.id);
    assert_eq!(updated.data.domain_name, original.data.domain_name);
    assert_eq!(updated.data.created_at, original.data.created_at);
    assert_eq!(updated.data.status.as_str(), "inactive");
}

#[actix_web::test]
async fn unknown_status_label_in_body_is_an_internal_error() {
    let harness = Harness::new(Credentials::Demo);
    let app = actix_test::init_service(api_app(harness.state.clone())).await;
    let token = harness.token();
    let before = RecordStore::<Inventory>::get(harness.store.as_ref(), "inv-1")
        .expect("inventory reads");

    let req = actix_test::TestRequest::put()
        .uri("/api/publisher/inventory/inv-1")
        .insert_header(bearer(&token))
        .set_json(json!({ "status": "paused" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorEnvelope = actix_test::read_body_json(res).await;
    assert!(!body.success);
    assert_eq!(body.error, "Internal server error");
    assert_eq!(body.code, ErrorCode::InternalError);

    let after = RecordStore::<Inventory>::get(harness.store.as_ref(), "inv-1")
        .expect("inventory reads");
    assert_eq!(before, after);
}

#[actix_web::test]
async fn concurrent_creates_receive_distinct_ids() {
    let harness = Harness::new(Credentials::Demo);
    let app = actix_test::init_service(api_app(harness.state.clone())).await;
    let token = harness.token();

    let requests = (0..8).map(|n| {
        let req = actix_test::TestRequest::post()
            .uri("/api/advertiser/campaigns")
            .insert_header(bearer(&token))
            .set_json(json!({ "name": format!("Burst {n}"), "advertiserId": "adv-2" }))
            .to_request();
        actix_test::call_and_read_body_json::<_, _, Envelope<Campaign>>(&app, req)
    });
    let mut ids: Vec<String> = join_all(requests)
        .await
        .into_iter()
        .map(|body| body.data.id.as_str().to_owned())
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

#[actix_web::test]
async fn dashboard_counts_follow_the_store() {
    let harness = Harness::new(Credentials::Demo);
    let app = actix_test::init_service(api_app(harness.state.clone())).await;
    let token = harness.token();

    let read_total = |token: String| {
        let app = &app;
        async move {
            let req = actix_test::TestRequest::get()
                .uri("/api/publisher/dashboard")
                .insert_header(bearer(&token))
                .to_request();
            let body: Envelope<Value> = actix_test::call_and_read_body_json(app, req).await;
            body.data
                .pointer("/summary/totalInventory")
                .and_then(Value::as_u64)
                .expect("totalInventory present")
        }
    };

    let before = read_total(token.clone()).await;
    let req = actix_test::TestRequest::delete()
        .uri("/api/publisher/inventory/inv-2")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::OK);
    assert_eq!(read_total(token).await, before - 1);
}
