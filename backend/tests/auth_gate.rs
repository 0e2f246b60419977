//! Bearer-token lifecycle against the hashed and demo credential checks.

mod support;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::TimeDelta;
use rstest::rstest;
use serde_json::json;

use adtech::domain::User;
use adtech::domain::auth::TOKEN_TTL_DAYS;
use adtech::domain::ports::RecordStore;
use adtech::domain::user::UserRole;
use adtech::inbound::http::envelope::{ErrorEnvelope, SessionEnvelope, UserEnvelope};
use support::{Credentials, Harness, api_app, bearer};

#[actix_web::test]
async fn registered_account_logs_in_with_its_own_password_only() {
    let harness = Harness::new(Credentials::Hashed);
    let app = actix_test::init_service(api_app(harness.state.clone())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "email": "ops@example.com",
            "password": "hunter22",
            "name": "Ops Team"
        }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let registered: SessionEnvelope = actix_test::read_body_json(res).await;
    assert_eq!(registered.user.role, UserRole::Publisher);

    let wrong = actix_test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "ops@example.com", "password": "hunter23" }))
        .to_request();
    let res = actix_test::call_service(&app, wrong).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorEnvelope = actix_test::read_body_json(res).await;
    assert_eq!(body.error, "Invalid credentials");

    let right = actix_test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "ops@example.com", "password": "hunter22" }))
        .to_request();
    let session: SessionEnvelope = actix_test::call_and_read_body_json(&app, right).await;
    assert_eq!(session.user.id, registered.user.id);
}

#[rstest]
#[case::demo(Credentials::Demo, StatusCode::OK)]
#[case::hashed(Credentials::Hashed, StatusCode::UNAUTHORIZED)]
#[actix_web::test]
async fn seeded_accounts_depend_on_the_credential_check(
    #[case] credentials: Credentials,
    #[case] expected: StatusCode,
) {
    let harness = Harness::new(credentials);
    let app = actix_test::init_service(api_app(harness.state.clone())).await;
    let req = actix_test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "jane.smith@advertiser.com", "password": "anything" }))
        .to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), expected);
}

#[rstest]
#[case::just_before_expiry(TimeDelta::days(TOKEN_TTL_DAYS) - TimeDelta::seconds(1), StatusCode::OK)]
#[case::at_expiry(TimeDelta::days(TOKEN_TTL_DAYS), StatusCode::UNAUTHORIZED)]
#[actix_web::test]
async fn tokens_expire_after_seven_days(#[case] elapsed: TimeDelta, #[case] expected: StatusCode) {
    let harness = Harness::new(Credentials::Demo);
    let app = actix_test::init_service(api_app(harness.state.clone())).await;
    let token = harness.token();

    harness.clock.advance(elapsed);
    let req = actix_test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), expected);
}

#[actix_web::test]
async fn role_choice_is_visible_to_later_requests() {
    let harness = Harness::new(Credentials::Demo);
    let app = actix_test::init_service(api_app(harness.state.clone())).await;
    let token = harness.token();

    let req = actix_test::TestRequest::put()
        .uri("/api/auth/role")
        .insert_header(bearer(&token))
        .set_json(json!({ "role": "advertiser" }))
        .to_request();
    assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = actix_test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(bearer(&token))
        .to_request();
    let me: UserEnvelope = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(me.user.role, UserRole::Advertiser);
}

#[actix_web::test]
async fn tokens_for_deleted_accounts_are_rejected() {
    let harness = Harness::new(Credentials::Hashed);
    let app = actix_test::init_service(api_app(harness.state.clone())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "email": "temp@example.com", "password": "longpass", "name": "Temp" }))
        .to_request();
    let session: SessionEnvelope = actix_test::call_and_read_body_json(&app, req).await;

    RecordStore::<User>::delete(harness.store.as_ref(), session.user.id.as_str())
        .expect("delete succeeds");

    let req = actix_test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(bearer(&session.token))
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorEnvelope = actix_test::read_body_json(res).await;
    assert_eq!(body.error, "Unauthorized");
}
