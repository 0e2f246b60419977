//! Advertiser account endpoints under `/api/advertisers`.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ApiResult;
use super::auth::Authenticated;
use super::envelope::{Envelope, ErrorEnvelope, MessageEnvelope};
use super::query::ListQuery;
use super::resource;
use super::state::HttpState;
use super::validation::RequiredFields;
use crate::domain::advertiser::{Advertiser, AdvertiserDraft, AdvertiserPatch};
use crate::domain::record::RecordId;

/// Body of `POST /api/advertisers`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdvertiserRequest {
    /// Required.
    pub company_name: Option<String>,
    /// Required; the owning user.
    #[schema(value_type = Option<String>)]
    pub user_id: Option<RecordId>,
    /// Defaults to `General`.
    pub industry: Option<String>,
}

impl CreateAdvertiserRequest {
    fn into_draft(self) -> ApiResult<AdvertiserDraft> {
        let mut required = RequiredFields::default();
        let company_name = required.text("companyName", self.company_name);
        let user_id = required.text("userId", self.user_id.map(String::from));
        required.finish()?;
        Ok(AdvertiserDraft {
            user_id: RecordId::new(user_id),
            company_name,
            industry: self.industry,
        })
    }
}

/// List advertisers; `type` filters by industry.
#[utoipa::path(
    get,
    path = "/api/advertisers",
    params(ListQuery),
    responses(
        (status = 200, description = "Advertisers in stored order", body = Envelope<Vec<Advertiser>>),
        (status = 400, description = "Malformed query", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["advertisers"],
    operation_id = "listAdvertisers",
    security(("bearer" = []))
)]
#[get("/advertisers")]
pub async fn list_advertisers(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    resource::list(state.advertisers.as_ref(), query.into_inner())
}

#[utoipa::path(
    post,
    path = "/api/advertisers",
    request_body = CreateAdvertiserRequest,
    responses(
        (status = 201, description = "Advertiser created", body = Envelope<Advertiser>),
        (status = 400, description = "Missing required fields", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["advertisers"],
    operation_id = "createAdvertiser",
    security(("bearer" = []))
)]
#[post("/advertisers")]
pub async fn create_advertiser(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    payload: web::Json<CreateAdvertiserRequest>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    resource::create(state.advertisers.as_ref(), draft)
}

#[utoipa::path(
    get,
    path = "/api/advertisers/{id}",
    params(("id" = String, Path, description = "Advertiser id")),
    responses(
        (status = 200, description = "Advertiser", body = Envelope<Advertiser>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Advertiser not found", body = ErrorEnvelope)
    ),
    tags = ["advertisers"],
    operation_id = "getAdvertiser",
    security(("bearer" = []))
)]
#[get("/advertisers/{id}")]
pub async fn get_advertiser(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resource::show(state.advertisers.as_ref(), &id)
}

#[utoipa::path(
    put,
    path = "/api/advertisers/{id}",
    params(("id" = String, Path, description = "Advertiser id")),
    request_body = AdvertiserPatch,
    responses(
        (status = 200, description = "Updated advertiser", body = Envelope<Advertiser>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Advertiser not found", body = ErrorEnvelope)
    ),
    tags = ["advertisers"],
    operation_id = "updateAdvertiser",
    security(("bearer" = []))
)]
#[put("/advertisers/{id}")]
pub async fn update_advertiser(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
    patch: web::Json<AdvertiserPatch>,
) -> ApiResult<HttpResponse> {
    resource::update(state.advertisers.as_ref(), &id, patch.into_inner())
}

/// Remove an advertiser. Their campaigns, creatives, and deals stay.
#[utoipa::path(
    delete,
    path = "/api/advertisers/{id}",
    params(("id" = String, Path, description = "Advertiser id")),
    responses(
        (status = 200, description = "Advertiser deleted", body = MessageEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Advertiser not found", body = ErrorEnvelope)
    ),
    tags = ["advertisers"],
    operation_id = "deleteAdvertiser",
    security(("bearer" = []))
)]
#[delete("/advertisers/{id}")]
pub async fn delete_advertiser(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resource::delete(state.advertisers.as_ref(), &id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{TestApp, bearer, test_app};
    use actix_web::test as actix_test;
    use rstest::rstest;

    #[rstest]
    #[case("type=Food%20%26%20Beverage", &["adv-4", "adv-5"])]
    #[case("search=corp", &["adv-1", "adv-2", "adv-5"])]
    #[case("search=corp&type=Finance", &["adv-2"])]
    #[case("search=", &["adv-1", "adv-2", "adv-3", "adv-4", "adv-5", "adv-6"])]
    #[actix_web::test]
    async fn filters_combine_with_and(#[case] query: &str, #[case] expected: &[&str]) {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let req = actix_test::TestRequest::get()
            .uri(&format!("/api/advertisers?{query}"))
            .insert_header(bearer(&harness.token()))
            .to_request();
        let body: Envelope<Vec<Advertiser>> = actix_test::call_and_read_body_json(&app, req).await;
        let ids: Vec<_> = body.data.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[actix_web::test]
    async fn industry_defaults_to_general() {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/advertisers")
            .insert_header(bearer(&harness.token()))
            .set_json(serde_json::json!({ "companyName": "Initech", "userId": "user-2" }))
            .to_request();
        let body: Envelope<Advertiser> = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.data.industry, "General");
    }
}
