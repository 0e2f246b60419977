//! Advertiser creative endpoints under `/api/advertiser/creatives`.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ApiResult;
use super::auth::Authenticated;
use super::envelope::{Envelope, ErrorEnvelope, MessageEnvelope};
use super::query::ListQuery;
use super::resource;
use super::state::HttpState;
use super::validation::{RequiredFields, missing_fields};
use crate::domain::creative::{Creative, CreativeDraft, CreativePatch, CreativeStatus, CreativeType};
use crate::domain::inventory::Dimensions;
use crate::domain::record::RecordId;

/// Body of `POST /api/advertiser/creatives`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreativeRequest {
    /// Required.
    pub name: Option<String>,
    /// Required.
    #[schema(value_type = Option<String>)]
    pub advertiser_id: Option<RecordId>,
    /// Required asset format.
    #[serde(rename = "type")]
    pub creative_type: Option<CreativeType>,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    pub dimensions: Option<Dimensions>,
    pub landing_page_url: Option<String>,
    pub status: Option<CreativeStatus>,
}

impl CreateCreativeRequest {
    fn into_draft(self) -> ApiResult<CreativeDraft> {
        let mut required = RequiredFields::default();
        let name = required.text("name", self.name);
        let advertiser_id = required.text("advertiserId", self.advertiser_id.map(String::from));
        let creative_type = required.value("type", self.creative_type);
        required.finish()?;
        let creative_type = creative_type.ok_or_else(|| missing_fields(&["type"]))?;
        Ok(CreativeDraft {
            advertiser_id: RecordId::new(advertiser_id),
            name,
            creative_type,
            file_name: self.file_name,
            file_size: self.file_size,
            dimensions: self.dimensions,
            landing_page_url: self.landing_page_url,
            status: self.status,
        })
    }
}

/// List creatives; `type` filters by format.
#[utoipa::path(
    get,
    path = "/api/advertiser/creatives",
    params(ListQuery),
    responses(
        (status = 200, description = "Creatives in stored order", body = Envelope<Vec<Creative>>),
        (status = 400, description = "Malformed query", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["creatives"],
    operation_id = "listCreatives",
    security(("bearer" = []))
)]
#[get("/advertiser/creatives")]
pub async fn list_creatives(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    resource::list(state.creatives.as_ref(), query.into_inner())
}

/// Upload metadata for a new creative.
#[utoipa::path(
    post,
    path = "/api/advertiser/creatives",
    request_body = CreateCreativeRequest,
    responses(
        (status = 201, description = "Creative created", body = Envelope<Creative>),
        (status = 400, description = "Missing required fields", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["creatives"],
    operation_id = "createCreative",
    security(("bearer" = []))
)]
#[post("/advertiser/creatives")]
pub async fn create_creative(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    payload: web::Json<CreateCreativeRequest>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    resource::create(state.creatives.as_ref(), draft)
}

#[utoipa::path(
    get,
    path = "/api/advertiser/creatives/{id}",
    params(("id" = String, Path, description = "Creative id")),
    responses(
        (status = 200, description = "Creative", body = Envelope<Creative>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Creative not found", body = ErrorEnvelope)
    ),
    tags = ["creatives"],
    operation_id = "getCreative",
    security(("bearer" = []))
)]
#[get("/advertiser/creatives/{id}")]
pub async fn get_creative(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resource::show(state.creatives.as_ref(), &id)
}

#[utoipa::path(
    put,
    path = "/api/advertiser/creatives/{id}",
    params(("id" = String, Path, description = "Creative id")),
    request_body = CreativePatch,
    responses(
        (status = 200, description = "Updated creative", body = Envelope<Creative>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Creative not found", body = ErrorEnvelope)
    ),
    tags = ["creatives"],
    operation_id = "updateCreative",
    security(("bearer" = []))
)]
#[put("/advertiser/creatives/{id}")]
pub async fn update_creative(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
    patch: web::Json<CreativePatch>,
) -> ApiResult<HttpResponse> {
    resource::update(state.creatives.as_ref(), &id, patch.into_inner())
}

/// Remove a creative. Campaigns listing it keep the dangling id.
#[utoipa::path(
    delete,
    path = "/api/advertiser/creatives/{id}",
    params(("id" = String, Path, description = "Creative id")),
    responses(
        (status = 200, description = "Creative deleted", body = MessageEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Creative not found", body = ErrorEnvelope)
    ),
    tags = ["creatives"],
    operation_id = "deleteCreative",
    security(("bearer" = []))
)]
#[delete("/advertiser/creatives/{id}")]
pub async fn delete_creative(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resource::delete(state.creatives.as_ref(), &id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::RecordStore;
    use crate::domain::campaign::Campaign;
    use crate::inbound::http::test_utils::{TestApp, bearer, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::json;

    #[actix_web::test]
    async fn creation_requires_a_type() {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/advertiser/creatives")
            .insert_header(bearer(&harness.token()))
            .set_json(json!({ "name": "Banner", "advertiserId": "adv-1" }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: ErrorEnvelope = actix_test::read_body_json(res).await;
        assert_eq!(body.error, "Missing required fields: type");
    }

    #[actix_web::test]
    async fn created_creative_takes_defaults() {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/advertiser/creatives")
            .insert_header(bearer(&harness.token()))
            .set_json(json!({ "name": "Banner", "advertiserId": "adv-1", "type": "Display" }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Envelope<Creative> = actix_test::read_body_json(res).await;
        assert_eq!(body.data.file_name, "creative.png");
        assert_eq!(body.data.file_size, 0);
        assert_eq!(body.data.dimensions, Some(Dimensions::MEDIUM_RECTANGLE));
        assert_eq!(body.data.status, CreativeStatus::Draft);
    }

    #[actix_web::test]
    async fn deleting_a_creative_leaves_campaign_references() {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let req = actix_test::TestRequest::delete()
            .uri("/api/advertiser/creatives/creative-1")
            .insert_header(bearer(&harness.token()))
            .to_request();
        let body: MessageEnvelope = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.message, "Creative deleted");

        let campaigns: &dyn RecordStore<Campaign> = harness.store.as_ref();
        let campaign = campaigns
            .get("camp-1")
            .expect("store readable")
            .expect("campaign kept");
        assert!(campaign.creative_ids.iter().any(|id| id.as_str() == "creative-1"));
    }
}
