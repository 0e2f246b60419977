//! Publisher inventory endpoints under `/api/publisher/inventory`.

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
use crate::domain::inventory::{
    Dimensions, Inventory, InventoryDraft, InventoryPatch, InventoryStatus, TagType,
};

/// Body of `POST /api/publisher/inventory`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryRequest {
    /// Required.
    pub domain_name: Option<String>,
    /// Required.
    pub ad_slot_name_id: Option<String>,
    pub publisher_id: Option<String>,
    pub website_id: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub tag_type: Option<TagType>,
    pub ad_unit_path: Option<String>,
    pub page_category: Option<String>,
    pub status: Option<InventoryStatus>,
}

impl CreateInventoryRequest {
    fn into_draft(self) -> ApiResult<InventoryDraft> {
        let mut required = RequiredFields::default();
        let domain_name = required.text("domainName", self.domain_name);
        let ad_slot_name_id = required.text("adSlotNameId", self.ad_slot_name_id);
        required.finish()?;
        Ok(InventoryDraft {
            domain_name,
            ad_slot_name_id,
            publisher_id: self.publisher_id,
            website_id: self.website_id,
            dimensions: self.dimensions,
            tag_type: self.tag_type,
            ad_unit_path: self.ad_unit_path,
            page_category: self.page_category,
            status: self.status,
        })
    }
}

/// List ad slots; `tagType` filters by integration.
#[utoipa::path(
    get,
    path = "/api/publisher/inventory",
    params(ListQuery),
    responses(
        (status = 200, description = "Ad slots in stored order", body = Envelope<Vec<Inventory>>),
        (status = 400, description = "Malformed query", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["inventory"],
    operation_id = "listInventory",
    security(("bearer" = []))
)]
#[get("/publisher/inventory")]
pub async fn list_inventory(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    resource::list(state.inventory.as_ref(), query.into_inner())
}

#[utoipa::path(
    post,
    path = "/api/publisher/inventory",
    request_body = CreateInventoryRequest,
    responses(
        (status = 201, description = "Ad slot created", body = Envelope<Inventory>),
        (status = 400, description = "Missing required fields", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["inventory"],
    operation_id = "createInventory",
    security(("bearer" = []))
)]
#[post("/publisher/inventory")]
pub async fn create_inventory(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    payload: web::Json<CreateInventoryRequest>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    resource::create(state.inventory.as_ref(), draft)
}

#[utoipa::path(
    get,
    path = "/api/publisher/inventory/{id}",
    params(("id" = String, Path, description = "Inventory id")),
    responses(
        (status = 200, description = "Ad slot", body = Envelope<Inventory>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Inventory not found", body = ErrorEnvelope)
    ),
    tags = ["inventory"],
    operation_id = "getInventory",
    security(("bearer" = []))
)]
#[get("/publisher/inventory/{id}")]
pub async fn get_inventory(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resource::show(state.inventory.as_ref(), &id)
}

#[utoipa::path(
    put,
    path = "/api/publisher/inventory/{id}",
    params(("id" = String, Path, description = "Inventory id")),
    request_body = InventoryPatch,
    responses(
        (status = 200, description = "Updated ad slot", body = Envelope<Inventory>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Inventory not found", body = ErrorEnvelope)
    ),
    tags = ["inventory"],
    operation_id = "updateInventory",
    security(("bearer" = []))
)]
#[put("/publisher/inventory/{id}")]
pub async fn update_inventory(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
    patch: web::Json<InventoryPatch>,
) -> ApiResult<HttpResponse> {
    resource::update(state.inventory.as_ref(), &id, patch.into_inner())
}

/// Remove an ad slot. Deals pointing at it are kept.
#[utoipa::path(
    delete,
    path = "/api/publisher/inventory/{id}",
    params(("id" = String, Path, description = "Inventory id")),
    responses(
        (status = 200, description = "Ad slot deleted", body = MessageEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Inventory not found", body = ErrorEnvelope)
    ),
    tags = ["inventory"],
    operation_id = "deleteInventory",
    security(("bearer" = []))
)]
#[delete("/publisher/inventory/{id}")]
pub async fn delete_inventory(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resource::delete(state.inventory.as_ref(), &id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{TestApp, bearer, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::json;

    #[actix_web::test]
    async fn created_slot_takes_defaults() {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/publisher/inventory")
            .insert_header(bearer(&harness.token()))
            .set_json(json!({ "domainName": "news.example", "adSlotNameId": "top-banner" }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Envelope<Inventory> = actix_test::read_body_json(res).await;
        assert_eq!(body.data.publisher_id, "pub-1");
        assert_eq!(body.data.website_id, "web-1");
        assert_eq!(body.data.tag_type, TagType::Gpt);
        assert_eq!(body.data.ad_unit_path, "/default/ad-unit");
        assert_eq!(body.data.page_category, "General");
        assert_eq!(body.data.status, InventoryStatus::Active);
    }

    #[rstest]
    #[case("/api/publisher/inventory?startDate=yesterday")]
    #[case("/api/publisher/inventory?endDate=2025-13-01")]
    #[actix_web::test]
    async fn malformed_dates_are_bad_requests(#[case] uri: &str) {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let req = actix_test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer(&harness.token()))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unknown_tag_type_yields_an_empty_list() {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let req = actix_test::TestRequest::get()
            .uri("/api/publisher/inventory?tagType=AMP")
            .insert_header(bearer(&harness.token()))
            .to_request();
        let body: Envelope<Vec<Inventory>> = actix_test::call_and_read_body_json(&app, req).await;
        assert!(body.data.is_empty());
    }
}
