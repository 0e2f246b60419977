//! Publisher deal endpoints under `/api/publisher/deals`.

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ApiResult;
use super::auth::Authenticated;
use super::envelope::{Envelope, ErrorEnvelope, MessageEnvelope};
use super::query::ListQuery;
use super::resource;
use super::state::HttpState;
use super::validation::RequiredFields;
use crate::domain::deal::{Deal, DealDraft, DealPatch, DealStatus, DealType, PriceOption};
use crate::domain::record::RecordId;

/// Body of `POST /api/publisher/deals`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealRequest {
    /// Required.
    pub deal_name: Option<String>,
    /// Required.
    #[schema(value_type = Option<String>)]
    pub advertiser_id: Option<RecordId>,
    /// Required.
    pub advertiser_name: Option<String>,
    pub publisher_id: Option<String>,
    #[schema(value_type = Option<String>)]
    pub inventory_id: Option<RecordId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub deal_type: Option<DealType>,
    pub price_option: Option<PriceOption>,
    pub price_value: Option<f64>,
    pub status: Option<DealStatus>,
}

impl CreateDealRequest {
    fn into_draft(self) -> ApiResult<DealDraft> {
        let mut required = RequiredFields::default();
        let deal_name = required.text("dealName", self.deal_name);
        let advertiser_id = required.text("advertiserId", self.advertiser_id.map(String::from));
        let advertiser_name = required.text("advertiserName", self.advertiser_name);
        required.finish()?;
        Ok(DealDraft {
            deal_name,
            advertiser_id: RecordId::new(advertiser_id),
            advertiser_name,
            publisher_id: self.publisher_id,
            inventory_id: self.inventory_id,
            start_date: self.start_date,
            end_date: self.end_date,
            deal_type: self.deal_type,
            price_option: self.price_option,
            price_value: self.price_value,
            status: self.status,
        })
    }
}

/// List deals; `dealType` filters by transaction type.
#[utoipa::path(
    get,
    path = "/api/publisher/deals",
    params(ListQuery),
    responses(
        (status = 200, description = "Deals in stored order", body = Envelope<Vec<Deal>>),
        (status = 400, description = "Malformed query", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["deals"],
    operation_id = "listDeals",
    security(("bearer" = []))
)]
#[get("/publisher/deals")]
pub async fn list_deals(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    resource::list(state.deals.as_ref(), query.into_inner())
}

#[utoipa::path(
    post,
    path = "/api/publisher/deals",
    request_body = CreateDealRequest,
    responses(
        (status = 201, description = "Deal created", body = Envelope<Deal>),
        (status = 400, description = "Missing required fields", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["deals"],
    operation_id = "createDeal",
    security(("bearer" = []))
)]
#[post("/publisher/deals")]
pub async fn create_deal(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    payload: web::Json<CreateDealRequest>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    resource::create(state.deals.as_ref(), draft)
}

#[utoipa::path(
    get,
    path = "/api/publisher/deals/{id}",
    params(("id" = String, Path, description = "Deal id")),
    responses(
        (status = 200, description = "Deal", body = Envelope<Deal>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Deal not found", body = ErrorEnvelope)
    ),
    tags = ["deals"],
    operation_id = "getDeal",
    security(("bearer" = []))
)]
#[get("/publisher/deals/{id}")]
pub async fn get_deal(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resource::show(state.deals.as_ref(), &id)
}

#[utoipa::path(
    put,
    path = "/api/publisher/deals/{id}",
    params(("id" = String, Path, description = "Deal id")),
    request_body = DealPatch,
    responses(
        (status = 200, description = "Updated deal", body = Envelope<Deal>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Deal not found", body = ErrorEnvelope)
    ),
    tags = ["deals"],
    operation_id = "updateDeal",
    security(("bearer" = []))
)]
#[put("/publisher/deals/{id}")]
pub async fn update_deal(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
    patch: web::Json<DealPatch>,
) -> ApiResult<HttpResponse> {
    resource::update(state.deals.as_ref(), &id, patch.into_inner())
}

#[utoipa::path(
    delete,
    path = "/api/publisher/deals/{id}",
    params(("id" = String, Path, description = "Deal id")),
    responses(
        (status = 200, description = "Deal deleted", body = MessageEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Deal not found", body = ErrorEnvelope)
    ),
    tags = ["deals"],
    operation_id = "deleteDeal",
    security(("bearer" = []))
)]
#[delete("/publisher/deals/{id}")]
pub async fn delete_deal(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resource::delete(state.deals.as_ref(), &id)
}
