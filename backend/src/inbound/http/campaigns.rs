//! Advertiser campaign endpoints.
//!
//! ```text
//! GET    /api/advertiser/campaigns?status=active&search=promo
//! POST   /api/advertiser/campaigns {"name":"Launch","advertiserId":"adv-1"}
//! GET    /api/advertiser/campaigns/{id}
//! PUT    /api/advertiser/campaigns/{id} {"status":"paused"}
//! DELETE /api/advertiser/campaigns/{id}
//! ```

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
use crate::domain::campaign::{
    Budget, Campaign, CampaignDraft, CampaignPatch, CampaignStatus, FlightDates,
    InventorySelection, Targeting,
};
use crate::domain::record::RecordId;

/// Body of `POST /api/advertiser/campaigns`. Omitted sections take defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    /// Campaign name; required.
    pub name: Option<String>,
    /// Owning advertiser; required.
    #[schema(value_type = Option<String>)]
    pub advertiser_id: Option<RecordId>,
    pub status: Option<CampaignStatus>,
    pub flight_dates: Option<FlightDates>,
    pub budget: Option<Budget>,
    pub inventory: Option<InventorySelection>,
    pub targeting: Option<Targeting>,
    #[schema(value_type = Option<Vec<String>>)]
    pub creative_ids: Option<Vec<RecordId>>,
}

impl CreateCampaignRequest {
    fn into_draft(self) -> ApiResult<CampaignDraft> {
        let mut required = RequiredFields::default();
        let name = required.text("name", self.name);
        let advertiser_id = required.text("advertiserId", self.advertiser_id.map(String::from));
        required.finish()?;
        Ok(CampaignDraft {
            status: self.status,
            flight_dates: self.flight_dates,
            budget: self.budget,
            inventory: self.inventory,
            targeting: self.targeting,
            creative_ids: self.creative_ids,
            ..CampaignDraft::new(advertiser_id, name)
        })
    }
}

/// List campaigns, optionally filtered.
#[utoipa::path(
    get,
    path = "/api/advertiser/campaigns",
    params(ListQuery),
    responses(
        (status = 200, description = "Campaigns in stored order", body = Envelope<Vec<Campaign>>),
        (status = 400, description = "Malformed query", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["campaigns"],
    operation_id = "listCampaigns",
    security(("bearer" = []))
)]
#[get("/advertiser/campaigns")]
pub async fn list_campaigns(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<HttpResponse> {
    resource::list(state.campaigns.as_ref(), query.into_inner())
}

/// Create a campaign.
#[utoipa::path(
    post,
    path = "/api/advertiser/campaigns",
    request_body = CreateCampaignRequest,
    responses(
        (status = 201, description = "Campaign created", body = Envelope<Campaign>),
        (status = 400, description = "Missing required fields", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["campaigns"],
    operation_id = "createCampaign",
    security(("bearer" = []))
)]
#[post("/advertiser/campaigns")]
pub async fn create_campaign(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    payload: web::Json<CreateCampaignRequest>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    resource::create(state.campaigns.as_ref(), draft)
}

/// Fetch one campaign.
#[utoipa::path(
    get,
    path = "/api/advertiser/campaigns/{id}",
    params(("id" = String, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Campaign", body = Envelope<Campaign>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Campaign not found", body = ErrorEnvelope)
    ),
    tags = ["campaigns"],
    operation_id = "getCampaign",
    security(("bearer" = []))
)]
#[get("/advertiser/campaigns/{id}")]
pub async fn get_campaign(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resource::show(state.campaigns.as_ref(), &id)
}

/// Merge changes into a campaign. Nested sections are replaced whole.
#[utoipa::path(
    put,
    path = "/api/advertiser/campaigns/{id}",
    params(("id" = String, Path, description = "Campaign id")),
    request_body = CampaignPatch,
    responses(
        (status = 200, description = "Updated campaign", body = Envelope<Campaign>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Campaign not found", body = ErrorEnvelope)
    ),
    tags = ["campaigns"],
    operation_id = "updateCampaign",
    security(("bearer" = []))
)]
#[put("/advertiser/campaigns/{id}")]
pub async fn update_campaign(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
    patch: web::Json<CampaignPatch>,
) -> ApiResult<HttpResponse> {
    resource::update(state.campaigns.as_ref(), &id, patch.into_inner())
}

/// Remove a campaign. Billing rows naming it are kept.
#[utoipa::path(
    delete,
    path = "/api/advertiser/campaigns/{id}",
    params(("id" = String, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Campaign deleted", body = MessageEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "Campaign not found", body = ErrorEnvelope)
    ),
    tags = ["campaigns"],
    operation_id = "deleteCampaign",
    security(("bearer" = []))
)]
#[delete("/advertiser/campaigns/{id}")]
pub async fn delete_campaign(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resource::delete(state.campaigns.as_ref(), &id)
}
