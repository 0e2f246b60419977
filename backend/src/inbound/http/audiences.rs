//! Audience segment endpoints.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::ApiResult;
use super::auth::Authenticated;
use super::envelope::{Envelope, ErrorEnvelope, created, ok};
use super::state::HttpState;
use super::validation::RequiredFields;

/// Body of `POST /api/advertiser/audiences`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateAudienceRequest {
    /// Segment name; required.
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/advertiser/audiences",
    responses(
        (status = 200, description = "Segment names", body = Envelope<Vec<String>>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["audiences"],
    operation_id = "listAudiences",
    security(("bearer" = []))
)]
#[get("/advertiser/audiences")]
pub async fn list_audiences(
    _auth: Authenticated,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    Ok(ok(state.audiences.segments()?))
}

/// Add a segment. Adding an existing name changes nothing.
#[utoipa::path(
    post,
    path = "/api/advertiser/audiences",
    request_body = CreateAudienceRequest,
    responses(
        (status = 201, description = "Segment name", body = Envelope<String>),
        (status = 400, description = "Missing name", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["audiences"],
    operation_id = "createAudience",
    security(("bearer" = []))
)]
#[post("/advertiser/audiences")]
pub async fn create_audience(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    payload: web::Json<CreateAudienceRequest>,
) -> ApiResult<HttpResponse> {
    let mut required = RequiredFields::default();
    let name = required.text("name", payload.into_inner().name);
    required.finish()?;
    let name = state.audiences.add_segment(&name)?;
    info!(segment = %name, "audience segment added");
    Ok(created(name))
}
