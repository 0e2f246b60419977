//! Advertiser billing endpoints: statement, invoices, and balance.

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use super::ApiResult;
use super::auth::Authenticated;
use super::envelope::{Envelope, ErrorEnvelope, ok};
use super::resource;
use super::state::HttpState;
use super::validation::non_blank;
use crate::domain::Error;
use crate::domain::billing::{
    BillingProfile, BillingStatement, Invoice, InvoiceDraft, InvoiceStatus,
};
use crate::domain::record::RecordId;

/// Query of `GET /api/advertiser/billing`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BillingQuery {
    /// Advertiser the statement is for; defaults to `adv-1`.
    pub advertiser_id: Option<String>,
}

/// Body of `POST /api/advertiser/billing`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    /// Billed amount; required and non-zero.
    pub amount: Option<f64>,
    /// Campaign name; required.
    pub campaign: Option<String>,
    /// Defaults to `pending`.
    pub status: Option<InvoiceStatus>,
}

impl CreateInvoiceRequest {
    fn into_draft(self) -> ApiResult<InvoiceDraft> {
        let amount = self.amount.filter(|amount| *amount != 0.0);
        match (amount, non_blank(self.campaign)) {
            (Some(amount), Some(campaign)) => Ok(InvoiceDraft {
                amount,
                campaign,
                status: self.status,
            }),
            _ => Err(Error::invalid_request("Missing required fields (amount, campaign)")),
        }
    }
}

/// Body of `PUT /api/advertiser/billing`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBalanceRequest {
    /// New outstanding balance.
    pub balance: f64,
}

/// Billing account, invoices newest first, and totals.
#[utoipa::path(
    get,
    path = "/api/advertiser/billing",
    params(BillingQuery),
    responses(
        (status = 200, description = "Billing statement", body = Envelope<BillingStatement>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["billing"],
    operation_id = "billingStatement",
    security(("bearer" = []))
)]
#[get("/advertiser/billing")]
pub async fn billing_statement(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    query: web::Query<BillingQuery>,
) -> ApiResult<HttpResponse> {
    let profile = state.billing.profile()?;
    let account = match non_blank(query.into_inner().advertiser_id) {
        Some(advertiser_id) => profile.account_for(RecordId::new(advertiser_id)),
        None => profile.default_account(),
    };
    let statement = BillingStatement::build(account, state.invoices.list()?);
    Ok(ok(statement))
}

/// Record a new invoice dated today.
#[utoipa::path(
    post,
    path = "/api/advertiser/billing",
    request_body = CreateInvoiceRequest,
    responses(
        (status = 201, description = "Invoice created", body = Envelope<Invoice>),
        (status = 400, description = "Missing amount or campaign", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["billing"],
    operation_id = "createInvoice",
    security(("bearer" = []))
)]
#[post("/advertiser/billing")]
pub async fn create_invoice(
    _auth: Authenticated,
    state: web::Data<HttpState>,
    payload: web::Json<CreateInvoiceRequest>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    resource::create(state.invoices.as_ref(), draft)
}

/// Overwrite the shared outstanding balance.
#[utoipa::path(
    put,
    path = "/api/advertiser/billing",
    request_body = UpdateBalanceRequest,
    responses(
        (status = 200, description = "Updated billing profile", body = Envelope<BillingProfile>),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["billing"],
    operation_id = "updateBalance",
    security(("bearer" = []))
)]
#[put("/advertiser/billing")]
pub async fn update_balance(
    auth: Authenticated,
    state: web::Data<HttpState>,
    payload: web::Json<UpdateBalanceRequest>,
) -> ApiResult<HttpResponse> {
    let balance = payload.into_inner().balance;
    let profile = state.billing.set_balance(balance)?;
    info!(user = %auth.user().id, balance, "billing balance updated");
    Ok(ok(profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{TestApp, bearer, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn statement_lists_newest_invoices_first() {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let req = actix_test::TestRequest::get()
            .uri("/api/advertiser/billing?advertiserId=adv-3")
            .insert_header(bearer(&harness.token()))
            .to_request();
        let body: Envelope<BillingStatement> = actix_test::call_and_read_body_json(&app, req).await;
        let statement = body.data;
        assert_eq!(statement.billing_info.advertiser_id.as_str(), "adv-3");
        assert_eq!(
            statement.invoices.first().map(|i| i.id.as_str()),
            Some("invoice-4")
        );
        assert_eq!(statement.summary.total_paid, 36_250.0);
        assert_eq!(statement.summary.total_pending, 9_800.0);
        assert_eq!(statement.summary.total_invoices, 4);
    }

    #[rstest]
    #[case(json!({ "campaign": "Summer Tech Promo" }))]
    #[case(json!({ "amount": 0, "campaign": "Summer Tech Promo" }))]
    #[case(json!({ "amount": 120.5 }))]
    #[case(json!({ "amount": 120.5, "campaign": "" }))]
    #[actix_web::test]
    async fn invoices_need_amount_and_campaign(#[case] body: Value) {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/advertiser/billing")
            .insert_header(bearer(&harness.token()))
            .set_json(body)
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: ErrorEnvelope = actix_test::read_body_json(res).await;
        assert_eq!(body.error, "Missing required fields (amount, campaign)");
    }

    #[actix_web::test]
    async fn new_invoice_is_pending() {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/advertiser/billing")
            .insert_header(bearer(&harness.token()))
            .set_json(json!({ "amount": -25.0, "campaign": "Refund" }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Envelope<Invoice> = actix_test::read_body_json(res).await;
        assert_eq!(body.data.status, InvoiceStatus::Pending);
        assert!(body.data.id.as_str().starts_with("invoice-"));
    }

    #[actix_web::test]
    async fn balance_update_is_visible_in_the_statement() {
        let harness = TestApp::seeded();
        let app = actix_test::init_service(test_app(harness.state.clone())).await;
        let token = harness.token();
        let req = actix_test::TestRequest::put()
            .uri("/api/advertiser/billing")
            .insert_header(bearer(&token))
            .set_json(json!({ "balance": 42.0 }))
            .to_request();
        let body: Envelope<BillingProfile> = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.data.current_balance, 42.0);

        let req = actix_test::TestRequest::get()
            .uri("/api/advertiser/billing")
            .insert_header(bearer(&token))
            .to_request();
        let body: Envelope<BillingStatement> = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.data.billing_info.balance, 42.0);
        assert_eq!(body.data.billing_info.advertiser_id.as_str(), "adv-1");
    }
}
