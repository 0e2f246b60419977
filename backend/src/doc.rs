//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every annotated handler under `/api` plus the health
//! probes, registers the entity schemas, and declares the bearer token
//! security scheme used by the protected endpoints.
//!
//! The document is served by Swagger UI in debug builds and exported by
//! `cargo run --bin openapi-dump`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::advertiser::Advertiser;
use crate::domain::analytics::AnalyticsReport;
use crate::domain::billing::{BillingProfile, BillingStatement, Invoice};
use crate::domain::campaign::Campaign;
use crate::domain::creative::Creative;
use crate::domain::dashboard::PublisherDashboard;
use crate::domain::deal::Deal;
use crate::domain::inventory::Inventory;
use crate::domain::user::User;
use crate::domain::ErrorCode;
use crate::inbound::http::envelope::{
    ErrorEnvelope, MessageEnvelope, SessionEnvelope, UserEnvelope,
};
use crate::inbound::http::{
    accounts, advertisers, analytics, audiences, billing, campaigns, creatives, dashboard,
    deals, health, inventory,
};

/// Name of the bearer token security scheme.
pub const BEARER_SCHEME: &str = "bearer";

/// Registers the HS256 bearer token scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Ad-tech platform API",
        description = "Publisher inventory and deals, advertiser campaigns and creatives, \
                       analytics, and billing over an in-memory store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        accounts::register,
        accounts::login,
        accounts::me,
        accounts::select_role,
        advertisers::list_advertisers,
        advertisers::create_advertiser,
        advertisers::get_advertiser,
        advertisers::update_advertiser,
        advertisers::delete_advertiser,
        inventory::list_inventory,
        inventory::create_inventory,
        inventory::get_inventory,
        inventory::update_inventory,
        inventory::delete_inventory,
        deals::list_deals,
        deals::create_deal,
        deals::get_deal,
        deals::update_deal,
        deals::delete_deal,
        dashboard::publisher_dashboard,
        campaigns::list_campaigns,
        campaigns::create_campaign,
        campaigns::get_campaign,
        campaigns::update_campaign,
        campaigns::delete_campaign,
        creatives::list_creatives,
        creatives::create_creative,
        creatives::get_creative,
        creatives::update_creative,
        creatives::delete_creative,
        analytics::advertiser_analytics,
        billing::billing_statement,
        billing::create_invoice,
        billing::update_balance,
        audiences::list_audiences,
        audiences::create_audience,
        health::ready,
        health::live,
    ),
    components(schemas(
        Advertiser,
        AnalyticsReport,
        BillingProfile,
        BillingStatement,
        Campaign,
        Creative,
        Deal,
        ErrorCode,
        ErrorEnvelope,
        Inventory,
        Invoice,
        MessageEnvelope,
        PublisherDashboard,
        SessionEnvelope,
        User,
        UserEnvelope,
    )),
    tags(
        (name = "auth", description = "Registration, login, and the current account"),
        (name = "advertisers", description = "Advertiser accounts"),
        (name = "inventory", description = "Publisher ad slots"),
        (name = "deals", description = "Publisher deals"),
        (name = "dashboard", description = "Publisher dashboard"),
        (name = "campaigns", description = "Advertiser campaigns"),
        (name = "creatives", description = "Advertiser creatives"),
        (name = "analytics", description = "Advertiser delivery reports"),
        (name = "billing", description = "Invoices and the billing profile"),
        (name = "audiences", description = "Audience segments"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Structural checks on the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("ErrorEnvelope", &["success", "error", "code", "traceId"])]
    #[case("Campaign", &["id", "advertiserId", "flightDates", "budget", "creativeIds"])]
    #[case("Deal", &["dealName", "dealType", "priceOption", "priceValue"])]
    #[case("SessionEnvelope", &["success", "user", "token"])]
    fn schemas_use_wire_field_names(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    #[case("/api/auth/login")]
    #[case("/api/advertiser/campaigns/{id}")]
    #[case("/api/publisher/inventory")]
    #[case("/api/advertiser/billing")]
    #[case("/health/ready")]
    fn paths_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key(BEARER_SCHEME));
    }
}
