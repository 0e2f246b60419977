//! HTTP inbound adapter exposing the REST API.
//!
//! Every handler under [`api_routes`] is mounted beneath `/api`; the health
//! probes are mounted at the root by the server.

pub mod accounts;
pub mod advertisers;
pub mod analytics;
pub mod audiences;
pub mod auth;
pub mod auth_config;
pub mod billing;
pub mod campaigns;
pub mod creatives;
pub mod dashboard;
pub mod deals;
pub mod envelope;
pub mod error;
pub mod health;
pub mod inventory;
pub mod query;
mod resource;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every `/api` handler and the JSON body error mapping.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use adtech::inbound::http::api_routes;
///
/// let app = App::new().service(web::scope("/api").configure(api_routes));
/// ```
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(accounts::register)
        .service(accounts::login)
        .service(accounts::me)
        .service(accounts::select_role)
        .service(advertisers::list_advertisers)
        .service(advertisers::create_advertiser)
        .service(advertisers::get_advertiser)
        .service(advertisers::update_advertiser)
        .service(advertisers::delete_advertiser)
        .service(inventory::list_inventory)
        .service(inventory::create_inventory)
        .service(inventory::get_inventory)
        .service(inventory::update_inventory)
        .service(inventory::delete_inventory)
        .service(deals::list_deals)
        .service(deals::create_deal)
        .service(deals::get_deal)
        .service(deals::update_deal)
        .service(deals::delete_deal)
        .service(dashboard::publisher_dashboard)
        .service(campaigns::list_campaigns)
        .service(campaigns::create_campaign)
        .service(campaigns::get_campaign)
        .service(campaigns::update_campaign)
        .service(campaigns::delete_campaign)
        .service(creatives::list_creatives)
        .service(creatives::create_creative)
        .service(creatives::get_creative)
        .service(creatives::update_creative)
        .service(creatives::delete_creative)
        .service(analytics::advertiser_analytics)
        .service(billing::billing_statement)
        .service(billing::create_invoice)
        .service(billing::update_balance)
        .service(audiences::list_audiences)
        .service(audiences::create_audience);
}
