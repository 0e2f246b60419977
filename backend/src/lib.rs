//! Mock ad-tech platform backend: an in-memory store of campaigns, creatives,
//! inventory, deals, advertisers, and billing records behind a bearer-token
//! protected REST API.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
