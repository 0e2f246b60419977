//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, web};
use mockable::DefaultClock;

use super::api_routes;
use super::state::HttpState;
use crate::Trace;
use crate::domain::auth::{AuthService, TokenService};
use crate::domain::ports::DemoCredentialVerifier;
use crate::domain::record::RecordId;
use crate::outbound::memory::MemoryStore;

const TEST_SECRET: &[u8] = b"http-test-secret";

/// Seeded store behind a fully wired API.
pub(crate) struct TestApp {
    pub(crate) store: Arc<MemoryStore>,
    pub(crate) state: web::Data<HttpState>,
}

impl TestApp {
    /// Fresh store loaded from the embedded fixture, accepting demo passwords.
    pub(crate) fn seeded() -> Self {
        let store = Arc::new(MemoryStore::seeded(Arc::new(DefaultClock)).expect("seed loads"));
        let auth = AuthService::new(
            store.clone(),
            store.clone(),
            Arc::new(DemoCredentialVerifier),
            tokens(),
        );
        let state = web::Data::new(HttpState::backed_by(store.clone(), Arc::new(auth)));
        Self { store, state }
    }

    /// Valid token for the seeded publisher `user-1`.
    pub(crate) fn token(&self) -> String {
        tokens()
            .issue(&RecordId::new("user-1"), "john.doe@publisher.com")
            .expect("token signs")
    }
}

/// App serving `/api` with the trace middleware over `state`.
pub(crate) fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Trace)
        .service(web::scope("/api").configure(api_routes))
}

fn tokens() -> TokenService {
    TokenService::new(TEST_SECRET, Arc::new(DefaultClock))
}

/// `Authorization: Bearer <token>` header pair.
pub(crate) fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}
