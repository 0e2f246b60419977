//! Shared harness for the HTTP integration suites.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, web};
use chrono::{TimeZone, Utc};

use adtech::Trace;
use adtech::domain::auth::{AuthService, TokenService};
use adtech::domain::ports::{CredentialVerifier, DemoCredentialVerifier};
use adtech::domain::record::RecordId;
use adtech::inbound::http::api_routes;
use adtech::inbound::http::state::HttpState;
use adtech::outbound::credentials::HashedCredentialVerifier;
use adtech::outbound::memory::MemoryStore;
use adtech::test_support::MutableClock;

pub const SECRET: &[u8] = b"integration-suite-secret-0123456789";

/// Which password check the harness wires in.
#[derive(Clone, Copy, Debug)]
pub enum Credentials {
    Demo,
    Hashed,
}

/// Seeded store, hand-driven clock, and the handler state over both.
pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub clock: Arc<MutableClock>,
    pub state: web::Data<HttpState>,
}

impl Harness {
    pub fn new(credentials: Credentials) -> Self {
        let start = Utc
            .with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
            .single()
            .expect("valid instant");
        let clock = Arc::new(MutableClock::new(start));
        let store = Arc::new(MemoryStore::seeded(clock.clone()).expect("seed loads"));
        let verifier: Arc<dyn CredentialVerifier> = match credentials {
            Credentials::Demo => Arc::new(DemoCredentialVerifier),
            Credentials::Hashed => Arc::new(HashedCredentialVerifier::new()),
        };
        let auth = AuthService::new(
            store.clone(),
            store.clone(),
            verifier,
            TokenService::new(SECRET, clock.clone()),
        );
        let state = web::Data::new(HttpState::backed_by(store.clone(), Arc::new(auth)));
        Self {
            store,
            clock,
            state,
        }
    }

    /// Token for the seeded publisher `user-1`, issued at the harness clock.
    pub fn token(&self) -> String {
        TokenService::new(SECRET, self.clock.clone())
            .issue(&RecordId::new("user-1"), "john.doe@publisher.com")
            .expect("token signs")
    }
}

/// `/api` router with the trace middleware over `state`.
pub fn api_app(
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

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}
