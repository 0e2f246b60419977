//! Builders that assemble the store, auth service, and handler state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use adtech::domain::auth::{AuthService, TokenService};
use adtech::domain::ports::{CredentialVerifier, DemoCredentialVerifier};
use adtech::inbound::http::auth_config::AuthSettings;
use adtech::inbound::http::state::HttpState;
use adtech::outbound::credentials::HashedCredentialVerifier;
use adtech::outbound::memory::MemoryStore;

/// Credential check selected by the demo switch.
pub(super) fn credential_verifier(demo_mode: bool) -> Arc<dyn CredentialVerifier> {
    if demo_mode {
        warn!("AUTH_DEMO_MODE enabled; any password of six or more characters is accepted");
        Arc::new(DemoCredentialVerifier)
    } else {
        Arc::new(HashedCredentialVerifier::new())
    }
}

/// Seed the store and wire every port into [`HttpState`].
///
/// # Errors
/// Returns [`std::io::Error`] when the embedded seed data cannot be loaded.
pub(super) fn build_http_state(
    auth: &AuthSettings,
    clock: Arc<dyn Clock>,
) -> std::io::Result<web::Data<HttpState>> {
    let store = Arc::new(
        MemoryStore::seeded(clock.clone())
            .map_err(|err| std::io::Error::other(format!("seed data failed to load: {err}")))?,
    );
    let tokens = TokenService::new(auth.secret(), clock);
    let service = AuthService::new(
        store.clone(),
        store.clone(),
        credential_verifier(auth.demo_mode()),
        tokens,
    );
    info!(
        secret_fingerprint = %auth.fingerprint(),
        demo_mode = auth.demo_mode(),
        "auth gate configured"
    );
    Ok(web::Data::new(HttpState::backed_by(store, Arc::new(service))))
}

/// Production clock.
pub(super) fn system_clock() -> Arc<dyn Clock> {
    Arc::new(DefaultClock)
}
