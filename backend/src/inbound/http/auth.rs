//! Bearer-token extractor guarding protected handlers.
//!
//! Listing [`Authenticated`] first in a handler's arguments makes the token
//! check run before any other extractor or store call. Every rejection
//! (missing header, wrong scheme, bad or expired token, deleted account)
//! answers the same `401 Unauthorized`.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures_util::future::{Ready, ready};
use tracing::debug;

use super::state::HttpState;
use crate::domain::auth::extract_bearer;
use crate::domain::user::User;
use crate::domain::Error;

const UNAUTHORIZED: &str = "Unauthorized";

/// The user behind a valid bearer token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub User);

impl Authenticated {
    /// Authenticated account.
    pub fn user(&self) -> &User {
        &self.0
    }

    fn resolve(req: &HttpRequest) -> Result<Self, Error> {
        let Some(state) = req.app_data::<web::Data<HttpState>>() else {
            return Err(Error::internal("HTTP state not configured"));
        };
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(extract_bearer)
            .ok_or_else(|| {
                debug!("missing or malformed authorization header");
                Error::unauthorized(UNAUTHORIZED)
            })?;
        match state.auth.resolve_user(token)? {
            Some(user) => Ok(Self(user)),
            None => {
                debug!("bearer token rejected");
                Err(Error::unauthorized(UNAUTHORIZED))
            }
        }
    }
}

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::resolve(req))
    }
}
