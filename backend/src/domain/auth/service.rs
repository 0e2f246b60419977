//! Login, registration, and identity resolution.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use url::Url;
use utoipa::ToSchema;

use super::credentials::{LoginCredentials, Registration};
use super::token::TokenService;
use crate::domain::Error;
use crate::domain::ports::{CredentialVerifier, RecordStore, UserDirectory};
use crate::domain::record::RecordId;
use crate::domain::user::{User, UserDraft, UserPatch, UserRole};

const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// An authenticated user and a fresh token.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AuthSession {
    /// Authenticated account.
    pub user: User,
    /// Bearer token for subsequent requests.
    pub token: String,
}

/// Auth use-cases over the user store, a credential verifier, and tokens.
pub struct AuthService {
    users: Arc<dyn RecordStore<User>>,
    directory: Arc<dyn UserDirectory>,
    credentials: Arc<dyn CredentialVerifier>,
    tokens: TokenService,
}

impl AuthService {
    /// Wire the service.
    pub fn new(
        users: Arc<dyn RecordStore<User>>,
        directory: Arc<dyn UserDirectory>,
        credentials: Arc<dyn CredentialVerifier>,
        tokens: TokenService,
    ) -> Self {
        Self {
            users,
            directory,
            credentials,
            tokens,
        }
    }

    /// Check credentials and open a session.
    ///
    /// Unknown emails and wrong passwords fail identically.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthSession, Error> {
        let Some(user) = self.directory.find_by_email(credentials.email())? else {
            info!("login rejected: unknown email");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };
        if !self
            .credentials
            .verify(&user.id, credentials.password())
            .await?
        {
            info!(user_id = %user.id, "login rejected: credential mismatch");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
        self.open_session(user)
    }

    /// Create a publisher account and open a session.
    pub async fn register(&self, registration: &Registration) -> Result<AuthSession, Error> {
        let credentials = registration.credentials();
        let draft = UserDraft {
            email: credentials.email().to_owned(),
            name: registration.name().to_owned(),
            avatar: avatar_url(registration.name()),
            role: UserRole::Publisher,
        };
        let Some(user) = self.directory.insert_unique(draft)? else {
            return Err(Error::invalid_request("User already exists"));
        };

        if let Err(err) = self.credentials.enrol(&user.id, credentials.password()).await {
            warn!(user_id = %user.id, error = %err, "credential enrolment failed; removing account");
            self.users.delete(user.id.as_str())?;
            return Err(err.into());
        }
        info!(user_id = %user.id, "registered user");
        self.open_session(user)
    }

    /// User behind a bearer token; `None` when the token is invalid or the
    /// account no longer exists.
    pub fn resolve_user(&self, token: &str) -> Result<Option<User>, Error> {
        let Some(claims) = self.tokens.verify(token) else {
            return Ok(None);
        };
        Ok(self.users.get(claims.user_id.as_str())?)
    }

    /// Change the role of `user_id`.
    pub fn select_role(&self, user_id: &RecordId, role: UserRole) -> Result<User, Error> {
        self.users
            .update(user_id.as_str(), UserPatch::role(role))?
            .ok_or_else(|| Error::not_found("User not found"))
    }

    fn open_session(&self, user: User) -> Result<AuthSession, Error> {
        let token = self
            .tokens
            .issue(&user.id, &user.email)
            .map_err(|err| Error::internal(err.to_string()))?;
        Ok(AuthSession { user, token })
    }
}

fn avatar_url(name: &str) -> Option<String> {
    Url::parse_with_params(AVATAR_SERVICE, [("name", name), ("background", "random")])
        .ok()
        .map(String::from)
}
