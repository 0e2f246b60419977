//! Account endpoints: registration, login, current user, and role choice.
//!
//! ```text
//! POST /api/auth/register {"email":"ann@example.com","password":"secret1","name":"Ann"}
//! POST /api/auth/login    {"email":"ann@example.com","password":"secret1"}
//! GET  /api/auth/me       Authorization: Bearer <token>
//! PUT  /api/auth/role     {"role":"advertiser"}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use super::ApiResult;
use super::auth::Authenticated;
use super::envelope::{ErrorEnvelope, SessionEnvelope, UserEnvelope};
use super::state::HttpState;
use super::validation::RequiredFields;
use crate::domain::Error;
use crate::domain::auth::{AuthSession, CredentialsValidationError, LoginCredentials, Registration};
use crate::domain::user::{User, UserRole};

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    /// Accepted for compatibility; not stored.
    pub company: Option<String>,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `PUT /api/auth/role`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct RoleRequest {
    /// One of `publisher`, `advertiser`, `admin`.
    pub role: Option<String>,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = Error;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::default();
        let email = required.text("email", value.email);
        let password = required.text("password", value.password);
        let name = required.text("name", value.name);
        required.finish()?;
        Self::try_from_parts(&email, &password, &name).map_err(map_credentials_error)
    }
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = Error;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::default();
        let email = required.text("email", value.email);
        let password = required.text("password", value.password);
        required.finish()?;
        Self::try_from_parts(&email, &password).map_err(map_credentials_error)
    }
}

fn map_credentials_error(err: CredentialsValidationError) -> Error {
    let field = match err {
        CredentialsValidationError::EmptyEmail => "email",
        CredentialsValidationError::EmptyPassword => "password",
        CredentialsValidationError::EmptyName => "name",
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

fn parse_role(raw: Option<String>) -> ApiResult<UserRole> {
    let mut required = RequiredFields::default();
    let label = required.text("role", raw);
    required.finish()?;
    UserRole::ALL
        .iter()
        .copied()
        .find(|role| role.as_str() == label.trim())
        .ok_or_else(|| {
            let allowed: Vec<_> = UserRole::ALL.iter().map(|role| role.as_str()).collect();
            Error::invalid_request("Invalid role").with_details(json!({ "allowed": allowed }))
        })
}

fn session(status: actix_web::http::StatusCode, session: AuthSession) -> HttpResponse {
    HttpResponse::build(status).json(SessionEnvelope {
        success: true,
        user: session.user,
        token: session.token,
    })
}

fn current(user: User) -> HttpResponse {
    HttpResponse::Ok().json(UserEnvelope {
        success: true,
        user,
    })
}

/// Create a publisher account and return a session token.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = SessionEnvelope),
        (status = 400, description = "Missing fields or existing email", body = ErrorEnvelope)
    ),
    tags = ["auth"],
    operation_id = "register",
    security([])
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration = Registration::try_from(payload.into_inner())?;
    let opened = state.auth.register(&registration).await?;
    Ok(session(actix_web::http::StatusCode::CREATED, opened))
}

/// Exchange email and password for a session token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = SessionEnvelope),
        (status = 400, description = "Missing fields", body = ErrorEnvelope),
        (status = 401, description = "Invalid credentials", body = ErrorEnvelope)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::try_from(payload.into_inner())?;
    let opened = state.auth.login(&credentials).await?;
    Ok(session(actix_web::http::StatusCode::OK, opened))
}

/// Account behind the bearer token.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = UserEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope)
    ),
    tags = ["auth"],
    operation_id = "currentUser",
    security(("bearer" = []))
)]
#[get("/auth/me")]
pub async fn me(auth: Authenticated) -> ApiResult<HttpResponse> {
    Ok(current(auth.0))
}

/// Switch the caller between the publisher and advertiser consoles.
#[utoipa::path(
    put,
    path = "/api/auth/role",
    request_body = RoleRequest,
    responses(
        (status = 200, description = "Updated user", body = UserEnvelope),
        (status = 400, description = "Missing or unknown role", body = ErrorEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorEnvelope),
        (status = 404, description = "User not found", body = ErrorEnvelope)
    ),
    tags = ["auth"],
    operation_id = "selectRole",
    security(("bearer" = []))
)]
#[put("/auth/role")]
pub async fn select_role(
    auth: Authenticated,
    state: web::Data<HttpState>,
    payload: web::Json<RoleRequest>,
) -> ApiResult<HttpResponse> {
    let role = parse_role(payload.into_inner().role)?;
    let user = state.auth.select_role(&auth.user().id, role)?;
    info!(user_id = %user.id, role = %role, "role selected");
    Ok(current(user))
}
