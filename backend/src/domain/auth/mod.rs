//! Authentication: credentials, bearer tokens, and the auth service.

mod credentials;
mod service;
mod token;

pub use credentials::{CredentialsValidationError, LoginCredentials, Registration};
pub use service::{AuthService, AuthSession};
pub use token::{TOKEN_TTL_DAYS, TokenClaims, TokenError, TokenService, extract_bearer};
