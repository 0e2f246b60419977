//! JSON envelopes wrapping every API response.
//!
//! Successful calls answer `{"success": true, "data": ...}`, deletions
//! `{"success": true, "message": ...}`, and failures
//! `{"success": false, "error": ..., "code": ...}`.

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ErrorCode;
use crate::domain::user::User;

/// Successful payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    /// Always `true`.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wrap `data` as a success.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Confirmation for a deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageEnvelope {
    /// Always `true`.
    pub success: bool,
    /// Human readable confirmation, e.g. `Campaign deleted`.
    pub message: String,
}

/// Session payload returned by login and registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionEnvelope {
    /// Always `true`.
    pub success: bool,
    /// Authenticated account.
    pub user: User,
    /// Bearer token.
    pub token: String,
}

/// Current account payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    /// Always `true`.
    pub success: bool,
    /// Account.
    pub user: User,
}

/// Failure payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// Always `false`.
    pub success: bool,
    /// Human readable message.
    pub error: String,
    /// Stable machine-readable code.
    pub code: ErrorCode,
    /// Correlation id, also sent as the `trace-id` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Structured context, e.g. the missing field names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<Value>,
}

/// `200 OK` with `data`.
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::new(data))
}

/// `201 Created` with `data`.
pub fn created<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Created().json(Envelope::new(data))
}

/// `200 OK` confirming that a `label` record was removed.
pub fn deleted(label: &str) -> HttpResponse {
    HttpResponse::Ok().json(MessageEnvelope {
        success: true,
        message: format!("{label} deleted"),
    })
}
