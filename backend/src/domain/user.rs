//! Platform user accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::labels::labelled_enum;
use super::record::{Record, RecordId, merge, merge_optional};

labelled_enum! {
    /// Which side of the marketplace a user works on.
    pub enum UserRole {
        /// Sells inventory.
        Publisher => "publisher",
        /// Buys inventory through campaigns.
        Advertiser => "advertiser",
        /// Platform operator.
        Admin => "admin",
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store identity, `user-*`.
    pub id: RecordId,
    /// Login email; unique across users.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Marketplace role.
    pub role: UserRole,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL.
    pub avatar: Option<String>,
    /// Initial role.
    pub role: UserRole,
}

/// Partial update of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    /// New display name.
    pub name: Option<String>,
    /// New avatar URL.
    pub avatar: Option<String>,
    /// New role.
    pub role: Option<UserRole>,
}

impl UserPatch {
    /// Patch that only changes the role.
    #[must_use]
    pub fn role(role: UserRole) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }
}

impl Record for User {
    const PREFIX: &'static str = "user";
    const LABEL: &'static str = "User";

    type Draft = UserDraft;
    type Patch = UserPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: UserDraft) -> Self {
        let UserDraft {
            email,
            name,
            avatar,
            role,
        } = draft;
        Self {
            id,
            email,
            name,
            avatar,
            role,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        merge(&mut self.name, patch.name);
        merge_optional(&mut self.avatar, patch.avatar);
        merge(&mut self.role, patch.role);
    }
}
