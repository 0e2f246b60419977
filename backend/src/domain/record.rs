//! Record identity and the contract shared by every stored entity kind.
//!
//! Stores are generic over [`Record`]: the trait names the identity prefix,
//! the creation payload ([`Record::Draft`]), and the partial-update payload
//! ([`Record::Patch`]) for one entity kind. Identities are minted by
//! [`IdGenerator`] as `"<prefix>-<milliseconds>"`.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Opaque record identity such as `camp-1718000000000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "camp-1")]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a raw identity string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl PartialEq<str> for RecordId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Contract implemented by every entity kind held in a record store.
///
/// Implementations are plain values: `Clone` is the copy-on-read boundary, so
/// a record handed out by a store never aliases the stored one.
pub trait Record: Clone + Send + Sync + 'static {
    /// Namespace prefix for minted identities.
    const PREFIX: &'static str;
    /// Entity name used in client-facing messages, e.g. `"Campaign"`.
    const LABEL: &'static str;

    /// Creation payload: everything except store-assigned fields.
    type Draft: Send + 'static;
    /// Partial update: every field optional.
    type Patch: Send + 'static;

    /// Identity of this record.
    fn id(&self) -> &RecordId;

    /// Build a stored record from a draft, applying entity defaults.
    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Overwrite the fields the patch provides. Nested values are replaced
    /// wholesale.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Replace `slot` when the patch carries a value.
pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Replace an optional `slot` when the patch carries a value.
pub(crate) fn merge_optional<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Mints store-unique identities from millisecond timestamps.
///
/// The stamp is the current time in milliseconds unless that would not exceed
/// the previously issued stamp, in which case it is bumped to `last + 1`.
/// Stamps therefore strictly increase across every entity kind sharing the
/// generator, even when several records are created within one millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    /// Create a generator with no issued stamps.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Issue the next stamp for the instant `now`.
    pub fn next_stamp(&self, now: DateTime<Utc>) -> i64 {
        let now_ms = now.timestamp_millis();
        let advance = |last: i64| now_ms.max(last.saturating_add(1));
        match self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| Some(advance(last)))
        {
            Ok(previous) | Err(previous) => advance(previous),
        }
    }

    /// Mint an identity `"<prefix>-<stamp>"`.
    pub fn mint(&self, prefix: &str, now: DateTime<Utc>) -> RecordId {
        RecordId(format!("{prefix}-{}", self.next_stamp(now)))
    }
}
