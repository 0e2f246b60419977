//! Domain primitives, entities, and the reports derived from them.
//!
//! Purpose: define the typed records the mock platform stores, the filters
//! and aggregates computed over them, and the ports adapters implement.
//! Wire spelling (camelCase fields, fixed status labels) is fixed here via
//! serde so every adapter agrees on it.
//!
//! Public surface:
//! - Error / ErrorCode: failure payload shared by every layer.
//! - Record / RecordId / IdGenerator: the generic store contract.
//! - RecordFilter: list filtering by status, kind, owner, text, and dates.
//! - One module per entity plus `analytics`, `dashboard`, and `billing`
//!   report builders.

pub mod advertiser;
pub mod analytics;
pub mod auth;
pub mod billing;
pub mod campaign;
pub mod creative;
pub mod dashboard;
pub mod deal;
pub mod error;
pub mod filter;
pub mod inventory;
pub(crate) mod labels;
pub mod ports;
pub mod record;
pub mod trace_id;
pub mod user;

pub use self::advertiser::{Advertiser, AdvertiserDraft, AdvertiserPatch};
pub use self::billing::{BillingProfile, BillingStatement, Invoice, InvoiceDraft, InvoicePatch};
pub use self::campaign::{Campaign, CampaignDraft, CampaignPatch};
pub use self::creative::{Creative, CreativeDraft, CreativePatch};
pub use self::deal::{Deal, DealDraft, DealPatch};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::filter::{DateRange, Filterable, RecordFilter};
pub use self::inventory::{Inventory, InventoryDraft, InventoryPatch};
pub use self::record::{IdGenerator, Record, RecordId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserPatch, UserRole};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use adtech::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Campaign not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
