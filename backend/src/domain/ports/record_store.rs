//! Driven port for typed record collections.
//!
//! Every operation completes without suspending, so a mutation is never
//! observed half-applied. Records are returned by value: callers own their
//! copy and changing it does not touch the stored record.

use super::define_port_error;
use crate::domain::record::Record;

define_port_error! {
    /// Failures raised by record store adapters.
    pub enum StoreError {
        /// A writer panicked while holding the collections.
        Poisoned { message: String } => "record store poisoned: {message}",
        /// Seed data could not be decoded.
        Seed { message: String } => "seed data rejected: {message}",
    }
}

/// CRUD over one collection of `R`.
///
/// `update` and `delete` report a missing id through `None`/`false` rather
/// than an error, so callers choose the not-found message.
pub trait RecordStore<R: Record>: Send + Sync {
    /// All records in insertion order.
    fn list(&self) -> Result<Vec<R>, StoreError>;

    /// The record with `id`, if present.
    fn get(&self, id: &str) -> Result<Option<R>, StoreError>;

    /// Mint an id and timestamp, store the record, and return it.
    fn create(&self, draft: R::Draft) -> Result<R, StoreError>;

    /// Merge `patch` into the record with `id` and return the result.
    fn update(&self, id: &str, patch: R::Patch) -> Result<Option<R>, StoreError>;

    /// Remove the record with `id`; `true` when something was removed.
    fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
