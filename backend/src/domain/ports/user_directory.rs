//! Driven port for user lookups the generic store cannot express.

use super::StoreError;
use crate::domain::user::{User, UserDraft};

/// Email-keyed access to user accounts.
#[cfg_attr(test, mockall::automock)]
pub trait UserDirectory: Send + Sync {
    /// The user registered under exactly `email`.
    fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Create the user unless `draft.email` is taken.
    ///
    /// The check and the insert happen under one write, so two concurrent
    /// registrations of the same address cannot both succeed. Returns `None`
    /// when the address already exists.
    fn insert_unique(&self, draft: UserDraft) -> Result<Option<User>, StoreError>;
}
