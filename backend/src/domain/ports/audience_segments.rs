//! Driven port for the audience segment catalogue.

use super::StoreError;

/// Named audiences campaigns may target.
#[cfg_attr(test, mockall::automock)]
pub trait AudienceSegments: Send + Sync {
    /// Segment names in insertion order.
    fn segments(&self) -> Result<Vec<String>, StoreError>;

    /// Append `name` unless already present; returns the stored name.
    fn add_segment(&self, name: &str) -> Result<String, StoreError>;
}
