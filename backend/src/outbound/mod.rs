//! Outbound adapters implementing the domain ports.
//!
//! - **memory**: the seeded in-memory store behind every record port.
//! - **credentials**: salted-digest password verification.
//!
//! Adapters translate between domain types and their storage; they contain
//! no business rules.

pub mod credentials;
pub mod memory;
