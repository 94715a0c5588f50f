//! Customer records.
//!
//! Plain data only (no IO, no HTTP, no storage). Persistence and audit
//! stamping belong to the repository layer.

pub mod customer;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use customer::{Customer, CustomerDetails};
pub use customer_core::{AuditFields, Audited, Entity, EntityId};
