//! `customer-core` — identity and audit building blocks for persisted records.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod audit;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use audit::{AuditFields, Audited};
pub use entity::Entity;
pub use error::DomainError;
pub use id::EntityId;
pub use value_object::ValueObject;
