//! Domain error model.

use thiserror::Error;

use crate::id::EntityId;

/// Domain-level error.
///
/// The records themselves never fail; these variants cover identifier parsing
/// and the outcomes a persistence collaborator reports back to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found: {0}")]
    NotFound(EntityId),

    /// The request conflicts with the record's persisted state.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(id: EntityId) -> Self {
        Self::NotFound(id)
    }
}
