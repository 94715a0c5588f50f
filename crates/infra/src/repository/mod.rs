//! Repository abstraction for audited records.
//!
//! The repository is the lifecycle hook the records rely on: it assigns ids,
//! stamps the audit columns and keeps `created_at`/`created_by` write-once.

pub mod in_memory;

use thiserror::Error;

use customer_core::{Audited, DomainError, EntityId};
use customer_model::Customer;

pub use in_memory::{InMemoryCustomerRepository, InMemoryRepository};

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("record already persisted with id {0}")]
    AlreadyPersisted(EntityId),

    #[error("record has not been persisted yet")]
    NotPersisted,

    #[error("no record with id {0}")]
    NotFound(EntityId),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => DomainError::not_found(id),
            other => DomainError::conflict(other.to_string()),
        }
    }
}

/// Persistence operations for one record type.
///
/// `actor` is the principal recorded in `created_by`/`updated_by`.
pub trait Repository<T>: Send + Sync
where
    T: Audited + Clone,
{
    /// Insert a new record: assigns the id and stamps all four audit columns.
    fn save(&self, record: T, actor: &str) -> RepositoryResult<T>;

    fn find_by_id(&self, id: EntityId) -> RepositoryResult<Option<T>>;

    /// Overwrite a persisted record, refreshing `updated_at`/`updated_by`.
    ///
    /// Caller changes to the id and creation columns are ignored.
    fn update(&self, record: T, actor: &str) -> RepositoryResult<T>;

    /// Hard delete.
    fn delete(&self, id: EntityId) -> RepositoryResult<()>;

    /// Every stored record, ordered by id.
    fn find_all(&self) -> RepositoryResult<Vec<T>>;
}

impl<T, R> Repository<T> for std::sync::Arc<R>
where
    T: Audited + Clone,
    R: Repository<T> + ?Sized,
{
    fn save(&self, record: T, actor: &str) -> RepositoryResult<T> {
        (**self).save(record, actor)
    }

    fn find_by_id(&self, id: EntityId) -> RepositoryResult<Option<T>> {
        (**self).find_by_id(id)
    }

    fn update(&self, record: T, actor: &str) -> RepositoryResult<T> {
        (**self).update(record, actor)
    }

    fn delete(&self, id: EntityId) -> RepositoryResult<()> {
        (**self).delete(id)
    }

    fn find_all(&self) -> RepositoryResult<Vec<T>> {
        (**self).find_all()
    }
}

/// Repository of [`Customer`] records.
pub trait CustomerRepository: Repository<Customer> {}

impl<R> CustomerRepository for R where R: Repository<Customer> + ?Sized {}
