//! Infrastructure layer: persistence of audited records.

pub mod clock;
pub mod repository;

pub use clock::{Clock, FixedClock, SystemClock};
pub use repository::{
    CustomerRepository, InMemoryCustomerRepository, InMemoryRepository, Repository,
    RepositoryError, RepositoryResult,
};
