use std::collections::BTreeMap;
use std::sync::RwLock;

use customer_core::{AuditFields, Audited, Entity, EntityId};
use customer_model::Customer;

use super::{Repository, RepositoryError, RepositoryResult};
use crate::clock::{Clock, SystemClock};

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<EntityId, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

/// In-memory repository with identity-column id assignment.
///
/// Intended for tests/dev. Ids start at 1, increase by one per insert and are
/// never handed out twice, even after a delete.
#[derive(Debug)]
pub struct InMemoryRepository<T, C = SystemClock> {
    table: RwLock<Table<T>>,
    clock: C,
}

pub type InMemoryCustomerRepository<C = SystemClock> = InMemoryRepository<Customer, C>;

impl<T> InMemoryRepository<T, SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<T> Default for InMemoryRepository<T, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> InMemoryRepository<T, C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            table: RwLock::new(Table::default()),
            clock,
        }
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Unavailable("lock poisoned".to_string())
}

/// Keep the write-once columns of `stored` on `incoming`.
fn carry_creation_columns(incoming: &mut AuditFields, stored: &AuditFields) {
    incoming.set_id(stored.id());
    incoming.set_created_at(stored.created_at());
    incoming.set_created_by(stored.created_by().map(str::to_owned));
}

impl<T, C> Repository<T> for InMemoryRepository<T, C>
where
    T: Audited + Clone + Send + Sync,
    C: Clock,
{
    fn save(&self, mut record: T, actor: &str) -> RepositoryResult<T> {
        if let Some(id) = record.id() {
            return Err(RepositoryError::AlreadyPersisted(id));
        }

        let mut table = self.table.write().map_err(|_| poisoned())?;
        table.last_id += 1;
        let id = EntityId::new(table.last_id);
        let now = self.clock.now();

        let audit = record.audit_mut();
        audit.set_id(Some(id));
        audit.set_created_at(Some(now));
        audit.set_created_by(Some(actor.to_owned()));
        audit.set_updated_at(Some(now));
        audit.set_updated_by(Some(actor.to_owned()));

        table.rows.insert(id, record.clone());
        tracing::debug!(%id, actor, "record saved");
        Ok(record)
    }

    fn find_by_id(&self, id: EntityId) -> RepositoryResult<Option<T>> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.get(&id).cloned())
    }

    fn update(&self, mut record: T, actor: &str) -> RepositoryResult<T> {
        let id = record.id().ok_or(RepositoryError::NotPersisted)?;

        let mut table = self.table.write().map_err(|_| poisoned())?;
        let stored = table
            .rows
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;

        let audit = record.audit_mut();
        carry_creation_columns(audit, stored.audit());
        audit.set_updated_at(Some(self.clock.now()));
        audit.set_updated_by(Some(actor.to_owned()));

        *stored = record.clone();
        tracing::debug!(%id, actor, "record updated");
        Ok(record)
    }

    fn delete(&self, id: EntityId) -> RepositoryResult<()> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        match table.rows.remove(&id) {
            Some(_) => {
                tracing::debug!(%id, "record deleted");
                Ok(())
            }
            None => Err(RepositoryError::NotFound(id)),
        }
    }

    fn find_all(&self) -> RepositoryResult<Vec<T>> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.values().cloned().collect())
    }
}
