//! Entity trait: identity + continuity across state changes.

use crate::audit::Audited;
use crate::id::EntityId;

/// Entity marker + minimal interface.
///
/// Identity is optional: a record has no id until the persistence layer saves
/// it for the first time, and keeps the same id from then on.
pub trait Entity {
    /// Returns the entity identifier, if one has been assigned.
    fn id(&self) -> Option<EntityId>;

    /// Whether the record has never been persisted.
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}

impl<T: Audited> Entity for T {
    fn id(&self) -> Option<EntityId> {
        self.audit().id()
    }
}
