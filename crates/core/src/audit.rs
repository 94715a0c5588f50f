//! Identity and audit bookkeeping shared by every persisted record.
//!
//! `AuditFields` is a passive holder: it never stamps itself. Populating the
//! fields on create/update is the job of the persistence layer, which is also
//! what keeps `created_at`/`created_by` write-once. The accessors here are
//! deliberately unrestricted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// Identity + audit columns (the "audited entity" base record).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFields {
    id: Option<EntityId>,
    created_at: Option<NaiveDateTime>,
    created_by: Option<String>,
    updated_at: Option<NaiveDateTime>,
    updated_by: Option<String>,
}

impl AuditFields {
    /// Unpersisted audit state: every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<EntityId>) {
        self.id = id;
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }

    pub fn set_created_at(&mut self, at: Option<NaiveDateTime>) {
        self.created_at = at;
    }

    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    pub fn set_created_by(&mut self, by: Option<String>) {
        self.created_by = by;
    }

    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        self.updated_at
    }

    pub fn set_updated_at(&mut self, at: Option<NaiveDateTime>) {
        self.updated_at = at;
    }

    pub fn updated_by(&self) -> Option<&str> {
        self.updated_by.as_deref()
    }

    pub fn set_updated_by(&mut self, by: Option<String>) {
        self.updated_by = by;
    }
}

/// A record that embeds [`AuditFields`].
///
/// Implementors only provide `audit`/`audit_mut`; the audit accessors come for
/// free, which is how a concrete record "inherits" the base columns.
pub trait Audited {
    fn audit(&self) -> &AuditFields;

    fn audit_mut(&mut self) -> &mut AuditFields;

    fn created_at(&self) -> Option<NaiveDateTime> {
        self.audit().created_at()
    }

    fn set_created_at(&mut self, at: Option<NaiveDateTime>) {
        self.audit_mut().set_created_at(at);
    }

    fn created_by(&self) -> Option<&str> {
        self.audit().created_by()
    }

    fn set_created_by(&mut self, by: Option<String>) {
        self.audit_mut().set_created_by(by);
    }

    fn updated_at(&self) -> Option<NaiveDateTime> {
        self.audit().updated_at()
    }

    fn set_updated_at(&mut self, at: Option<NaiveDateTime>) {
        self.audit_mut().set_updated_at(at);
    }

    fn updated_by(&self) -> Option<&str> {
        self.audit().updated_by()
    }

    fn set_updated_by(&mut self, by: Option<String>) {
        self.audit_mut().set_updated_by(by);
    }
}

impl Audited for AuditFields {
    fn audit(&self) -> &AuditFields {
        self
    }

    fn audit_mut(&mut self) -> &mut AuditFields {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn new_audit_fields_are_all_absent() {
        let fields = AuditFields::new();
        assert!(fields.id().is_none());
        assert!(fields.created_at().is_none());
        assert!(fields.created_by().is_none());
        assert!(fields.updated_at().is_none());
        assert!(fields.updated_by().is_none());
        assert!(Entity::is_new(&fields));
    }

    #[test]
    fn accessors_store_values_without_validation() {
        let mut fields = AuditFields::new();
        fields.set_id(Some(EntityId::new(3)));
        fields.set_created_at(Some(at(2024, 2, 1)));
        fields.set_created_by(Some(String::new()));
        fields.set_updated_at(Some(at(2023, 1, 1)));
        fields.set_updated_by(Some("editor".to_string()));

        assert_eq!(fields.id(), Some(EntityId::new(3)));
        assert_eq!(fields.created_by(), Some(""));
        // No ordering check between the two timestamps at this layer.
        assert!(fields.updated_at() < fields.created_at());
        assert_eq!(fields.updated_by(), Some("editor"));
        assert!(!Entity::is_new(&fields));
    }

    #[test]
    fn updated_by_can_be_cleared() {
        let mut fields = AuditFields::new();
        fields.set_updated_by(Some("someone".to_string()));
        fields.set_updated_by(None);
        assert!(fields.updated_by().is_none());
    }

    #[test]
    fn serializes_with_camel_case_columns() {
        let mut fields = AuditFields::new();
        fields.set_created_by(Some("system".to_string()));
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["createdBy"], "system");
        assert!(json.get("updatedAt").is_some());
        assert!(json["id"].is_null());
    }
}
