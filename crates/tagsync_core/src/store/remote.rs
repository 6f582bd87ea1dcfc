//! Remote tracking-database contract and in-memory implementation.
//!
//! # Responsibility
//! - Mirror the tracking DB's loosely-typed query/create/update API.
//! - Honor additive vs replacement semantics for multi-entity fields.
//!
//! # Invariants
//! - `update` with `UpdateMode::Add` on a field merges into the existing
//!   array without dropping entries; without a mode the field is replaced
//!   wholesale.
//! - Record ids are assigned once and never reused.
//! - `find` preserves creation order, which resolver scan order depends on.

use crate::store::{StoreError, StoreResult};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Equality filter for `find`, the only operator this core needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindFilter {
    pub field: String,
    pub value: Value,
}

impl FindFilter {
    /// Builds a `field is value` filter.
    pub fn is(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }
}

/// Per-field update mode for multi-entity fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Merge into the existing collection instead of replacing it.
    Add,
}

/// Interface the sync core consumes from the tracking database.
///
/// Records cross this boundary as loosely-typed JSON values; callers must
/// go through `store::record` to obtain typed views.
pub trait RemoteStore {
    /// Queries records of one entity type matching every filter, projecting
    /// the requested fields (plus `id` and `type`).
    fn find(
        &self,
        entity_type: &str,
        filters: &[FindFilter],
        fields: &[&str],
    ) -> StoreResult<Vec<Value>>;

    /// Creates one record and returns it with its assigned id.
    fn create(&mut self, entity_type: &str, data: Value) -> StoreResult<Value>;

    /// Updates one record. `multi_entity_update_modes` selects additive
    /// merging per field; fields without a mode are replaced.
    fn update(
        &mut self,
        entity_type: &str,
        id: i64,
        data: Value,
        multi_entity_update_modes: &[(&str, UpdateMode)],
    ) -> StoreResult<Value>;
}

/// Deterministic in-memory tracking DB used by tests and the smoke CLI.
#[derive(Debug)]
pub struct InMemoryRemoteStore {
    tables: BTreeMap<String, Vec<Value>>,
    next_id: i64,
}

impl Default for InMemoryRemoteStore {
    fn default() -> Self {
        let mut tables = BTreeMap::new();
        tables.insert(super::record::SHOT_ENTITY.to_string(), Vec::new());
        tables.insert(super::record::TAG_ENTITY.to_string(), Vec::new());
        Self { tables, next_id: 1 }
    }
}

impl InMemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a project tag entity directly, returning its assigned id.
    pub fn seed_project_tag(&mut self, project_id: i64, name: &str) -> i64 {
        let id = self.take_id();
        let record = json!({
            "id": id,
            "type": super::record::TAG_ENTITY,
            "code": name,
            "project_id": project_id,
        });
        self.push_record(super::record::TAG_ENTITY, record);
        id
    }

    /// Seeds a shot entity with pre-assigned tag references.
    pub fn seed_shot(
        &mut self,
        project_id: i64,
        sequence: &str,
        code: &str,
        tags: &[(i64, &str)],
    ) -> i64 {
        let id = self.take_id();
        let tag_refs: Vec<Value> = tags
            .iter()
            .map(|(tag_id, name)| json!({ "id": tag_id, "name": name }))
            .collect();
        let record = json!({
            "id": id,
            "type": super::record::SHOT_ENTITY,
            "code": code,
            "sequence": { "name": sequence },
            "project_id": project_id,
            "tags": tag_refs,
        });
        self.push_record(super::record::SHOT_ENTITY, record);
        id
    }

    fn take_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push_record(&mut self, entity_type: &str, record: Value) {
        self.tables
            .entry(entity_type.to_string())
            .or_default()
            .push(record);
    }

    fn table(&self, entity_type: &str) -> StoreResult<&Vec<Value>> {
        self.tables
            .get(entity_type)
            .ok_or_else(|| StoreError::UnknownEntityType(entity_type.to_string()))
    }

    fn table_mut(&mut self, entity_type: &str) -> StoreResult<&mut Vec<Value>> {
        self.tables
            .get_mut(entity_type)
            .ok_or_else(|| StoreError::UnknownEntityType(entity_type.to_string()))
    }
}

impl RemoteStore for InMemoryRemoteStore {
    fn find(
        &self,
        entity_type: &str,
        filters: &[FindFilter],
        fields: &[&str],
    ) -> StoreResult<Vec<Value>> {
        let records = self.table(entity_type)?;
        let mut matched = Vec::new();
        for record in records {
            if filters
                .iter()
                .all(|filter| record.get(filter.field.as_str()) == Some(&filter.value))
            {
                matched.push(project_fields(record, fields));
            }
        }
        Ok(matched)
    }

    fn create(&mut self, entity_type: &str, data: Value) -> StoreResult<Value> {
        // Validate the table before consuming an id.
        self.table(entity_type)?;
        let id = self.take_id();

        let mut record = match data {
            Value::Object(map) => map,
            other => {
                return Err(StoreError::InvalidRecord(format!(
                    "create payload must be an object, got {other}"
                )))
            }
        };
        record.insert("id".to_string(), json!(id));
        record.insert("type".to_string(), json!(entity_type));
        let record = Value::Object(record);

        self.push_record(entity_type, record.clone());
        Ok(record)
    }

    fn update(
        &mut self,
        entity_type: &str,
        id: i64,
        data: Value,
        multi_entity_update_modes: &[(&str, UpdateMode)],
    ) -> StoreResult<Value> {
        let entity_name = entity_type.to_string();
        let records = self.table_mut(entity_type)?;
        let record = records
            .iter_mut()
            .find(|record| record.get("id").and_then(Value::as_i64) == Some(id))
            .ok_or(StoreError::RecordNotFound {
                entity_type: entity_name,
                id,
            })?;

        let updates = match data {
            Value::Object(map) => map,
            other => {
                return Err(StoreError::InvalidRecord(format!(
                    "update payload must be an object, got {other}"
                )))
            }
        };

        for (field, value) in updates {
            let additive = multi_entity_update_modes
                .iter()
                .any(|(mode_field, mode)| *mode_field == field && *mode == UpdateMode::Add);
            if additive {
                merge_multi_entity_field(record, &field, value);
            } else if let Some(target) = record.as_object_mut() {
                target.insert(field, value);
            }
        }

        Ok(record.clone())
    }
}

/// Merges an array of entity references into `record[field]`, deduplicating
/// on the reference `id`.
fn merge_multi_entity_field(record: &mut Value, field: &str, incoming: Value) {
    let incoming_refs = match incoming {
        Value::Array(refs) => refs,
        other => {
            if let Some(target) = record.as_object_mut() {
                target.insert(field.to_string(), other);
            }
            return;
        }
    };

    let Some(target) = record.as_object_mut() else {
        return;
    };
    let existing = target
        .entry(field.to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    let Some(existing_refs) = existing.as_array_mut() else {
        *existing = Value::Array(incoming_refs);
        return;
    };

    for reference in incoming_refs {
        let reference_id = reference.get("id").and_then(Value::as_i64);
        let already_assigned = existing_refs
            .iter()
            .any(|known| known.get("id").and_then(Value::as_i64) == reference_id);
        if !already_assigned {
            existing_refs.push(reference);
        }
    }
}

fn project_fields(record: &Value, fields: &[&str]) -> Value {
    let mut projected = Map::new();
    for key in ["id", "type"] {
        if let Some(value) = record.get(key) {
            projected.insert(key.to_string(), value.clone());
        }
    }
    for field in fields {
        if let Some(value) = record.get(*field) {
            projected.insert((*field).to_string(), value.clone());
        }
    }
    Value::Object(projected)
}

#[cfg(test)]
mod tests {
    use super::{FindFilter, InMemoryRemoteStore, RemoteStore, UpdateMode};
    use crate::store::record::{SHOT_ENTITY, SHOT_TAGS_FIELD, TAG_ENTITY};
    use crate::store::StoreError;
    use serde_json::{json, Value};

    #[test]
    fn find_filters_by_equality_and_projects_fields() {
        let mut remote = InMemoryRemoteStore::new();
        remote.seed_project_tag(1, "approved");
        remote.seed_project_tag(2, "other-project");

        let found = remote
            .find(
                TAG_ENTITY,
                &[FindFilter::is("project_id", json!(1))],
                &["code"],
            )
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get("code"), Some(&json!("approved")));
        assert!(found[0].get("project_id").is_none());
        assert!(found[0].get("id").is_some());
    }

    #[test]
    fn additive_update_merges_without_duplicates() {
        let mut remote = InMemoryRemoteStore::new();
        let tag_id = remote.seed_project_tag(1, "X");
        let shot_id = remote.seed_shot(1, "AB", "010", &[(tag_id, "X")]);

        remote
            .update(
                SHOT_ENTITY,
                shot_id,
                json!({ SHOT_TAGS_FIELD: [
                    { "id": tag_id, "name": "X" },
                    { "id": 99, "name": "Y" },
                ]}),
                &[(SHOT_TAGS_FIELD, UpdateMode::Add)],
            )
            .unwrap();

        let shots = remote
            .find(SHOT_ENTITY, &[], &[SHOT_TAGS_FIELD])
            .unwrap();
        let tags = shots[0].get(SHOT_TAGS_FIELD).and_then(Value::as_array);
        assert_eq!(tags.map(Vec::len), Some(2));
    }

    #[test]
    fn plain_update_replaces_the_field() {
        let mut remote = InMemoryRemoteStore::new();
        let tag_id = remote.seed_project_tag(1, "X");
        let shot_id = remote.seed_shot(1, "AB", "010", &[(tag_id, "X")]);

        remote
            .update(SHOT_ENTITY, shot_id, json!({ SHOT_TAGS_FIELD: [] }), &[])
            .unwrap();

        let shots = remote
            .find(SHOT_ENTITY, &[], &[SHOT_TAGS_FIELD])
            .unwrap();
        let tags = shots[0].get(SHOT_TAGS_FIELD).and_then(Value::as_array);
        assert_eq!(tags.map(Vec::len), Some(0));
    }

    #[test]
    fn update_of_missing_record_fails() {
        let mut remote = InMemoryRemoteStore::new();
        let error = remote
            .update(SHOT_ENTITY, 404, json!({}), &[])
            .unwrap_err();
        assert_eq!(
            error,
            StoreError::RecordNotFound {
                entity_type: SHOT_ENTITY.to_string(),
                id: 404
            }
        );
    }
}
