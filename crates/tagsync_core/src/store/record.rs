//! Boundary validation between wire records and typed domain values.
//!
//! # Responsibility
//! - Parse loosely-typed remote records into `ShotRecord` / `RemoteTag`.
//! - Build the wire payloads for tag creation and shot-tag updates.
//!
//! # Invariants
//! - Nothing past this module touches `serde_json::Value`.
//! - A tag *entity* carries its name in `code`; a tag *reference* on a shot
//!   carries it in `name`. Both shapes come from the tracking DB and both
//!   are handled here.

use crate::context::ProjectRef;
use crate::model::shot::{ShotId, ShotRecord};
use crate::model::tag::RemoteTag;
use crate::store::remote::{FindFilter, RemoteStore, UpdateMode};
use crate::store::{StoreError, StoreResult};
use serde_json::{json, Value};

/// Remote entity type holding shots.
pub const SHOT_ENTITY: &str = "Shot";
/// Remote entity type holding project-scoped tags.
pub const TAG_ENTITY: &str = "ProjectTag";
/// Multi-entity field on a shot holding its tag references.
pub const SHOT_TAGS_FIELD: &str = "tags";

/// Parses a project-tag entity record (`code` carries the name).
pub fn tag_from_entity(record: &Value) -> StoreResult<RemoteTag> {
    Ok(RemoteTag {
        id: require_i64(record, "id", TAG_ENTITY)?,
        name: require_str(record, "code", TAG_ENTITY)?,
    })
}

/// Parses a tag reference embedded in a shot's tag field (`name` carries
/// the name).
pub fn tag_from_reference(record: &Value) -> StoreResult<RemoteTag> {
    Ok(RemoteTag {
        id: require_i64(record, "id", "tag reference")?,
        name: require_str(record, "name", "tag reference")?,
    })
}

/// Parses a shot entity record including its tag references.
pub fn shot_from_value(record: &Value) -> StoreResult<ShotRecord> {
    let sequence = record
        .get("sequence")
        .and_then(|sequence| sequence.get("name"))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            StoreError::InvalidRecord(format!(
                "{SHOT_ENTITY} record is missing `sequence.name`: {record}"
            ))
        })?
        .to_string();

    let tags = match record.get(SHOT_TAGS_FIELD) {
        Some(Value::Array(references)) => references
            .iter()
            .map(tag_from_reference)
            .collect::<StoreResult<Vec<RemoteTag>>>()?,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            return Err(StoreError::InvalidRecord(format!(
                "{SHOT_ENTITY} field `{SHOT_TAGS_FIELD}` must be an array, got {other}"
            )))
        }
    };

    Ok(ShotRecord {
        id: require_i64(record, "id", SHOT_ENTITY)?,
        code: require_str(record, "code", SHOT_ENTITY)?,
        sequence,
        tags,
    })
}

/// Fetches every shot of the project, validated into typed records.
///
/// Scan order of the returned list matches the store's creation order; the
/// resolver's first-match contract leans on that.
pub fn fetch_project_shots<R: RemoteStore>(
    remote: &R,
    project: &ProjectRef,
) -> StoreResult<Vec<ShotRecord>> {
    let records = remote.find(
        SHOT_ENTITY,
        &[FindFilter::is("project_id", json!(project.id))],
        &["code", "sequence", SHOT_TAGS_FIELD],
    )?;
    records.iter().map(shot_from_value).collect()
}

/// Fetches every project tag entity, validated into typed records.
pub fn fetch_project_tags<R: RemoteStore>(
    remote: &R,
    project: &ProjectRef,
) -> StoreResult<Vec<RemoteTag>> {
    let records = remote.find(
        TAG_ENTITY,
        &[FindFilter::is("project_id", json!(project.id))],
        &["code"],
    )?;
    records.iter().map(tag_from_entity).collect()
}

/// Creates one project-scoped tag entity and returns its typed view.
pub fn create_project_tag<R: RemoteStore>(
    remote: &mut R,
    project: &ProjectRef,
    name: &str,
) -> StoreResult<RemoteTag> {
    let created = remote.create(
        TAG_ENTITY,
        json!({ "code": name, "project_id": project.id }),
    )?;
    tag_from_entity(&created)
}

/// Additively assigns tags to a shot; existing assignments are preserved.
pub fn add_shot_tags<R: RemoteStore>(
    remote: &mut R,
    shot: ShotId,
    tags: &[RemoteTag],
) -> StoreResult<()> {
    remote.update(
        SHOT_ENTITY,
        shot,
        json!({ SHOT_TAGS_FIELD: tag_references(tags) }),
        &[(SHOT_TAGS_FIELD, UpdateMode::Add)],
    )?;
    Ok(())
}

/// Clears the shot's tag assignment entirely. Tag entities survive.
pub fn clear_shot_tags<R: RemoteStore>(remote: &mut R, shot: ShotId) -> StoreResult<()> {
    remote.update(SHOT_ENTITY, shot, json!({ SHOT_TAGS_FIELD: [] }), &[])?;
    Ok(())
}

fn tag_references(tags: &[RemoteTag]) -> Vec<Value> {
    tags.iter()
        .map(|tag| json!({ "id": tag.id, "name": tag.name }))
        .collect()
}

fn require_i64(record: &Value, field: &str, what: &str) -> StoreResult<i64> {
    record
        .get(field)
        .and_then(Value::as_i64)
        .ok_or_else(|| StoreError::InvalidRecord(format!("{what} record is missing `{field}`: {record}")))
}

fn require_str(record: &Value, field: &str, what: &str) -> StoreResult<String> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| StoreError::InvalidRecord(format!("{what} record is missing `{field}`: {record}")))
}
