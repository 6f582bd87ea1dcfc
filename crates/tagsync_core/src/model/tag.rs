//! Tag records for both stores.
//!
//! # Responsibility
//! - Model the local editorial tag and the remote tracking-DB tag.
//! - Keep the two identities separate; only names are compared.
//!
//! # Invariants
//! - A `LocalTag` id is stable for the tag's lifetime in the local registry.
//! - A `RemoteTag` id is the tracking DB's record id and never synthesized
//!   by this core.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a tag in the local editorial registry.
pub type LocalTagId = Uuid;

/// Record id assigned by the remote tracking database.
pub type RemoteTagId = i64;

/// Tag owned by the local editorial tool.
///
/// Only the name participates in synchronization; the id exists so the
/// local store can address assignments without string lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalTag {
    /// Stable registry id.
    pub id: LocalTagId,
    /// Display name; the sync identity.
    pub name: String,
}

impl LocalTag {
    /// Creates a detached local tag with a generated id.
    ///
    /// The tag belongs to no item and no vocabulary until a store call
    /// attaches it.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Project-scoped tag entity owned by the remote tracking database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTag {
    /// Remote record id.
    pub id: RemoteTagId,
    /// Tag name (`code` field on the wire); the sync identity.
    pub name: String,
}
