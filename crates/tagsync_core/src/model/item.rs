//! Local timeline item model.
//!
//! # Responsibility
//! - Model the editorial tool's selectable timeline objects.
//! - Distinguish taggable clips from non-taggable overlay kinds.
//!
//! # Invariants
//! - An item's `name` is the only input to shot resolution.
//! - Only `ItemKind::Clip` items are eligible for per-item tag sync.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a timeline item within the local store.
pub type ItemId = Uuid;

/// Kind of object a timeline selection can contain.
///
/// Hosts without transition/effect support simply never produce those
/// variants; the selection filter tolerates their absence for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Regular editorial clip; taggable.
    Clip,
    /// Transition marker; never taggable.
    Transition,
    /// Effect overlay; never taggable.
    Effect,
}

/// One entry of a timeline selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    /// Stable local id used to address the item's tag assignment.
    pub id: ItemId,
    /// Display name, expected to follow `<sequence>_<shot>`.
    pub name: String,
    /// Selection object kind.
    pub kind: ItemKind,
}

impl TimelineItem {
    /// Creates a clip item with a generated id.
    pub fn clip(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind: ItemKind::Clip,
        }
    }

    /// Returns whether this item can carry tags at all.
    pub fn is_taggable(&self) -> bool {
        self.kind == ItemKind::Clip
    }
}
