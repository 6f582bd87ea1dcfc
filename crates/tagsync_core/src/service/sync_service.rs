//! Sync orchestrator and selection intake.
//!
//! # Responsibility
//! - Expose the five externally-triggered operations as zero-argument
//!   methods over an explicit project context.
//! - Filter non-taggable selection kinds before per-item sync.
//!
//! # Invariants
//! - Each method runs one invocation to completion; no state is cached
//!   across invocations beyond the stores themselves.

use crate::context::ProjectContext;
use crate::model::item::TimelineItem;
use crate::store::local::LocalStore;
use crate::store::remote::RemoteStore;
use crate::store::StoreResult;
use crate::sync::items::sync_selection;
use crate::sync::vocabulary::sync_project_vocabulary;
use crate::sync::{ItemSyncReport, SyncDirection, VocabularySyncReport};

/// Supplies the current timeline selection at invocation time.
///
/// The host tool owns the selection; the core reads it once per
/// invocation and never caches it.
pub trait SelectionProvider {
    fn current_selection(&self) -> Vec<TimelineItem>;
}

/// Fixed selections, used by tests and the smoke CLI.
impl SelectionProvider for Vec<TimelineItem> {
    fn current_selection(&self) -> Vec<TimelineItem> {
        self.clone()
    }
}

/// Drops selection entries that cannot carry tags (transitions, effects).
pub fn taggable_items(selection: Vec<TimelineItem>) -> Vec<TimelineItem> {
    selection
        .into_iter()
        .filter(TimelineItem::is_taggable)
        .collect()
}

/// Entry-point facade the host tool binds its commands to.
pub struct TagSyncService<L: LocalStore, R: RemoteStore, S: SelectionProvider> {
    ctx: ProjectContext<L, R>,
    selection: S,
}

impl<L: LocalStore, R: RemoteStore, S: SelectionProvider> TagSyncService<L, R, S> {
    pub fn new(ctx: ProjectContext<L, R>, selection: S) -> Self {
        Self { ctx, selection }
    }

    /// "Sync project tags": bidirectional, additive vocabulary sync.
    pub fn sync_project_tags(&mut self) -> StoreResult<VocabularySyncReport> {
        sync_project_vocabulary(&mut self.ctx)
    }

    /// "Push tags (add)": local tags join each shot's assignment.
    pub fn push_tags_add(&mut self) -> StoreResult<ItemSyncReport> {
        self.item_sync(SyncDirection::Push, false)
    }

    /// "Push tags (overwrite)": each shot's assignment becomes exactly the
    /// item's filtered local set.
    pub fn push_tags_overwrite(&mut self) -> StoreResult<ItemSyncReport> {
        self.item_sync(SyncDirection::Push, true)
    }

    /// "Pull tags (add)": shot tags join each item's assignment.
    pub fn pull_tags_add(&mut self) -> StoreResult<ItemSyncReport> {
        self.item_sync(SyncDirection::Pull, false)
    }

    /// "Pull tags (overwrite)": each item's assignment becomes exactly its
    /// shot's remote set.
    pub fn pull_tags_overwrite(&mut self) -> StoreResult<ItemSyncReport> {
        self.item_sync(SyncDirection::Pull, true)
    }

    /// Read access to the context, for report rendering and tests.
    pub fn context(&self) -> &ProjectContext<L, R> {
        &self.ctx
    }

    /// Hands the context back once the service is done.
    pub fn into_context(self) -> ProjectContext<L, R> {
        self.ctx
    }

    fn item_sync(
        &mut self,
        direction: SyncDirection,
        overwrite: bool,
    ) -> StoreResult<ItemSyncReport> {
        let selection = taggable_items(self.selection.current_selection());
        sync_selection(&mut self.ctx, &selection, direction, overwrite)
    }
}
