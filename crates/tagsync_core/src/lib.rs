//! Core sync logic for reconciling editorial-timeline tags with a
//! production-tracking database.
//! This crate is the single source of truth for the sync invariants.

pub mod context;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod sync;

pub use context::{ProjectContext, ProjectRef};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{ItemId, ItemKind, TimelineItem};
pub use model::shot::{ShotId, ShotRecord};
pub use model::tag::{LocalTag, LocalTagId, RemoteTag, RemoteTagId};
pub use service::sync_service::{taggable_items, SelectionProvider, TagSyncService};
pub use store::local::{InMemoryLocalStore, LocalStore};
pub use store::remote::{FindFilter, InMemoryRemoteStore, RemoteStore, UpdateMode};
pub use store::{StoreError, StoreResult};
pub use sync::filter::{filter_tags, is_reserved_name, RESERVED_TAG_MARKERS};
pub use sync::items::sync_selection;
pub use sync::resolve::{resolve_shot, split_item_name, ResolveError};
pub use sync::vocabulary::sync_project_vocabulary;
pub use sync::{ItemSyncReport, SkipReason, SkippedItem, SyncDirection, VocabularySyncReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
