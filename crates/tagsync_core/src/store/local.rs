//! Local editorial tag registry contract and in-memory implementation.
//!
//! # Responsibility
//! - Expose the host tool's project vocabulary and per-item tag
//!   assignments through a narrow interface.
//! - Keep assignment mutation (add/remove on an item) separate from
//!   vocabulary membership.
//!
//! # Invariants
//! - `create_tag` returns a detached tag; it joins nothing until a
//!   follow-up call attaches it.
//! - Removing a tag from an item never touches the project vocabulary.
//! - Listing order is insertion order, matching the host tool's bins.

use crate::model::item::ItemId;
use crate::model::tag::{LocalTag, LocalTagId};
use crate::store::StoreResult;
use std::collections::BTreeMap;

/// Interface the sync core consumes from the editorial tool.
pub trait LocalStore {
    /// Lists every tag registered in the project vocabulary.
    fn list_project_tags(&self) -> StoreResult<Vec<LocalTag>>;
    /// Lists the tags currently assigned to one timeline item.
    fn list_item_tags(&self, item: ItemId) -> StoreResult<Vec<LocalTag>>;
    /// Creates a detached tag object owned by the local store.
    fn create_tag(&mut self, name: &str) -> StoreResult<LocalTag>;
    /// Assigns a tag to a timeline item.
    fn add_tag_to_item(&mut self, item: ItemId, tag: &LocalTag) -> StoreResult<()>;
    /// Removes one tag assignment from a timeline item. Absent tags are a
    /// no-op, matching the host tool's behavior.
    fn remove_tag_from_item(&mut self, item: ItemId, tag: LocalTagId) -> StoreResult<()>;
    /// Registers a tag in the project vocabulary.
    fn insert_tag_into_vocabulary(&mut self, tag: &LocalTag) -> StoreResult<()>;
}

/// Deterministic in-memory registry used by tests and the smoke CLI.
#[derive(Debug, Default)]
pub struct InMemoryLocalStore {
    vocabulary: Vec<LocalTag>,
    item_tags: BTreeMap<ItemId, Vec<LocalTag>>,
}

impl InMemoryLocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a vocabulary tag directly, bypassing the trait surface.
    pub fn seed_vocabulary_tag(&mut self, name: &str) -> LocalTag {
        let tag = LocalTag::new(name);
        self.vocabulary.push(tag.clone());
        tag
    }

    /// Seeds an item assignment directly, inserting into the vocabulary
    /// too when the name is not registered yet.
    pub fn seed_item_tag(&mut self, item: ItemId, name: &str) -> LocalTag {
        let tag = LocalTag::new(name);
        if !self.vocabulary.iter().any(|known| known.name == name) {
            self.vocabulary.push(tag.clone());
        }
        self.item_tags.entry(item).or_default().push(tag.clone());
        tag
    }
}

impl LocalStore for InMemoryLocalStore {
    fn list_project_tags(&self) -> StoreResult<Vec<LocalTag>> {
        Ok(self.vocabulary.clone())
    }

    fn list_item_tags(&self, item: ItemId) -> StoreResult<Vec<LocalTag>> {
        Ok(self.item_tags.get(&item).cloned().unwrap_or_default())
    }

    fn create_tag(&mut self, name: &str) -> StoreResult<LocalTag> {
        Ok(LocalTag::new(name))
    }

    fn add_tag_to_item(&mut self, item: ItemId, tag: &LocalTag) -> StoreResult<()> {
        let assigned = self.item_tags.entry(item).or_default();
        if !assigned.iter().any(|existing| existing.id == tag.id) {
            assigned.push(tag.clone());
        }
        Ok(())
    }

    fn remove_tag_from_item(&mut self, item: ItemId, tag: LocalTagId) -> StoreResult<()> {
        if let Some(assigned) = self.item_tags.get_mut(&item) {
            assigned.retain(|existing| existing.id != tag);
        }
        Ok(())
    }

    fn insert_tag_into_vocabulary(&mut self, tag: &LocalTag) -> StoreResult<()> {
        if !self.vocabulary.iter().any(|existing| existing.id == tag.id) {
            self.vocabulary.push(tag.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryLocalStore, LocalStore};
    use crate::model::item::TimelineItem;

    #[test]
    fn created_tags_stay_detached_until_attached() {
        let mut store = InMemoryLocalStore::new();
        let item = TimelineItem::clip("AB_010");

        let tag = store.create_tag("approved").unwrap();
        assert!(store.list_project_tags().unwrap().is_empty());
        assert!(store.list_item_tags(item.id).unwrap().is_empty());

        store.add_tag_to_item(item.id, &tag).unwrap();
        store.insert_tag_into_vocabulary(&tag).unwrap();
        assert_eq!(store.list_item_tags(item.id).unwrap(), vec![tag.clone()]);
        assert_eq!(store.list_project_tags().unwrap(), vec![tag]);
    }

    #[test]
    fn remove_is_a_no_op_for_absent_assignments() {
        let mut store = InMemoryLocalStore::new();
        let item = TimelineItem::clip("AB_010");
        let kept = store.seed_item_tag(item.id, "wip");
        let detached = store.create_tag("ghost").unwrap();

        store.remove_tag_from_item(item.id, detached.id).unwrap();
        assert_eq!(store.list_item_tags(item.id).unwrap(), vec![kept]);
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let mut store = InMemoryLocalStore::new();
        store.seed_vocabulary_tag("zulu");
        store.seed_vocabulary_tag("alpha");
        let names: Vec<String> = store
            .list_project_tags()
            .unwrap()
            .into_iter()
            .map(|tag| tag.name)
            .collect();
        assert_eq!(names, vec!["zulu".to_string(), "alpha".to_string()]);
    }
}
