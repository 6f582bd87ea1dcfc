//! Reserved-tag filter.
//!
//! # Responsibility
//! - Exclude system-generated and auto-generated tags from any sync
//!   consideration.
//!
//! # Invariants
//! - Pure and order-preserving; filtering twice equals filtering once.
//! - Matching is substring containment, case-sensitive.

use crate::model::tag::LocalTag;

/// Name markers that exclude a tag from synchronization: the tracking
/// system's provenance marker plus the host tool's two auto-generated
/// tag families.
pub const RESERVED_TAG_MARKERS: [&str; 3] = ["shotguntype", "Transcode", "Nuke Project File"];

/// Returns whether a tag name is reserved and must never sync.
pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_TAG_MARKERS
        .iter()
        .any(|marker| name.contains(marker))
}

/// Lazily filters reserved tags out of a local tag sequence.
pub fn filter_tags<I>(tags: I) -> impl Iterator<Item = LocalTag>
where
    I: IntoIterator<Item = LocalTag>,
{
    tags.into_iter().filter(|tag| !is_reserved_name(&tag.name))
}

#[cfg(test)]
mod tests {
    use super::{filter_tags, is_reserved_name};
    use crate::model::tag::LocalTag;

    fn tags(names: &[&str]) -> Vec<LocalTag> {
        names.iter().map(|name| LocalTag::new(*name)).collect()
    }

    #[test]
    fn reserved_markers_match_by_containment() {
        assert!(is_reserved_name("shotguntype=Shot"));
        assert!(is_reserved_name("Transcode 1080p"));
        assert!(is_reserved_name("Nuke Project File v3"));
        assert!(!is_reserved_name("transcode"));
        assert!(!is_reserved_name("approved"));
    }

    #[test]
    fn filter_preserves_order_of_survivors() {
        let input = tags(&["zulu", "Transcode", "alpha", "shotguntype=Shot", "mike"]);
        let names: Vec<String> = filter_tags(input).map(|tag| tag.name).collect();
        assert_eq!(names, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let input = tags(&["approved", "Transcode", "wip"]);
        let once: Vec<LocalTag> = filter_tags(input).collect();
        let twice: Vec<LocalTag> = filter_tags(once.clone()).collect();
        assert_eq!(once, twice);
    }
}
