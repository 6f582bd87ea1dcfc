//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise the sync core end-to-end against the in-memory stores.
//! - Keep output deterministic for quick local sanity checks.

use tagsync_core::{
    InMemoryLocalStore, InMemoryRemoteStore, ProjectContext, ProjectRef, TagSyncService,
    TimelineItem,
};

fn main() {
    println!("tagsync_core version={}", tagsync_core::core_version());

    let mut local = InMemoryLocalStore::new();
    let mut remote = InMemoryRemoteStore::new();

    let item = TimelineItem::clip("AB_010");
    local.seed_item_tag(item.id, "approved");
    local.seed_vocabulary_tag("wip");
    let review_id = remote.seed_project_tag(1, "review");
    remote.seed_shot(1, "AB", "010", &[(review_id, "review")]);

    let ctx = ProjectContext::new(ProjectRef::new(1, "demo"), local, remote);
    let mut service = TagSyncService::new(ctx, vec![item]);

    match service.sync_project_tags() {
        Ok(report) => println!(
            "vocabulary sync: created_remote={:?} created_local={:?}",
            report.created_remote, report.created_local
        ),
        Err(err) => {
            eprintln!("vocabulary sync failed: {err}");
            std::process::exit(1);
        }
    }

    match service.push_tags_add() {
        Ok(report) => println!(
            "push (add): synced={:?} skipped={}",
            report.synced,
            report.skipped.len()
        ),
        Err(err) => {
            eprintln!("push failed: {err}");
            std::process::exit(1);
        }
    }
}
