//! Per-item tag reconciliation.
//!
//! # Responsibility
//! - Align each selected timeline item's tags with its resolved shot's
//!   tags, in one of four direction/overwrite modes.
//! - Keep item failures independent: a skipped item never aborts the batch.
//!
//! # Invariants
//! - Shots and the remote vocabulary are fetched once per batch; per-item
//!   work resolves against those snapshots.
//! - A tag created for one item is reused by later items in the same batch.
//! - Overwrite clears assignments only; tag definitions survive in both
//!   vocabularies.
//! - Items are processed strictly sequentially, fully synced before the
//!   next begins.

use crate::context::ProjectContext;
use crate::model::item::TimelineItem;
use crate::model::shot::ShotRecord;
use crate::model::tag::RemoteTag;
use crate::store::local::LocalStore;
use crate::store::record::{
    add_shot_tags, clear_shot_tags, create_project_tag, fetch_project_shots, fetch_project_tags,
};
use crate::store::remote::RemoteStore;
use crate::store::StoreResult;
use crate::sync::filter::{filter_tags, is_reserved_name};
use crate::sync::resolve::{resolve_shot, ResolveError};
use crate::sync::{ItemSyncReport, SkipReason, SkippedItem, SyncDirection};
use log::{debug, error, info};

/// Reconciles every selected item against its remote shot.
///
/// Resolution failures are logged, recorded in the report, and skipped
/// without mutating anything for that item. Store failures abort the
/// remaining batch; earlier items' mutations stand.
pub fn sync_selection<L: LocalStore, R: RemoteStore>(
    ctx: &mut ProjectContext<L, R>,
    selection: &[TimelineItem],
    direction: SyncDirection,
    overwrite: bool,
) -> StoreResult<ItemSyncReport> {
    let shots = fetch_project_shots(&ctx.remote, &ctx.project)?;
    let mut remote_vocabulary = fetch_project_tags(&ctx.remote, &ctx.project)?;
    let mut report = ItemSyncReport::default();

    for item in selection {
        let shot = match resolve_shot(&item.name, &shots) {
            Ok(shot) => shot,
            Err(err) => {
                let reason = match err {
                    ResolveError::NamingConvention { .. } => SkipReason::BadName,
                    ResolveError::ShotNotFound { .. } => SkipReason::NoMatch,
                };
                error!(
                    "event=item_skipped module=sync project={} item={} error={}",
                    ctx.project.name, item.name, err
                );
                report.skipped.push(SkippedItem {
                    item_name: item.name.clone(),
                    reason,
                });
                continue;
            }
        };

        match direction {
            SyncDirection::Push => {
                push_item_tags(ctx, item, shot, &mut remote_vocabulary, overwrite)?;
            }
            SyncDirection::Pull => pull_item_tags(ctx, item, shot, overwrite)?,
        }
        report.synced.push(item.name.clone());
    }

    info!(
        "event=item_sync module=sync status=ok project={} direction={} overwrite={} synced={} skipped={}",
        ctx.project.name,
        direction,
        overwrite,
        report.synced.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Writes the item's filtered local tags onto its shot.
///
/// Find-or-create consults the batch-cached remote vocabulary; a created
/// tag joins the cache so the next item with the same name reuses it.
fn push_item_tags<L: LocalStore, R: RemoteStore>(
    ctx: &mut ProjectContext<L, R>,
    item: &TimelineItem,
    shot: &ShotRecord,
    remote_vocabulary: &mut Vec<RemoteTag>,
    overwrite: bool,
) -> StoreResult<()> {
    if overwrite {
        clear_shot_tags(&mut ctx.remote, shot.id)?;
        debug!(
            "event=shot_tags_cleared module=sync project={} shot={}",
            ctx.project.name, shot.code
        );
    }

    let local_tags: Vec<_> = filter_tags(ctx.local.list_item_tags(item.id)?).collect();
    let mut assigned = Vec::with_capacity(local_tags.len());
    for local_tag in &local_tags {
        let known = remote_vocabulary
            .iter()
            .find(|remote| remote.name == local_tag.name)
            .cloned();
        let remote_tag = match known {
            Some(tag) => tag,
            None => {
                let created = create_project_tag(&mut ctx.remote, &ctx.project, &local_tag.name)?;
                debug!(
                    "event=remote_tag_created module=sync project={} tag={}",
                    ctx.project.name, created.name
                );
                remote_vocabulary.push(created.clone());
                created
            }
        };
        assigned.push(remote_tag);
    }

    // One additive update per item, mirroring the single batched write the
    // tracking DB API expects.
    add_shot_tags(&mut ctx.remote, shot.id, &assigned)?;
    debug!(
        "event=tags_pushed module=sync project={} item={} shot={} count={}",
        ctx.project.name,
        item.name,
        shot.code,
        assigned.len()
    );
    Ok(())
}

/// Writes the shot's tags onto the item, creating local tags as needed.
///
/// `shot.tags` is the batch-start snapshot; pull never re-reads the shot.
fn pull_item_tags<L: LocalStore, R: RemoteStore>(
    ctx: &mut ProjectContext<L, R>,
    item: &TimelineItem,
    shot: &ShotRecord,
    overwrite: bool,
) -> StoreResult<()> {
    if overwrite {
        let assigned: Vec<_> = filter_tags(ctx.local.list_item_tags(item.id)?).collect();
        for tag in &assigned {
            ctx.local.remove_tag_from_item(item.id, tag.id)?;
        }
        debug!(
            "event=item_tags_cleared module=sync project={} item={} count={}",
            ctx.project.name,
            item.name,
            assigned.len()
        );
    }

    let mut local_names: Vec<String> = filter_tags(ctx.local.list_item_tags(item.id)?)
        .map(|tag| tag.name)
        .collect();

    for remote_tag in &shot.tags {
        if is_reserved_name(&remote_tag.name) {
            continue;
        }
        if local_names.iter().any(|name| name == &remote_tag.name) {
            continue;
        }

        let new_tag = ctx.local.create_tag(&remote_tag.name)?;
        ctx.local.add_tag_to_item(item.id, &new_tag)?;
        local_names.push(new_tag.name.clone());
        debug!(
            "event=tag_pulled module=sync project={} item={} tag={}",
            ctx.project.name, item.name, new_tag.name
        );

        let vocabulary_has_name = filter_tags(ctx.local.list_project_tags()?)
            .any(|known| known.name == new_tag.name);
        if !vocabulary_has_name {
            ctx.local.insert_tag_into_vocabulary(&new_tag)?;
            debug!(
                "event=vocabulary_tag_created module=sync side=local project={} tag={}",
                ctx.project.name, new_tag.name
            );
        }
    }

    Ok(())
}
