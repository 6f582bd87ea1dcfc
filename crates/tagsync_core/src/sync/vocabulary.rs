//! Project vocabulary reconciliation.
//!
//! # Responsibility
//! - Bring both stores' project tag vocabularies to the union of names
//!   present in either.
//!
//! # Invariants
//! - Strictly additive: no tag is ever removed from either store.
//! - Local tags pass through the reserved filter before comparison; remote
//!   tags do not (observed behavior kept as-is, see DESIGN.md).
//! - Matching is exact name equality, O(n*m) scans.

use crate::context::ProjectContext;
use crate::store::local::LocalStore;
use crate::store::record::{create_project_tag, fetch_project_tags};
use crate::store::remote::RemoteStore;
use crate::store::StoreResult;
use crate::sync::filter::filter_tags;
use crate::sync::VocabularySyncReport;
use log::{debug, info};

/// Reconciles the project tag vocabularies of both stores.
///
/// After a successful call, every tag name present in either store before
/// the call is present in both. Creation order within each side follows
/// the source store's listing order.
///
/// # Errors
/// Store failures propagate immediately; tags created before the failure
/// are not rolled back.
pub fn sync_project_vocabulary<L: LocalStore, R: RemoteStore>(
    ctx: &mut ProjectContext<L, R>,
) -> StoreResult<VocabularySyncReport> {
    let local_tags: Vec<_> = filter_tags(ctx.local.list_project_tags()?).collect();
    let remote_tags = fetch_project_tags(&ctx.remote, &ctx.project)?;

    let local_only: Vec<_> = local_tags
        .iter()
        .filter(|local| !remote_tags.iter().any(|remote| remote.name == local.name))
        .collect();
    let remote_only: Vec<_> = remote_tags
        .iter()
        .filter(|remote| !local_tags.iter().any(|local| local.name == remote.name))
        .collect();

    let mut report = VocabularySyncReport::default();

    for local_tag in local_only {
        create_project_tag(&mut ctx.remote, &ctx.project, &local_tag.name)?;
        debug!(
            "event=vocabulary_tag_created module=sync side=remote project={} tag={}",
            ctx.project.name, local_tag.name
        );
        report.created_remote.push(local_tag.name.clone());
    }

    for remote_tag in remote_only {
        let tag = ctx.local.create_tag(&remote_tag.name)?;
        ctx.local.insert_tag_into_vocabulary(&tag)?;
        debug!(
            "event=vocabulary_tag_created module=sync side=local project={} tag={}",
            ctx.project.name, remote_tag.name
        );
        report.created_local.push(remote_tag.name.clone());
    }

    info!(
        "event=vocabulary_sync module=sync status=ok project={} created_remote={} created_local={}",
        ctx.project.name,
        report.created_remote.len(),
        report.created_local.len()
    );
    Ok(report)
}
