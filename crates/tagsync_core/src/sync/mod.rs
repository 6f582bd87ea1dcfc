//! Tag synchronization engine.
//!
//! # Responsibility
//! - Reconcile project vocabularies and per-item tag assignments between
//!   the local registry and the remote tracking database.
//! - Keep item-level failures recoverable and store failures batch-fatal.
//!
//! # Invariants
//! - Nothing in this module ever deletes a tag definition from either
//!   project vocabulary; overwrite modes clear assignments only.
//! - Exactly one data direction per invocation; vocabulary sync is the
//!   only bidirectional operation.

pub mod filter;
pub mod items;
pub mod resolve;
pub mod vocabulary;

use std::fmt::{Display, Formatter};

/// Direction of a per-item sync invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    /// Local tags are written toward the remote store.
    Push,
    /// Remote tags are written toward the local store.
    Pull,
}

impl Display for SyncDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Push => write!(f, "push"),
            Self::Pull => write!(f, "pull"),
        }
    }
}

/// Outcome of project vocabulary reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularySyncReport {
    /// Tag names created in the remote store.
    pub created_remote: Vec<String>,
    /// Tag names created in the local store.
    pub created_local: Vec<String>,
}

impl VocabularySyncReport {
    /// Returns whether both stores already agreed.
    pub fn is_noop(&self) -> bool {
        self.created_remote.is_empty() && self.created_local.is_empty()
    }
}

/// Why one selection item was skipped without mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Item name does not decompose into `<sequence>_<shot>`.
    BadName,
    /// No remote shot matches the decomposed name.
    NoMatch,
}

/// One skipped selection entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    pub item_name: String,
    pub reason: SkipReason,
}

/// Outcome of one per-item sync batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSyncReport {
    /// Item names synced successfully, in selection order.
    pub synced: Vec<String>,
    /// Items skipped without mutation, in selection order.
    pub skipped: Vec<SkippedItem>,
}

impl ItemSyncReport {
    /// Returns whether every selected item synced.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
