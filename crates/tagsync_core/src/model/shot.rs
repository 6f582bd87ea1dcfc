//! Remote shot record.
//!
//! # Responsibility
//! - Model the tracking-DB shot entity the resolver matches against.
//!
//! # Invariants
//! - `code` and `sequence` together address a shot under the
//!   `<sequence>_<shot>` naming convention.
//! - `tags` mirrors the shot's project-tag assignment field at fetch time;
//!   it is a snapshot, not a live view.

use crate::model::tag::RemoteTag;
use serde::{Deserialize, Serialize};

/// Record id assigned by the remote tracking database.
pub type ShotId = i64;

/// One unit of editorial work in the remote tracking database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Remote record id.
    pub id: ShotId,
    /// Shot code, the second half of the naming convention.
    pub code: String,
    /// Parent sequence name, the first half of the naming convention.
    pub sequence: String,
    /// Project-tag references assigned to this shot.
    pub tags: Vec<RemoteTag>,
}
