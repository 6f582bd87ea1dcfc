//! Explicit per-invocation project context.
//!
//! # Responsibility
//! - Carry the current project and both store handles into every
//!   reconciler operation.
//!
//! # Invariants
//! - No reconciler reaches for ambient global state; everything it touches
//!   arrives through this value.

use crate::store::local::LocalStore;
use crate::store::remote::RemoteStore;
use serde::{Deserialize, Serialize};

/// Reference to the project both stores are scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    /// Remote tracking-DB project id.
    pub id: i64,
    /// Human-readable project name, used only for logging.
    pub name: String,
}

impl ProjectRef {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Everything one sync invocation operates on.
///
/// Owns the store handles for the duration of the invocation; callers get
/// them back by field access once the operation returns.
pub struct ProjectContext<L: LocalStore, R: RemoteStore> {
    /// Project both stores are scoped to.
    pub project: ProjectRef,
    /// Local editorial tag registry.
    pub local: L,
    /// Remote production-tracking database.
    pub remote: R,
}

impl<L: LocalStore, R: RemoteStore> ProjectContext<L, R> {
    pub fn new(project: ProjectRef, local: L, remote: R) -> Self {
        Self {
            project,
            local,
            remote,
        }
    }
}
