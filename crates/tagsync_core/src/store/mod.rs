//! Store adapter contracts and reference implementations.
//!
//! # Responsibility
//! - Define the narrow interfaces the sync core consumes from both stores.
//! - Validate loosely-typed remote records into typed values at this
//!   boundary, never deeper in the core.
//!
//! # Invariants
//! - Store errors are batch-fatal; they propagate to the orchestrator
//!   instead of being swallowed per item.
//! - In-memory implementations are deterministic and order-preserving so
//!   tests can substitute them for the real adapters.

pub mod local;
pub mod record;
pub mod remote;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by either store adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Entity type is not known to the remote store.
    UnknownEntityType(String),
    /// Update target does not exist remotely.
    RecordNotFound { entity_type: String, id: i64 },
    /// Remote record failed boundary validation (missing/mistyped field).
    InvalidRecord(String),
    /// Transport-level failure from a real adapter.
    Transport(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEntityType(entity_type) => {
                write!(f, "unknown entity type `{entity_type}`")
            }
            Self::RecordNotFound { entity_type, id } => {
                write!(f, "{entity_type} record {id} not found")
            }
            Self::InvalidRecord(message) => write!(f, "invalid remote record: {message}"),
            Self::Transport(message) => write!(f, "store transport failure: {message}"),
        }
    }
}

impl Error for StoreError {}
