//! Orchestration layer binding sync operations to invocation triggers.
//!
//! # Responsibility
//! - Wire filter, resolver and reconcilers into zero-argument entry points.
//! - Keep host-tool specifics (menus, dialogs) out of the core.

pub mod sync_service;
