//! Typed domain records shared across the sync core.
//!
//! # Responsibility
//! - Define explicit value types for both stores' records.
//! - Keep sync identity rules (name equality) in one place.
//!
//! # Invariants
//! - Sync identity for tags is exact, case-sensitive name equality.
//! - Local and remote tags stay distinct types even when names match.

pub mod item;
pub mod shot;
pub mod tag;
