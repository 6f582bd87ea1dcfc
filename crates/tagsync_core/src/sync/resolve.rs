//! Timeline-item to shot resolution.
//!
//! # Responsibility
//! - Decompose item names under the `<sequence>_<shot>` convention.
//! - Locate the matching shot record in the project's shot list.
//!
//! # Invariants
//! - Exactly two underscore-separated parts are required; anything else
//!   fails the naming gate before any store access.
//! - First match wins on duplicate shot codes; no uniqueness validation
//!   here (known ambiguity, see DESIGN.md).

use crate::model::shot::ShotRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static ITEM_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^_]*)_([^_]*)$").expect("valid item name regex"));

/// Item-level resolution failure. Recoverable: the caller skips the item
/// and continues the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Name is not two underscore-separated parts.
    NamingConvention { item_name: String },
    /// Validly named, but no shot with that code under that sequence.
    ShotNotFound {
        item_name: String,
        sequence: String,
        shot: String,
    },
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NamingConvention { item_name } => write!(
                f,
                "item `{item_name}` is not composed of two parts separated by an underscore"
            ),
            Self::ShotNotFound {
                item_name,
                sequence,
                shot,
            } => write!(
                f,
                "item `{item_name}` has no matching shot (sequence `{sequence}`, code `{shot}`)"
            ),
        }
    }
}

impl Error for ResolveError {}

/// Splits an item name into its `(sequence, shot)` parts.
pub fn split_item_name(item_name: &str) -> Result<(&str, &str), ResolveError> {
    let captures = ITEM_NAME_RE
        .captures(item_name)
        .ok_or_else(|| ResolveError::NamingConvention {
            item_name: item_name.to_string(),
        })?;
    let sequence = captures.get(1).map_or("", |part| part.as_str());
    let shot = captures.get(2).map_or("", |part| part.as_str());
    Ok((sequence, shot))
}

/// Resolves an item name to the first shot whose code and sequence both
/// match. Scan order is the caller-provided list order.
pub fn resolve_shot<'a>(
    item_name: &str,
    shots: &'a [ShotRecord],
) -> Result<&'a ShotRecord, ResolveError> {
    let (sequence, shot) = split_item_name(item_name)?;
    shots
        .iter()
        .find(|record| record.code == shot && record.sequence == sequence)
        .ok_or_else(|| ResolveError::ShotNotFound {
            item_name: item_name.to_string(),
            sequence: sequence.to_string(),
            shot: shot.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{resolve_shot, split_item_name, ResolveError};
    use crate::model::shot::ShotRecord;

    fn shot(id: i64, sequence: &str, code: &str) -> ShotRecord {
        ShotRecord {
            id,
            code: code.to_string(),
            sequence: sequence.to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn two_part_names_split_cleanly() {
        assert_eq!(split_item_name("AB_010").unwrap(), ("AB", "010"));
    }

    #[test]
    fn one_and_three_part_names_fail_the_gate() {
        assert!(matches!(
            split_item_name("AB010"),
            Err(ResolveError::NamingConvention { .. })
        ));
        assert!(matches!(
            split_item_name("AB_01_0"),
            Err(ResolveError::NamingConvention { .. })
        ));
    }

    #[test]
    fn empty_parts_still_pass_the_split() {
        // Mirrors plain split-on-underscore semantics: "AB_" is two parts.
        assert_eq!(split_item_name("AB_").unwrap(), ("AB", ""));
        assert_eq!(split_item_name("_010").unwrap(), ("", "010"));
    }

    #[test]
    fn both_halves_must_match_a_shot() {
        let shots = vec![shot(1, "AB", "010"), shot(2, "CD", "010")];
        assert_eq!(resolve_shot("CD_010", &shots).unwrap().id, 2);
        assert!(matches!(
            resolve_shot("EF_010", &shots),
            Err(ResolveError::ShotNotFound { .. })
        ));
    }

    #[test]
    fn first_match_wins_on_duplicates() {
        let shots = vec![shot(1, "AB", "010"), shot(2, "AB", "010")];
        assert_eq!(resolve_shot("AB_010", &shots).unwrap().id, 1);
    }
}
