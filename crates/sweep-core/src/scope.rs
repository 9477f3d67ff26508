//! Scope keys: visibility boundaries derived from level sequences.
//!
//! A scope key is the joined runtime ids of a (possibly truncated) level
//! sequence. The empty sequence yields the distinguished global key. All
//! visibility decisions compare keys; nothing ever re-walks the ambiance
//! that created a record.

use crate::ambiance::{Ambiance, Level};
use serde::{Deserialize, Serialize};

/// Separator between runtime ids inside a scope key. Runtime ids must not
/// contain it; the step executor guarantees that.
pub const SCOPE_SEPARATOR: char = '|';

/// Key of the zero-level scope, visible throughout one plan execution.
pub const GLOBAL_SCOPE_KEY: &str = "";

/// Join a level sequence into its scope key. Empty input yields
/// [`GLOBAL_SCOPE_KEY`].
pub fn scope_key(levels: &[Level]) -> String {
    levels
        .iter()
        .map(|l| l.runtime_id.as_str())
        .collect::<Vec<_>>()
        .join(&SCOPE_SEPARATOR.to_string())
}

/// Scope keys of every prefix of the ambiance, from the global key (depth 0)
/// through full depth, in increasing-depth order. Length is `depth + 1`.
pub fn visible_prefixes(ambiance: &Ambiance) -> Vec<String> {
    (0..=ambiance.depth())
        .map(|n| scope_key(&ambiance.levels()[..n]))
        .collect()
}

/// Where a published value is anchored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeSelector {
    /// Anchor at the producing node: the node itself and all of its
    /// descendants see the value.
    CurrentScope,
    /// Anchor at the plan execution root: visible from every branch.
    GlobalScope,
    /// Anchor at the nearest enclosing level carrying this group label.
    NamedGroup(String),
}
