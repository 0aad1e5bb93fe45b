//! Dispatch behaviour knobs

use serde::{Deserialize, Serialize};

/// What to do when more than one signature accepts a call
///
/// Registration rejects identical type tuples, but keyword calls can still
/// match several signatures whose parameters are the same types in a
/// different order, e.g. `(a: i64, b: String)` and `(b: String, a: i64)`
/// both accept `a=1, b="x"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Use the earliest registered match and log a warning
    #[default]
    FirstMatch,
    /// Fail the call with `AmbiguousCall`
    Reject,
}

/// Options applied by a [`DispatchRegistry`](super::DispatchRegistry)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Ambiguity handling
    pub ambiguity: AmbiguityPolicy,
}

impl DispatchOptions {
    /// Options with the given ambiguity policy
    pub fn with_ambiguity(ambiguity: AmbiguityPolicy) -> Self {
        Self { ambiguity }
    }
}
