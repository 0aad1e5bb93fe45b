//! Dispatch configuration types

use polysig_application::dispatch::{AmbiguityPolicy, DispatchOptions};
use serde::{Deserialize, Serialize};

/// Dispatch configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// `first_match` or `reject`
    pub ambiguity: AmbiguityPolicy,
}

impl DispatchConfig {
    /// Registry options for this configuration
    pub fn to_options(&self) -> DispatchOptions {
        DispatchOptions::with_ambiguity(self.ambiguity)
    }
}
