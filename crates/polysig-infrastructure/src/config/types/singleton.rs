//! Singleton manager configuration types

use std::time::Duration;

use polysig_application::lifecycle::SingletonOptions;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SLOW_INIT_WARN_MS;

/// Singleton manager configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingletonConfig {
    /// Initializer duration above which a warning is logged, in
    /// milliseconds. `0` disables the warning.
    pub slow_init_warn_ms: u64,
}

impl Default for SingletonConfig {
    fn default() -> Self {
        Self {
            slow_init_warn_ms: DEFAULT_SLOW_INIT_WARN_MS,
        }
    }
}

impl SingletonConfig {
    /// Manager options for this configuration
    pub fn to_options(&self) -> SingletonOptions {
        match self.slow_init_warn_ms {
            0 => SingletonOptions::default(),
            ms => SingletonOptions::with_slow_init_threshold(Duration::from_millis(ms)),
        }
    }
}
