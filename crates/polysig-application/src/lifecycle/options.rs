//! Singleton manager knobs

use std::time::Duration;

/// Options applied by a [`SingletonManager`](super::SingletonManager)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingletonOptions {
    /// Initializers holding the construction lock longer than this are
    /// reported at `warn` level. `None` disables the report.
    pub slow_init_threshold: Option<Duration>,
}

impl SingletonOptions {
    /// Options warning about initializers slower than `threshold`
    pub fn with_slow_init_threshold(threshold: Duration) -> Self {
        Self {
            slow_init_threshold: Some(threshold),
        }
    }
}
