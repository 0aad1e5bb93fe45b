//! Main application configuration

use serde::{Deserialize, Serialize};

use super::dispatch::DispatchConfig;
use super::logging::LoggingConfig;
use super::singleton::SingletonConfig;

/// Root of the `polysig.toml` document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `[logging]` section
    pub logging: LoggingConfig,
    /// `[dispatch]` section
    pub dispatch: DispatchConfig,
    /// `[singleton]` section
    pub singleton: SingletonConfig,
}
