//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "polysig.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "polysig";

/// Environment variable prefix for configuration
///
/// Variables are read as `POLYSIG__<SECTION>__<KEY>`.
pub const CONFIG_ENV_PREFIX: &str = "POLYSIG";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding an `EnvFilter` directive that overrides the
/// configured level
pub const LOG_ENV_VAR: &str = "POLYSIG_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "polysig";

// ============================================================================
// SINGLETON CONSTANTS
// ============================================================================

/// Initializer duration above which a warning is logged (milliseconds)
pub const DEFAULT_SLOW_INIT_WARN_MS: u64 = 1000;
