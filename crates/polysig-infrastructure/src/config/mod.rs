//! Configuration
//!
//! | Source | Precedence |
//! |--------|------------|
//! | `AppConfig::default()` | lowest |
//! | `polysig.toml` | overrides defaults |
//! | `POLYSIG__SECTION__KEY` environment variables | highest |

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, DispatchConfig, LoggingConfig, SingletonConfig};
