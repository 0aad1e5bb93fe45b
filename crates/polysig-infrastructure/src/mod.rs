//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the dispatch registry and the
//! singleton manager.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML and environment configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Builds a configured [`bootstrap::CoreContext`] |
//! | [`error_ext`] | Context helpers mapping foreign errors into the domain taxonomy |
//! | [`constants`] | Centralized configuration constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{CoreContext, CoreInitializer, init_core};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
