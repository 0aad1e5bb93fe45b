//! Core bootstrap
//!
//! Turns an [`AppConfig`] into a [`CoreContext`]: the configured singleton
//! manager plus a factory for dispatch registries carrying the configured
//! ambiguity policy.
//!
//! ```text
//! AppConfig ─> CoreInitializer ─┬─> init_logging (optional)
//!                               └─> CoreContext ─┬─> Arc<SingletonManager>
//!                                                └─> dispatch_registry()
//! ```
//!
//! ## Usage
//!
//! ```
//! use polysig_infrastructure::bootstrap::init_core;
//! use polysig_infrastructure::config::AppConfig;
//!
//! let core = init_core(AppConfig::default()).unwrap();
//! let registry = core.dispatch_registry();
//! assert!(registry.is_empty());
//! assert!(core.singletons().is_empty());
//! ```

use std::sync::Arc;

use polysig_application::dispatch::DispatchRegistry;
use polysig_application::lifecycle::SingletonManager;
use polysig_domain::error::Result;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::logging::init_logging;

/// Configured runtime pieces shared by an application
#[derive(Debug, Clone)]
pub struct CoreContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    singletons: Arc<SingletonManager>,
}

impl CoreContext {
    /// Singleton manager built with the configured options
    pub fn singletons(&self) -> Arc<SingletonManager> {
        Arc::clone(&self.singletons)
    }

    /// A new, empty dispatch registry with the configured options
    pub fn dispatch_registry(&self) -> DispatchRegistry {
        DispatchRegistry::with_options(self.config.dispatch.to_options())
    }
}

/// Builds a [`CoreContext`], optionally installing the global subscriber
#[derive(Debug, Clone)]
pub struct CoreInitializer {
    config: AppConfig,
    install_logging: bool,
}

impl CoreInitializer {
    /// Create an initializer that also installs logging
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            install_logging: true,
        }
    }

    /// Whether [`initialize`](Self::initialize) installs the global subscriber
    pub fn with_logging(mut self, install_logging: bool) -> Self {
        self.install_logging = install_logging;
        self
    }

    /// Install logging if requested and build the context
    pub fn initialize(self) -> Result<CoreContext> {
        if self.install_logging {
            init_logging(&self.config.logging)?;
        }
        let context = build_context(self.config);
        info!(
            ambiguity = ?context.config.dispatch.ambiguity,
            slow_init_warn_ms = context.config.singleton.slow_init_warn_ms,
            "Core context initialized"
        );
        Ok(context)
    }
}

/// Build a [`CoreContext`] without touching the global subscriber
pub fn init_core(config: AppConfig) -> Result<CoreContext> {
    CoreInitializer::new(config).with_logging(false).initialize()
}

fn build_context(config: AppConfig) -> CoreContext {
    let singletons = Arc::new(SingletonManager::with_options(config.singleton.to_options()));
    debug!(options = ?singletons.options(), "Created singleton manager");
    CoreContext {
        config: Arc::new(config),
        singletons,
    }
}
