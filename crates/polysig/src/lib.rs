//! # polysig
//!
//! Two small runtime mechanisms behind one facade:
//!
//! - **Overload dispatch**: register several implementations of one
//!   operation name, each with its own ordered, named, typed parameter list,
//!   and have calls routed by the runtime types of positional and keyword
//!   arguments. Duplicate type lists are rejected at registration.
//! - **Async singletons**: lazily construct exactly one shared instance per
//!   type, with an optional asynchronous initialization step, even under
//!   concurrent first access.
//!
//! ## Example
//!
//! ```
//! use polysig::{CallArgs, DispatchRegistry, Signature, Value};
//!
//! let mut registry = DispatchRegistry::new();
//! registry
//!     .register("area", Signature::new().param::<f64>("side"), |call| {
//!         let side = call.get::<f64>("side")?;
//!         Ok(Value::from(side * side))
//!     })
//!     .unwrap();
//! registry
//!     .register(
//!         "area",
//!         Signature::new().param::<f64>("width").param::<f64>("height"),
//!         |call| Ok(Value::from(call.get::<f64>("width")? * call.get::<f64>("height")?)),
//!     )
//!     .unwrap();
//!
//! let square = registry.invoke("area", &CallArgs::new().arg(3.0_f64)).unwrap();
//! assert_eq!(square.downcast_ref::<f64>(), Some(&9.0));
//!
//! let rect = CallArgs::new().arg(2.0_f64).kwarg("height", 5.0_f64);
//! let rect = registry.invoke("area", &rect).unwrap();
//! assert_eq!(rect.downcast_ref::<f64>(), Some(&10.0));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - type tags, values, signatures, call arguments, ports, errors
//! - `application` - dispatch registry and singleton lifecycle manager
//! - `infrastructure` - configuration, logging, bootstrap

/// Domain layer - value objects, ports and the error taxonomy
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use polysig_domain::*;
}

/// Application layer - dispatch and singleton lifecycle
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use polysig_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use polysig_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the two runtime mechanisms at the crate root
pub use application::{
    AmbiguityPolicy, DispatchOptions, DispatchRegistry, Dispatcher, SingletonManager,
    SingletonOptions, SingletonState,
};

// Re-export bootstrap entry points at the crate root
pub use infrastructure::{AppConfig, ConfigLoader, CoreContext, CoreInitializer, init_core};
