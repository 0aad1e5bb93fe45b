//! Application Layer - polysig
//!
//! The two runtime mechanisms of polysig, independent of each other:
//!
//! - [`dispatch`]: a registry of operations with several implementations
//!   each, selected per call by the runtime types of the arguments.
//! - [`lifecycle`]: a single-flight singleton manager with an optional
//!   asynchronous initialization step.
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `polysig-domain`: for value objects, ports, and the error taxonomy
//! - Pure Rust libraries for async, logging, and lock-free snapshots

pub mod dispatch;
pub mod lifecycle;

pub use dispatch::{AmbiguityPolicy, DispatchOptions, DispatchRegistry, Dispatcher};
pub use lifecycle::{SingletonManager, SingletonOptions, SingletonState};
