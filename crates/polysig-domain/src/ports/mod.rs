//! Domain Port Interfaces
//!
//! Contracts that callers implement to plug behaviour into the core:
//!
//! - **handler** - implementations bound to an overload signature
//! - **initializer** - asynchronous post-construction step of managed singletons

/// Overload implementation contract
pub mod handler;
/// Asynchronous singleton initialization contract
pub mod initializer;

pub use handler::{OverloadHandler, SharedHandler};
pub use initializer::{AsyncInit, InitOutput};
