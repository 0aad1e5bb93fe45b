//! # Domain Layer
//!
//! Core types shared by the dispatch engine and the singleton lifecycle
//! manager. This crate holds no state and performs no I/O.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`value_objects`] | Type tags, values, signatures, call arguments |
//! | [`ports`] | Traits implemented by overload handlers and managed types |

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{AsyncInit, InitOutput, OverloadHandler, SharedHandler};
pub use value_objects::{CallArgs, Invocation, Param, Signature, TypeTag, Value};
