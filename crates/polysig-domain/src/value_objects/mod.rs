//! Domain Value Objects
//!
//! Immutable value objects describing calls and overloads. They carry no
//! behaviour beyond inspection and formatting.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeTag`] | Identity token for a concrete runtime type |
//! | [`Value`] | Dynamically typed argument or return value |
//! | [`Signature`] | Ordered `(name, type)` parameter list of one overload |
//! | [`CallArgs`] | Positional, keyword and receiver values of one call |
//! | [`Invocation`] | A call paired with the signature it matched |

/// Call argument lists
pub mod arguments;
/// Resolved call views
pub mod invocation;
/// Overload signatures
pub mod signature;
/// Runtime type identity
pub mod type_tag;
/// Dynamically typed values
pub mod value;

pub use arguments::CallArgs;
pub use invocation::Invocation;
pub use signature::{Param, Signature};
pub use type_tag::TypeTag;
pub use value::Value;
