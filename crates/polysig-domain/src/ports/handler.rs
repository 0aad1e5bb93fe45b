//! Overload implementation port

use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::{Invocation, Value};

/// An implementation bound to one signature of an operation
///
/// Any `Fn(&Invocation) -> Result<Value>` closure implements this trait.
///
/// # Example
///
/// ```
/// use polysig_domain::ports::OverloadHandler;
/// use polysig_domain::value_objects::{CallArgs, Invocation, Signature, Value};
///
/// let handler = |call: &Invocation<'_>| -> polysig_domain::Result<Value> {
///     Ok(Value::from(call.get::<i64>("n")? * 2))
/// };
///
/// let signature = Signature::new().param::<i64>("n");
/// let args = CallArgs::new().arg(21_i64);
/// let out = handler.handle(&Invocation::new("double", &signature, &args)).unwrap();
/// assert_eq!(out.downcast_ref::<i64>(), Some(&42));
/// ```
pub trait OverloadHandler: Send + Sync {
    /// Run the implementation against a resolved call
    fn handle(&self, invocation: &Invocation<'_>) -> Result<Value>;
}

impl<F> OverloadHandler for F
where
    F: Fn(&Invocation<'_>) -> Result<Value> + Send + Sync,
{
    fn handle(&self, invocation: &Invocation<'_>) -> Result<Value> {
        self(invocation)
    }
}

/// Shared handle to a bound implementation
pub type SharedHandler = Arc<dyn OverloadHandler>;
