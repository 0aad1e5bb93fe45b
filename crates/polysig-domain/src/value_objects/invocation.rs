//! The view of a resolved call handed to an implementation

use std::any::Any;

use super::{CallArgs, Signature, TypeTag, Value};
use crate::error::{Error, Result};

/// A call that has been matched to one signature
///
/// Implementations receive the original arguments untouched. Parameters
/// can be read by name whether they were passed positionally or by keyword.
///
/// # Example
///
/// ```
/// use polysig_domain::value_objects::{CallArgs, Invocation, Signature};
///
/// let signature = Signature::new().param::<String>("a").param::<i64>("b");
/// let args = CallArgs::new().arg("x").kwarg("b", 5_i64);
/// let invocation = Invocation::new("f", &signature, &args);
///
/// assert_eq!(invocation.get::<String>("a").unwrap(), "x");
/// assert_eq!(*invocation.get::<i64>("b").unwrap(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    operation: &'a str,
    signature: &'a Signature,
    args: &'a CallArgs,
}

impl<'a> Invocation<'a> {
    /// Pair a call with the signature it matched
    pub fn new(operation: &'a str, signature: &'a Signature, args: &'a CallArgs) -> Self {
        Self {
            operation,
            signature,
            args,
        }
    }

    /// Name of the invoked operation
    pub fn operation(&self) -> &'a str {
        self.operation
    }

    /// The matched signature
    pub fn signature(&self) -> &'a Signature {
        self.signature
    }

    /// The arguments exactly as supplied
    pub fn args(&self) -> &'a CallArgs {
        self.args
    }

    /// The implicit receiver, if the call had one
    pub fn receiver(&self) -> Option<&'a Value> {
        self.args.receiver()
    }

    /// Borrow the receiver as a `T`
    pub fn receiver_as<T: Any>(&self) -> Option<&'a T> {
        self.receiver().and_then(Value::downcast_ref::<T>)
    }

    /// Positional values with the receiver, when present, in front
    pub fn bound_positional(&self) -> Vec<&'a Value> {
        self.args
            .receiver()
            .into_iter()
            .chain(self.args.positional_values())
            .collect()
    }

    /// Value bound to parameter `name`
    pub fn value(&self, name: &str) -> Option<&'a Value> {
        let index = self.signature.position_of(name)?;
        self.args
            .positional_values()
            .get(index)
            .or_else(|| self.args.keyword(name))
    }

    /// Value bound to parameter `name`, borrowed as a `T`
    pub fn get<T: Any>(&self, name: &str) -> Result<&'a T> {
        let value = self
            .value(name)
            .ok_or_else(|| Error::missing_argument(name))?;
        value.downcast_ref::<T>().ok_or_else(|| {
            Error::argument_type(
                name,
                TypeTag::of::<T>().to_string(),
                value.type_tag().to_string(),
            )
        })
    }
}
