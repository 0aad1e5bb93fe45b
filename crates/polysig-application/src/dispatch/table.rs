//! Per-operation overload table and the resolution algorithm
//!
//! Resolution of a call against one table:
//!
//! 1. `arity` is the number of positional plus keyword arguments.
//! 2. Candidates are the signatures with exactly `arity` parameters whose
//!    leading types equal the runtime types of the positional arguments.
//! 3. A candidate matches when every keyword names one of its parameters
//!    that was not already filled positionally and whose declared type
//!    equals the keyword value's runtime type.
//!
//! Types are compared by identity only. Overloads are kept in registration
//! order, which is also the order ties are broken in.

use std::fmt;

use polysig_domain::error::{Error, Result};
use polysig_domain::ports::SharedHandler;
use polysig_domain::value_objects::{CallArgs, Invocation, Signature, Value};
use tracing::{debug, trace, warn};

use super::options::{AmbiguityPolicy, DispatchOptions};

/// One registered signature and the implementation bound to it
#[derive(Clone)]
pub struct Overload {
    signature: Signature,
    handler: SharedHandler,
}

impl Overload {
    /// Bind an implementation to a signature
    pub fn new(signature: Signature, handler: SharedHandler) -> Self {
        Self { signature, handler }
    }

    /// The declared signature
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Whether this overload accepts `args`
    pub fn accepts(&self, args: &CallArgs) -> bool {
        self.accepts_positional(args) && self.accepts_keywords(args)
    }

    /// Call the bound implementation
    pub fn call(&self, operation: &str, args: &CallArgs) -> Result<Value> {
        self.handler
            .handle(&Invocation::new(operation, &self.signature, args))
    }

    fn accepts_positional(&self, args: &CallArgs) -> bool {
        self.signature.arity() == args.arity()
            && args
                .positional_values()
                .iter()
                .zip(self.signature.params())
                .all(|(value, param)| value.type_tag() == param.type_tag())
    }

    fn accepts_keywords(&self, args: &CallArgs) -> bool {
        let filled = args.positional_values().len();
        let matched = args
            .keyword_values()
            .iter()
            .filter(|(name, value)| {
                self.signature.position_of(name).is_some_and(|index| {
                    index >= filled && self.signature.params()[index].type_tag() == value.type_tag()
                })
            })
            .count();
        matched == args.keyword_values().len() && self.signature.arity() == args.arity()
    }
}

impl fmt::Debug for Overload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overload")
            .field("signature", &self.signature.to_string())
            .finish_non_exhaustive()
    }
}

/// Every overload registered under one operation name
#[derive(Debug, Clone)]
pub struct OverloadTable {
    operation: String,
    overloads: Vec<Overload>,
}

impl OverloadTable {
    /// Create an empty table for `operation`
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            overloads: Vec::new(),
        }
    }

    /// Operation name
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Registered overloads in registration order
    pub fn overloads(&self) -> &[Overload] {
        &self.overloads
    }

    /// Number of registered overloads
    pub fn len(&self) -> usize {
        self.overloads.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.overloads.is_empty()
    }

    /// Add an overload
    ///
    /// Fails with `InvalidSignature` on empty or repeated parameter names and
    /// with `DuplicateSignature` when an overload with the same ordered type
    /// list exists. The table is unchanged on failure.
    pub fn insert(&mut self, signature: Signature, handler: SharedHandler) -> Result<()> {
        if let Some(name) = signature.invalid_name() {
            let message = if name.is_empty() {
                format!("empty parameter name in {signature}")
            } else {
                format!("parameter '{name}' declared more than once in {signature}")
            };
            return Err(Error::invalid_signature(&self.operation, message));
        }

        if let Some(existing) = self
            .overloads
            .iter()
            .find(|overload| overload.signature.same_types(&signature))
        {
            debug!(
                operation = %self.operation,
                existing = %existing.signature,
                rejected = %signature,
                "Duplicate signature rejected"
            );
            return Err(Error::duplicate_signature(
                &self.operation,
                signature.to_string(),
            ));
        }

        debug!(operation = %self.operation, signature = %signature, "Registered overload");
        self.overloads.push(Overload::new(signature, handler));
        Ok(())
    }

    /// Select the overload accepting `args`
    pub fn resolve(&self, args: &CallArgs, options: DispatchOptions) -> Result<&Overload> {
        let mut matches = self.overloads.iter().filter(|overload| overload.accepts(args));

        let Some(selected) = matches.next() else {
            return Err(Error::no_matching_signature(
                &self.operation,
                args.describe(),
            ));
        };

        let others: Vec<&Overload> = matches.collect();
        if !others.is_empty() {
            let candidates: Vec<String> = std::iter::once(selected)
                .chain(others)
                .map(|overload| overload.signature.to_string())
                .collect();
            match options.ambiguity {
                AmbiguityPolicy::FirstMatch => warn!(
                    operation = %self.operation,
                    arguments = %args,
                    selected = %selected.signature,
                    ?candidates,
                    "Ambiguous call resolved to first registered overload"
                ),
                AmbiguityPolicy::Reject => {
                    return Err(Error::ambiguous_call(
                        &self.operation,
                        args.describe(),
                        candidates,
                    ));
                }
            }
        }

        trace!(
            operation = %self.operation,
            arguments = %args,
            signature = %selected.signature,
            "Resolved overload"
        );
        Ok(selected)
    }

    /// Resolve and call in one step
    pub fn invoke(&self, args: &CallArgs, options: DispatchOptions) -> Result<Value> {
        self.resolve(args, options)?.call(&self.operation, args)
    }
}
