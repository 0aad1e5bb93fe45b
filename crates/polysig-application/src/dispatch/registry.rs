//! Dispatch registry
//!
//! The [`DispatchRegistry`] owns one [`OverloadTable`] per operation name.
//! Registering the first signature of a name installs that name's
//! [`Dispatcher`]; further registrations only add table entries.
//!
//! Registration needs `&mut self` and dispatch only `&self`, so the borrow
//! checker rules out registering while calls are in flight. Once populated,
//! a registry can be shared behind an `Arc` and dispatched from any thread.
//!
//! ## Usage
//!
//! ```
//! use polysig_application::dispatch::DispatchRegistry;
//! use polysig_domain::{CallArgs, Signature, Value};
//!
//! let mut registry = DispatchRegistry::new();
//! registry
//!     .register("describe", Signature::new().param::<String>("a"), |_| {
//!         Ok(Value::from("string"))
//!     })
//!     .unwrap();
//! registry
//!     .register("describe", Signature::new().param::<i64>("a"), |_| {
//!         Ok(Value::from("int"))
//!     })
//!     .unwrap();
//!
//! let out = registry.invoke("describe", &CallArgs::new().arg(5_i64)).unwrap();
//! assert_eq!(out.downcast_ref::<String>().unwrap(), "int");
//! assert!(registry.invoke("describe", &CallArgs::new().arg(5.0_f64)).is_err());
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use polysig_domain::error::{Error, Result};
use polysig_domain::ports::SharedHandler;
use polysig_domain::value_objects::{CallArgs, Invocation, Signature, Value};

use super::options::DispatchOptions;
use super::table::{Overload, OverloadTable};

/// Operation name to overload table mapping
#[derive(Debug, Clone, Default)]
pub struct DispatchRegistry {
    tables: HashMap<String, OverloadTable>,
    options: DispatchOptions,
}

impl DispatchRegistry {
    /// Create an empty registry with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given options
    pub fn with_options(options: DispatchOptions) -> Self {
        Self {
            tables: HashMap::new(),
            options,
        }
    }

    /// Options applied to every dispatch
    pub fn options(&self) -> DispatchOptions {
        self.options
    }

    /// Register a closure as the implementation of one signature
    pub fn register<F>(
        &mut self,
        operation: impl Into<String>,
        signature: Signature,
        implementation: F,
    ) -> Result<()>
    where
        F: Fn(&Invocation<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        self.register_handler(operation, signature, Arc::new(implementation))
    }

    /// Register a shared handler as the implementation of one signature
    ///
    /// Fails with `DuplicateSignature` when `operation` already has a
    /// signature with the same ordered parameter types. Earlier
    /// registrations stay usable after a failure.
    pub fn register_handler(
        &mut self,
        operation: impl Into<String>,
        signature: Signature,
        handler: SharedHandler,
    ) -> Result<()> {
        let operation = operation.into();
        match self.tables.get_mut(&operation) {
            Some(table) => table.insert(signature, handler),
            None => {
                let mut table = OverloadTable::new(operation.clone());
                table.insert(signature, handler)?;
                self.tables.insert(operation, table);
                Ok(())
            }
        }
    }

    /// The dispatcher installed for `operation`
    pub fn dispatcher(&self, operation: &str) -> Result<Dispatcher<'_>> {
        self.table(operation).map(|table| Dispatcher {
            table,
            options: self.options,
        })
    }

    /// Select the overload of `operation` that accepts `args`
    pub fn resolve(&self, operation: &str, args: &CallArgs) -> Result<&Overload> {
        self.table(operation)?.resolve(args, self.options)
    }

    /// Resolve and call exactly one implementation of `operation`
    pub fn invoke(&self, operation: &str, args: &CallArgs) -> Result<Value> {
        self.table(operation)?.invoke(args, self.options)
    }

    /// Whether any signature is registered under `operation`
    pub fn contains(&self, operation: &str) -> bool {
        self.tables.contains_key(operation)
    }

    /// Registered operation names, sorted
    pub fn operations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Signatures of `operation` in registration order
    pub fn signatures(&self, operation: &str) -> Vec<&Signature> {
        self.tables
            .get(operation)
            .map(|table| table.overloads().iter().map(Overload::signature).collect())
            .unwrap_or_default()
    }

    /// Number of registered operations
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn table(&self, operation: &str) -> Result<&OverloadTable> {
        self.tables
            .get(operation)
            .ok_or_else(|| Error::unknown_operation(operation))
    }
}

/// Callable bound to one operation's overload table
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    table: &'a OverloadTable,
    options: DispatchOptions,
}

impl<'a> Dispatcher<'a> {
    /// Operation this dispatcher serves
    pub fn operation(&self) -> &'a str {
        self.table.operation()
    }

    /// Select the overload that accepts `args`
    pub fn resolve(&self, args: &CallArgs) -> Result<&'a Overload> {
        self.table.resolve(args, self.options)
    }

    /// Resolve and call exactly one implementation
    pub fn call(&self, args: &CallArgs) -> Result<Value> {
        self.table.invoke(args, self.options)
    }
}
