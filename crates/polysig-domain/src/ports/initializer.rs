//! Asynchronous singleton initialization port
//!
//! A managed type may need a suspendable step after its synchronous
//! constructor runs (opening a connection, warming a cache). That step must
//! complete with an empty value; anything else is a contract violation the
//! singleton manager reports instead of ignoring.

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::Value;

/// Completion value of an async initializer
///
/// `()` is always empty. Dynamically typed completions ([`Value`],
/// `Option<Value>`) are checked when the initializer finishes.
pub trait InitOutput: Send {
    /// Description of the produced value when it is not empty
    fn non_empty(self) -> Option<String>;
}

impl InitOutput for () {
    fn non_empty(self) -> Option<String> {
        None
    }
}

impl InitOutput for Value {
    fn non_empty(self) -> Option<String> {
        (!self.is_unit()).then(|| format!("a value of type {}", self.type_tag()))
    }
}

impl<T: InitOutput> InitOutput for Option<T> {
    fn non_empty(self) -> Option<String> {
        self.and_then(InitOutput::non_empty)
    }
}

/// Asynchronous post-construction step of a managed singleton
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use polysig_domain::ports::AsyncInit;
///
/// struct Pool {
///     warmed: bool,
/// }
///
/// #[async_trait]
/// impl AsyncInit for Pool {
///     type Output = ();
///
///     async fn async_init(&mut self) -> polysig_domain::Result<()> {
///         self.warmed = true;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait AsyncInit: Send + Sync + 'static {
    /// Completion value, required to be empty
    type Output: InitOutput;

    /// Finish initializing a freshly constructed instance
    async fn async_init(&mut self) -> Result<Self::Output>;
}
