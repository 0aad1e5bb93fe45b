//! Call arguments
//!
//! [`CallArgs`] carries the values supplied at one invocation: positional
//! values in order, keyword values by name, and an optional implicit
//! receiver (the enclosing object a method-style call was made on). The
//! receiver never takes part in overload matching.

use std::collections::BTreeMap;
use std::fmt;

use super::Value;

/// Arguments of a single call
///
/// # Example
///
/// ```
/// use polysig_domain::value_objects::CallArgs;
///
/// let args = CallArgs::new().arg("x").kwarg("b", 5_i64);
/// assert_eq!(args.arity(), 2);
/// assert_eq!(args.describe(), "(String, b=i64)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    receiver: Option<Value>,
    positional: Vec<Value>,
    keyword: BTreeMap<String, Value>,
}

impl CallArgs {
    /// Create an empty argument list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from positional values only
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Append a positional value
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword value, replacing any earlier value with the same name
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    /// Attach the implicit receiver
    #[must_use]
    pub fn with_receiver(mut self, receiver: impl Into<Value>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// The implicit receiver, if any
    pub fn receiver(&self) -> Option<&Value> {
        self.receiver.as_ref()
    }

    /// Positional values in order
    pub fn positional_values(&self) -> &[Value] {
        &self.positional
    }

    /// Keyword values by name
    pub fn keyword_values(&self) -> &BTreeMap<String, Value> {
        &self.keyword
    }

    /// Keyword value called `name`
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name)
    }

    /// Number of supplied arguments, receiver excluded
    pub fn arity(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }

    /// Argument shapes for diagnostics, e.g. `(String, b=i64)`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CallArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positional = self.positional.iter().map(|value| value.type_tag().to_string());
        let keyword = self
            .keyword
            .iter()
            .map(|(name, value)| format!("{name}={}", value.type_tag()));
        let parts: Vec<String> = positional.chain(keyword).collect();
        write!(f, "({})", parts.join(", "))
    }
}
