//! Overload signatures
//!
//! A [`Signature`] is the ordered list of `(name, type)` pairs one overload
//! of an operation accepts. Two signatures of the same operation collide
//! when their ordered type lists are equal; parameter names play no part in
//! that comparison.

use std::any::Any;
use std::fmt;

use super::TypeTag;

/// One declared parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    name: String,
    tag: TypeTag,
}

impl Param {
    /// Create a parameter with an explicit tag
    pub fn new(name: impl Into<String>, tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            tag,
        }
    }

    /// Parameter name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expected runtime type
    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }
}

/// Ordered parameter list of one overload
///
/// # Example
///
/// ```
/// use polysig_domain::value_objects::Signature;
///
/// let signature = Signature::new().param::<String>("a").param::<i64>("b");
/// assert_eq!(signature.arity(), 2);
/// assert_eq!(signature.position_of("b"), Some(1));
/// assert_eq!(signature.to_string(), "(a: String, b: i64)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    /// Create an empty signature
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter of type `T`
    #[must_use]
    pub fn param<T: Any>(self, name: impl Into<String>) -> Self {
        self.with_param(name, TypeTag::of::<T>())
    }

    /// Append a parameter with an explicit tag
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, tag: TypeTag) -> Self {
        self.params.push(Param::new(name, tag));
        self
    }

    /// Declared parameters in order
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Index of the parameter called `name`
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|param| param.name == name)
    }

    /// Declared parameter types in order
    pub fn types(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.params.iter().map(Param::type_tag)
    }

    /// Whether both signatures declare the same ordered type list
    pub fn same_types(&self, other: &Signature) -> bool {
        self.arity() == other.arity() && self.types().eq(other.types())
    }

    /// First parameter name that is empty or declared twice, if any
    pub fn invalid_name(&self) -> Option<&str> {
        self.params.iter().enumerate().find_map(|(index, param)| {
            let repeated = self.params[..index].iter().any(|p| p.name == param.name);
            (param.name.is_empty() || repeated).then_some(param.name.as_str())
        })
    }
}

impl FromIterator<Param> for Signature {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", param.name, param.tag)?;
        }
        f.write_str(")")
    }
}
