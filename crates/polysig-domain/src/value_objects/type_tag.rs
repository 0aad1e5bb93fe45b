//! Runtime type identity tokens
//!
//! A [`TypeTag`] names one concrete Rust type. Two tags compare equal only
//! when they name the very same type: there is no coercion between numeric
//! widths and no notion of a subtype satisfying a supertype.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity token for a concrete runtime type
///
/// # Example
///
/// ```
/// use polysig_domain::value_objects::TypeTag;
///
/// assert_eq!(TypeTag::of::<String>(), TypeTag::of::<String>());
/// assert_ne!(TypeTag::of::<i64>(), TypeTag::of::<i32>());
/// assert_eq!(TypeTag::of::<i64>().to_string(), "i64");
/// ```
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Tag for the type `T`
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying `TypeId`
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, as reported by `std::any::type_name`
    pub fn full_name(&self) -> &'static str {
        self.name
    }

    /// Type name with every module path stripped, generic arguments included
    ///
    /// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
    pub fn short_name(&self) -> String {
        let mut short = String::with_capacity(self.name.len());
        let mut segment_start = 0;
        let mut chars = self.name.chars().peekable();
        while let Some(c) = chars.next() {
            if c == ':' && chars.peek() == Some(&':') {
                chars.next();
                short.truncate(segment_start);
            } else {
                short.push(c);
                if !(c.is_alphanumeric() || c == '_') {
                    segment_start = short.len();
                }
            }
        }
        short
    }

    /// Whether this tag names `T`
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", self.name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}
