//! Dynamically typed values
//!
//! Arguments passed to a dispatched operation, and the values its
//! implementations return, travel as [`Value`]s: a shared, immutable payload
//! tagged with the [`TypeTag`] of its concrete type.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::TypeTag;

/// A cheaply clonable value of any `Send + Sync` type
///
/// The unit value `()` plays the role of "no value".
///
/// # Example
///
/// ```
/// use polysig_domain::value_objects::{TypeTag, Value};
///
/// let value = Value::from("hello");
/// assert_eq!(value.type_tag(), TypeTag::of::<String>());
/// assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("hello"));
/// assert!(value.downcast_ref::<i64>().is_none());
/// ```
#[derive(Clone)]
pub struct Value {
    tag: TypeTag,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Value {
    /// Wrap a value of any `Send + Sync` type
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            tag: TypeTag::of::<T>(),
            inner: Arc::new(value),
        }
    }

    /// The unit value
    pub fn unit() -> Self {
        Self::new(())
    }

    /// Runtime type of the wrapped value
    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }

    /// Whether this is the unit value
    pub fn is_unit(&self) -> bool {
        self.tag.is::<()>()
    }

    /// Whether the wrapped value is a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.tag.is::<T>()
    }

    /// Borrow the wrapped value as a `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Recover a shared handle to the wrapped value as a `T`
    pub fn downcast_arc<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::unit()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({})", self.tag)
    }
}

macro_rules! impl_from_for_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

impl_from_for_value!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    Vec<u8>,
);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::new(value.to_owned())
    }
}
