//! Multi-signature dispatch
//!
//! One logical operation name, several implementations, selected at call
//! time by the runtime types of the positional arguments and the names and
//! types of the keyword arguments.
//!
//! ```text
//! register("f", (a: String), impl_1) ─┐
//! register("f", (a: i64), impl_2)    ─┼─> OverloadTable "f"
//!                                      │
//! invoke("f", [5_i64]) ── resolve ─────┘──> impl_2
//! ```

pub mod options;
pub mod registry;
pub mod table;

pub use options::{AmbiguityPolicy, DispatchOptions};
pub use registry::{DispatchRegistry, Dispatcher};
pub use table::{Overload, OverloadTable};
