//! Singleton lifecycle management
//!
//! At most one instance per managed type, constructed lazily on first
//! access, with an optional asynchronous initialization step that runs
//! before any caller can observe the instance.

pub mod manager;
pub mod options;
pub mod state;

pub use manager::SingletonManager;
pub use options::SingletonOptions;
pub use state::SingletonState;
