//! Singleton entry states

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type-erased shared instance
pub(crate) type Instance = Arc<dyn Any + Send + Sync>;

/// Lifecycle state of one managed type
///
/// `Absent -> Constructing -> Ready`, where `Ready` is terminal. A failed
/// construction goes back to `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingletonState {
    /// Never constructed, or the last attempt failed
    Absent,
    /// A caller holds the construction lock and is building the instance
    Constructing,
    /// The shared instance is available
    Ready,
}

impl fmt::Display for SingletonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Constructing => "constructing",
            Self::Ready => "ready",
        };
        f.write_str(name)
    }
}

/// Stored entry of one managed type; absence is represented by no entry
#[derive(Clone)]
pub(crate) enum Slot {
    Constructing {
        type_name: &'static str,
    },
    Ready {
        type_name: &'static str,
        instance: Instance,
    },
}

impl Slot {
    pub(crate) fn state(&self) -> SingletonState {
        match self {
            Self::Constructing { .. } => SingletonState::Constructing,
            Self::Ready { .. } => SingletonState::Ready,
        }
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Self::Constructing { type_name } | Self::Ready { type_name, .. } => *type_name,
        }
    }
}
