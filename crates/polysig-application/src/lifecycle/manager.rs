//! Singleton lifecycle manager
//!
//! Lazily constructs exactly one shared instance per managed type.
//!
//! ## Protocol
//!
//! ```text
//! get_or_create::<T>()
//!     │
//!     ├─ Ready in snapshot? ──────────────────────────> return cached (no lock)
//!     │
//!     ├─ lock construction mutex (shared by all types)
//!     ├─ Ready now? ──────────────────────────────────> return cached
//!     ├─ mark Constructing
//!     ├─ constructor()            ── Err ─> rollback to Absent, propagate
//!     ├─ async_init().await       ── Err / non-empty ─> rollback, propagate
//!     ├─ store Ready
//!     └─ unlock ─────────────────────────────────────> return instance
//! ```
//!
//! One mutex serializes first-time construction of every type, so a slow
//! initializer for one type delays first access to all others. Reads of
//! ready instances go through an atomically swapped snapshot and never wait.
//!
//! The mutex is not re-entrant: a constructor or initializer that requests
//! another singleton from the same manager deadlocks.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use polysig_domain::error::{Error, Result};
use polysig_domain::ports::{AsyncInit, InitOutput};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::options::SingletonOptions;
use super::state::{Instance, SingletonState, Slot};

static GLOBAL: Lazy<SingletonManager> = Lazy::new(SingletonManager::new);

/// Process-wide or injectable registry of singleton instances
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use polysig_application::lifecycle::SingletonManager;
///
/// struct Settings {
///     name: String,
/// }
///
/// # tokio_test_block(async {
/// let manager = SingletonManager::new();
/// let first = manager
///     .get_or_create(|| Ok(Settings { name: "prod".to_string() }))
///     .await
///     .unwrap();
/// let second = manager
///     .get_or_create(|| Ok(Settings { name: "ignored".to_string() }))
///     .await
///     .unwrap();
///
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(second.name, "prod");
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub struct SingletonManager {
    slots: ArcSwap<HashMap<TypeId, Slot>>,
    construction: Mutex<()>,
    options: SingletonOptions,
}

impl SingletonManager {
    /// Create an empty manager with default options
    pub fn new() -> Self {
        Self::with_options(SingletonOptions::default())
    }

    /// Create an empty manager with the given options
    pub fn with_options(options: SingletonOptions) -> Self {
        Self {
            slots: ArcSwap::from_pointee(HashMap::new()),
            construction: Mutex::new(()),
            options,
        }
    }

    /// The lazily created process-wide manager
    pub fn global() -> &'static SingletonManager {
        &GLOBAL
    }

    /// Options in effect
    pub fn options(&self) -> SingletonOptions {
        self.options
    }

    /// The shared `T`, constructing it with `constructor` on first request
    ///
    /// The constructor runs at most once per successful construction; its
    /// error is returned to this caller and leaves `T` absent.
    pub async fn get_or_create<T, C>(&self, constructor: C) -> Result<Arc<T>>
    where
        T: Any + Send + Sync,
        C: FnOnce() -> Result<T>,
    {
        if let Some(instance) = self.get::<T>() {
            return Ok(instance);
        }

        let _lock = self.construction.lock().await;
        if let Some(instance) = self.get::<T>() {
            return Ok(instance);
        }

        let guard = ConstructionGuard::begin::<T>(self);
        let instance = constructor()?;
        Ok(guard.commit(instance))
    }

    /// The shared `T`, constructing and asynchronously initializing it on
    /// first request
    ///
    /// [`AsyncInit::async_init`] runs while the construction lock is held.
    /// A non-empty completion value fails with `InvalidInitializerResult`
    /// and the instance is discarded.
    pub async fn get_or_create_async<T, C>(&self, constructor: C) -> Result<Arc<T>>
    where
        T: AsyncInit,
        C: FnOnce() -> Result<T>,
    {
        if let Some(instance) = self.get::<T>() {
            return Ok(instance);
        }

        let _lock = self.construction.lock().await;
        if let Some(instance) = self.get::<T>() {
            return Ok(instance);
        }

        let guard = ConstructionGuard::begin::<T>(self);
        let mut instance = constructor()?;

        let started = Instant::now();
        let output = instance.async_init().await;
        self.report_init_duration(guard.type_name, started.elapsed());

        if let Some(produced) = output?.non_empty() {
            return Err(Error::invalid_initializer_result(guard.type_name, produced));
        }
        Ok(guard.commit(instance))
    }

    /// The ready `T`, without constructing it
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        match self.slots.load().get(&TypeId::of::<T>()) {
            Some(Slot::Ready { instance, .. }) => Arc::clone(instance).downcast::<T>().ok(),
            _ => None,
        }
    }

    /// Lifecycle state of `T`
    pub fn state<T: Any>(&self) -> SingletonState {
        self.state_of(TypeId::of::<T>())
    }

    /// Lifecycle state of the type identified by `type_id`
    pub fn state_of(&self, type_id: TypeId) -> SingletonState {
        self.slots
            .load()
            .get(&type_id)
            .map_or(SingletonState::Absent, Slot::state)
    }

    /// Number of ready instances
    pub fn len(&self) -> usize {
        self.slots
            .load()
            .values()
            .filter(|slot| slot.state() == SingletonState::Ready)
            .count()
    }

    /// Whether no instance is ready
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the types with a ready instance, sorted
    pub fn managed_types(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .slots
            .load()
            .values()
            .filter(|slot| slot.state() == SingletonState::Ready)
            .map(Slot::type_name)
            .collect();
        names.sort_unstable();
        names
    }

    fn write_slot(&self, type_id: TypeId, slot: Option<Slot>) {
        self.slots.rcu(|current| {
            let mut next = HashMap::clone(current);
            match &slot {
                Some(slot) => {
                    next.insert(type_id, slot.clone());
                }
                None => {
                    next.remove(&type_id);
                }
            }
            next
        });
    }

    fn report_init_duration(&self, type_name: &'static str, elapsed: Duration) {
        match self.options.slow_init_threshold {
            Some(threshold) if elapsed > threshold => warn!(
                type_name,
                elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                threshold_ms = u64::try_from(threshold.as_millis()).unwrap_or(u64::MAX),
                "Slow singleton initializer held the construction lock"
            ),
            _ => debug!(
                type_name,
                elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
                "Singleton initializer finished"
            ),
        }
    }
}

impl Default for SingletonManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SingletonManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingletonManager")
            .field("ready", &self.managed_types())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Marks a type `Constructing` and rolls it back to absent unless committed
///
/// Dropping the guard without committing covers constructor errors,
/// initializer errors, and callers abandoning the future mid-initialization.
struct ConstructionGuard<'a> {
    manager: &'a SingletonManager,
    type_id: TypeId,
    type_name: &'static str,
    committed: bool,
}

impl<'a> ConstructionGuard<'a> {
    fn begin<T: Any>(manager: &'a SingletonManager) -> Self {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();
        manager.write_slot(type_id, Some(Slot::Constructing { type_name }));
        debug!(type_name, "Constructing singleton");
        Self {
            manager,
            type_id,
            type_name,
            committed: false,
        }
    }

    fn commit<T: Any + Send + Sync>(mut self, instance: T) -> Arc<T> {
        let instance = Arc::new(instance);
        let shared: Instance = instance.clone();
        self.manager.write_slot(
            self.type_id,
            Some(Slot::Ready {
                type_name: self.type_name,
                instance: shared,
            }),
        );
        self.committed = true;
        debug!(type_name = self.type_name, "Singleton ready");
        instance
    }
}

impl Drop for ConstructionGuard<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.manager.write_slot(self.type_id, None);
            warn!(
                type_name = self.type_name,
                "Singleton construction did not complete, entry reset to absent"
            );
        }
    }
}
