//! Core trait defining registry behavior.
//!
//! This module provides the `RegistryApi` trait with default implementations for
//! gated construction, lookup, and tracing of singleton instances.
//!
//! The registry is type-based: each type (`TypeId`) has at most one instance stored,
//! and once stored that instance is never replaced through construction.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

use crate::{RegistryError, RegistryEvent, Singleton};

/// Storage static backing a registry: one type-erased instance per `TypeId`.
pub type Storage = LazyLock<Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>>;

/// Trace callback static backing a registry.
pub type TraceCallback = LazyLock<Mutex<Option<Arc<dyn Fn(&RegistryEvent) + Send + Sync>>>>;

/// Core trait defining registry behavior.
///
/// Provides default implementations for all registry operations, requiring only
/// two accessor methods (`storage` and `trace`) to be implemented by the implementor.
pub trait RegistryApi {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    fn trace() -> &'static TraceCallback;

    /// Set a tracing callback for registry operations.
    ///
    /// # Safety Restrictions
    ///
    /// The callback must NOT call any registry methods on the same registry,
    /// as this will cause a deadlock. The callback is invoked while holding
    /// the trace lock.
    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Emit a registry event using the current callback, if any.
    ///
    /// The storage lock is never held while the callback runs.
    fn emit_event(&self, event: &RegistryEvent) {
        let guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        if let Some(callback) = guard.as_ref() {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Access the storage static.
    fn storage() -> &'static Storage;

    /// Return the instance of `T`, building it from `args` if none is cached.
    ///
    /// On a cache hit `args` is dropped unused. On a miss `T::build` runs without
    /// the storage lock held, so it may construct other singletons. A failed build
    /// returns `T::Error` unchanged and caches nothing.
    ///
    /// If another thread caches an instance of `T` while this call is building,
    /// the earlier entry wins and is returned; the value built here is dropped.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// A poisoned storage lock is recovered, since entries are only ever inserted
    /// whole and never modified in place.
    fn construct<T: Singleton>(&self, args: T::Args) -> Result<Arc<T>, T::Error> {
        let type_name = std::any::type_name::<T>();

        if let Some(existing) = cached::<T>(Self::storage()) {
            tracing::trace!(type_name, "returning cached instance, construction arguments ignored");
            self.emit_event(&RegistryEvent::Reuse { type_name });
            return Ok(existing);
        }

        let value = match T::build(args) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(type_name, "construction failed, nothing cached");
                self.emit_event(&RegistryEvent::BuildFailed { type_name });
                return Err(err);
            }
        };

        let mut map = Self::storage().lock().unwrap_or_else(|p| p.into_inner());
        let raced = map
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|any_arc| any_arc.downcast::<T>().ok());

        let (instance, event) = match raced {
            Some(existing) => (existing, RegistryEvent::Discard { type_name }),
            None => {
                let fresh = Arc::new(value);
                map.insert(TypeId::of::<T>(), fresh.clone());
                (fresh, RegistryEvent::Build { type_name })
            }
        };
        drop(map);

        match &event {
            RegistryEvent::Discard { .. } => {
                tracing::debug!(type_name, "instance cached concurrently, dropping the one just built");
            }
            _ => tracing::debug!(type_name, "constructed and cached singleton instance"),
        }
        self.emit_event(&event);

        Ok(instance)
    }

    /// Retrieve the cached instance of `T` without constructing it.
    ///
    /// # Errors
    ///
    /// - No instance of `T` has been constructed
    /// - Type mismatch (extremely rare)
    /// - Registry lock is poisoned
    fn get<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, RegistryError> {
        let map = Self::storage()
            .lock()
            .map_err(|_| RegistryError::RegistryLock)?;

        let any_arc_opt = map.get(&TypeId::of::<T>()).cloned();

        drop(map);

        let result: Result<Arc<T>, RegistryError> = match any_arc_opt {
            Some(any_arc) => any_arc
                .downcast::<T>()
                .map_err(|_| RegistryError::TypeMismatch {
                    type_name: std::any::type_name::<T>(),
                }),
            None => Err(RegistryError::TypeNotFound {
                type_name: std::any::type_name::<T>(),
            }),
        };

        self.emit_event(&RegistryEvent::Get {
            type_name: std::any::type_name::<T>(),
            found: result.is_ok(),
        });

        result
    }

    /// Check whether an instance of `T` has been constructed.
    ///
    /// # Errors
    ///
    /// - Registry lock is poisoned
    fn contains<T: Send + Sync + 'static>(&self) -> Result<bool, RegistryError> {
        let found = Self::storage()
            .lock()
            .map(|m| m.contains_key(&TypeId::of::<T>()))
            .map_err(|_| RegistryError::RegistryLock)?;

        self.emit_event(&RegistryEvent::Contains {
            type_name: std::any::type_name::<T>(),
            found,
        });

        Ok(found)
    }

    /// Drop every cached instance.
    ///
    /// Intended for tests only. Already-retrieved `Arc<T>` handles stay valid, and
    /// the next construction of each type builds a new instance.
    #[doc(hidden)]
    fn clear(&self) {
        self.emit_event(&RegistryEvent::Clear {});

        if let Ok(mut registry) = Self::storage().lock() {
            registry.clear();
        }
    }
}

fn cached<T: Send + Sync + 'static>(storage: &Storage) -> Option<Arc<T>> {
    storage
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .get(&TypeId::of::<T>())
        .cloned()
        .and_then(|any_arc| any_arc.downcast::<T>().ok())
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
