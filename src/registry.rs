//! The process-wide registry.
//!
//! Every `Singleton::instance` call routes through here. Types are keyed by
//! `TypeId`, so distinct types never share a slot.
//!
//! # Examples
//!
//! ```
//! use once_instance::{construct, impl_singleton};
//! use std::sync::Arc;
//!
//! #[derive(Default)]
//! struct Settings {
//!     retries: u32,
//! }
//! impl_singleton!(Settings);
//!
//! let a: Arc<Settings> = construct(()).unwrap();
//! let b: Arc<Settings> = construct(()).unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//! assert_eq!(a.retries, 0);
//! ```

use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, Mutex},
};

use crate::{RegistryApi, RegistryError, RegistryEvent, Singleton, Storage, TraceCallback};

static GLOBAL_STORAGE: Storage = LazyLock::new(|| Mutex::new(HashMap::new()));

static GLOBAL_TRACE: TraceCallback = LazyLock::new(|| Mutex::new(None));

struct Global;

impl RegistryApi for Global {
    fn storage() -> &'static Storage {
        &GLOBAL_STORAGE
    }

    fn trace() -> &'static TraceCallback {
        &GLOBAL_TRACE
    }
}

const GLOBAL: Global = Global;

/// Returns the process-wide instance of `T`, building it from `args` on first use.
///
/// Arguments passed after the first successful construction are ignored. A failed
/// build returns `T::Error` and leaves no entry behind.
///
/// # Examples
///
/// ```
/// use once_instance::{construct, Singleton};
/// use std::sync::Arc;
///
/// struct Greeting(String);
///
/// impl Singleton for Greeting {
///     type Args = &'static str;
///     type Error = std::convert::Infallible;
///
///     fn build(text: &'static str) -> Result<Self, Self::Error> {
///         Ok(Greeting(text.to_string()))
///     }
/// }
///
/// let hello: Arc<Greeting> = construct("hello").unwrap();
/// let again: Arc<Greeting> = construct("ignored").unwrap();
/// assert_eq!(again.0, "hello");
/// assert!(Arc::ptr_eq(&hello, &again));
/// ```
pub fn construct<T: Singleton>(args: T::Args) -> Result<Arc<T>, T::Error> {
    GLOBAL.construct::<T>(args)
}

/// Retrieves the process-wide instance of `T` without constructing it.
pub fn get<T: Send + Sync + 'static>() -> Result<Arc<T>, RegistryError> {
    GLOBAL.get::<T>()
}

/// Checks whether the process-wide instance of `T` exists.
pub fn contains<T: Send + Sync + 'static>() -> Result<bool, RegistryError> {
    GLOBAL.contains::<T>()
}

/// Sets a tracing callback invoked on every process-wide registry interaction.
///
/// # Example
/// ```rust
/// use once_instance::{clear_trace_callback, set_trace_callback};
///
/// set_trace_callback(|event| println!("[registry-trace] {event}"));
/// clear_trace_callback();
/// ```
pub fn set_trace_callback(callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
    GLOBAL.set_trace_callback(callback)
}

/// Clears the process-wide tracing callback.
pub fn clear_trace_callback() {
    GLOBAL.clear_trace_callback()
}
