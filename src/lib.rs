//! # Once Instance
//!
//! First-writer-wins singleton construction: at most one instance of each opted-in
//! type exists per registry, and only the arguments of the first successful
//! construction call take effect.
//!
//! ## Quick Start
//!
//! ```rust
//! use once_instance::Singleton;
//! use std::convert::Infallible;
//! use std::sync::Arc;
//!
//! struct HasValue {
//!     value: i32,
//! }
//!
//! impl Singleton for HasValue {
//!     type Args = i32;
//!     type Error = Infallible;
//!
//!     fn build(value: i32) -> Result<Self, Self::Error> {
//!         Ok(HasValue { value })
//!     }
//! }
//!
//! let a = HasValue::instance(10).unwrap();
//! let b = HasValue::instance(20).unwrap();
//! assert_eq!(b.value, 10);
//! assert!(Arc::ptr_eq(&a, &b));
//! ```
//!
//! ## Features
//!
//! - **Per-type slots**: keyed by `TypeId`, so distinct types never interfere
//! - **Non-corrupting failures**: a failed first build caches nothing and can be retried
//! - **Thread-safe**: concurrent first constructions all receive the same instance
//! - **Isolated registries**: [`define_registry!`] creates independent registries
//! - **Tracing support**: optional callback receiving [`RegistryEvent`]s, plus `tracing` logs
//!
//! ## Main Functions
//!
//! - [`construct`] - Return the instance of a type, building it on first use
//! - [`get`] - Retrieve an existing instance without building
//! - [`contains`] - Check whether an instance exists
//! - [`set_trace_callback`] - Set up tracing for registry operations

mod macros;
mod registry;
mod registry_error;
mod registry_event;
mod registry_trait;
mod singleton;

pub use registry::{clear_trace_callback, construct, contains, get, set_trace_callback};
pub use registry_error::RegistryError;
pub use registry_event::RegistryEvent;
pub use registry_trait::{RegistryApi, Storage, TraceCallback};
pub use singleton::Singleton;
