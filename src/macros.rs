//! Macros for creating isolated registries and implementing `Singleton`.

/// Creates an isolated singleton registry with a single macro invocation.
///
/// The macro generates a module containing:
/// - Storage static (hidden)
/// - Trace callback static (hidden)
/// - An `Api` struct that implements `RegistryApi`
/// - Free functions delegating to it
///
/// # Examples
///
/// ```rust
/// use once_instance::{define_registry, impl_singleton};
/// use std::sync::Arc;
///
/// #[derive(Default)]
/// struct Pool {
///     size: usize,
/// }
/// impl_singleton!(Pool);
///
/// define_registry!(workers);
/// define_registry!(io);
///
/// let a: Arc<Pool> = workers::construct(()).unwrap();
/// let b: Arc<Pool> = io::construct(()).unwrap();
///
/// // Same type, separate registries, separate instances
/// assert!(!Arc::ptr_eq(&a, &b));
/// assert!(Arc::ptr_eq(&a, &workers::construct(()).unwrap()));
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        pub mod $name {
            use std::collections::HashMap;
            use std::sync::{Arc, LazyLock, Mutex};

            // Storage for constructed instances (module-private)
            static STORAGE: $crate::Storage = LazyLock::new(|| Mutex::new(HashMap::new()));

            // Trace callback storage (module-private)
            static TRACE: $crate::TraceCallback = LazyLock::new(|| Mutex::new(None));

            /// Zero-sized type that implements the registry API.
            pub struct Api;

            impl $crate::RegistryApi for Api {
                fn storage() -> &'static $crate::Storage {
                    &STORAGE
                }

                fn trace() -> &'static $crate::TraceCallback {
                    &TRACE
                }
            }

            /// Convenient constant for trait-based access.
            pub const API: Api = Api;

            /// Return the instance of `T` in this registry, building it on first use.
            pub fn construct<T: $crate::Singleton>(args: T::Args) -> Result<Arc<T>, T::Error> {
                use $crate::RegistryApi;
                API.construct::<T>(args)
            }

            /// Retrieve the instance of `T` in this registry without constructing it.
            pub fn get<T: Send + Sync + 'static>() -> Result<Arc<T>, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.get()
            }

            /// Check whether this registry holds an instance of `T`.
            pub fn contains<T: Send + Sync + 'static>() -> Result<bool, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.contains::<T>()
            }

            /// Set a tracing callback for this registry.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                use $crate::RegistryApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::RegistryApi;
                API.clear_trace_callback()
            }

            /// Drop every instance held by this registry.
            #[doc(hidden)]
            pub fn clear() {
                use $crate::RegistryApi;
                API.clear()
            }
        }
    };
}

/// Implements `Singleton` for a `Default` type.
///
/// The generated impl takes no arguments and cannot fail.
///
/// ```rust
/// use once_instance::{impl_singleton, Singleton};
///
/// #[derive(Default)]
/// struct Limits {
///     max: u32,
/// }
/// impl_singleton!(Limits);
///
/// assert_eq!(Limits::instance(()).unwrap().max, 0);
/// ```
#[macro_export]
macro_rules! impl_singleton {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Singleton for $ty {
                type Args = ();
                type Error = ::std::convert::Infallible;

                fn build(_: ()) -> ::std::result::Result<Self, Self::Error> {
                    ::std::result::Result::Ok(<$ty as ::std::default::Default>::default())
                }
            }
        )+
    };
}
