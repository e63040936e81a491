//! The contract a type implements to be constructed at most once.

use std::sync::Arc;

/// A type whose construction is gated by a registry.
///
/// `build` is the type's normal construction path: fill in defaults, then run
/// whatever initialisation the arguments call for. A registry invokes it only
/// when no instance of the type has been cached yet.
///
/// # Examples
///
/// ```rust
/// use once_instance::Singleton;
/// use std::convert::Infallible;
///
/// struct Counter {
///     count: i32,
/// }
///
/// impl Singleton for Counter {
///     type Args = i32;
///     type Error = Infallible;
///
///     fn build(count: i32) -> Result<Self, Self::Error> {
///         Ok(Counter { count })
///     }
/// }
///
/// let first = Counter::instance(10).unwrap();
/// let second = Counter::instance(20).unwrap(); // arguments ignored
/// assert_eq!(second.count, 10);
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// ```
pub trait Singleton: Send + Sync + Sized + 'static {
    /// Arguments accepted by the first construction call.
    type Args;

    /// Error produced when construction fails.
    type Error;

    /// Build a fresh value from `args`.
    fn build(args: Self::Args) -> Result<Self, Self::Error>;

    /// Return the process-wide instance, building it from `args` if none exists.
    fn instance(args: Self::Args) -> Result<Arc<Self>, Self::Error> {
        crate::registry::construct::<Self>(args)
    }
}
