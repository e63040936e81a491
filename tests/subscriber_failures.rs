//! Integration tests for `tracing` subscribers misbehaving during construction.
//!
//! A subscriber must never run while the storage lock is held, otherwise a
//! panicking subscriber poisons the registry for every later query.

use once_instance::{define_registry, impl_singleton};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

/// Subscriber that panics on every DEBUG event.
struct PanicOnDebug;

impl Subscriber for PanicOnDebug {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        if *event.metadata().level() == Level::DEBUG {
            panic!("subscriber failure");
        }
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

#[derive(Default)]
struct Settings;
impl_singleton!(Settings);

#[derive(Default)]
struct Other;
impl_singleton!(Other);

define_registry!(noisy);

#[test]
fn test_panicking_subscriber_does_not_poison_storage() {
    let outcome = tracing::subscriber::with_default(PanicOnDebug, || {
        panic::catch_unwind(AssertUnwindSafe(|| noisy::construct::<Settings>(())))
    });
    assert!(outcome.is_err());

    // The instance was cached before logging, and the lock is still usable
    assert_eq!(noisy::contains::<Settings>(), Ok(true));
    let settings: Arc<Settings> = noisy::get().unwrap();

    // Cache hits log below DEBUG and keep working under the same subscriber
    let again = tracing::subscriber::with_default(PanicOnDebug, || {
        noisy::construct::<Settings>(()).unwrap()
    });
    assert!(Arc::ptr_eq(&settings, &again));

    let other: Arc<Other> = noisy::construct(()).unwrap();
    let fetched: Arc<Other> = noisy::get().unwrap();
    assert!(Arc::ptr_eq(&other, &fetched));
}
