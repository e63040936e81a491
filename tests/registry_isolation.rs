//! Integration tests for isolated registries created with `define_registry!`.

use once_instance::{define_registry, Singleton};
use std::convert::Infallible;
use std::sync::Arc;

struct Database {
    url: String,
}

impl Singleton for Database {
    type Args = &'static str;
    type Error = Infallible;

    fn build(url: &'static str) -> Result<Self, Self::Error> {
        Ok(Database { url: url.to_string() })
    }
}

define_registry!(primary);
define_registry!(replica);

#[test]
fn test_same_type_independent_per_registry() {
    let main_db = primary::construct::<Database>("postgres://primary").unwrap();
    let read_db = replica::construct::<Database>("postgres://replica").unwrap();

    assert_eq!(main_db.url, "postgres://primary");
    assert_eq!(read_db.url, "postgres://replica");
    assert!(!Arc::ptr_eq(&main_db, &read_db));
}

#[test]
fn test_each_registry_keeps_first_writer() {
    define_registry!(scoped);

    let first = scoped::construct::<Database>("first").unwrap();
    let second = scoped::construct::<Database>("second").unwrap();

    assert_eq!(second.url, "first");
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_construction_in_one_registry_invisible_to_another() {
    define_registry!(left);
    define_registry!(right);

    left::construct::<Database>("left").unwrap();

    assert!(left::contains::<Database>().unwrap());
    assert!(!right::contains::<Database>().unwrap());
    assert!(right::get::<Database>().is_err());
}

#[test]
fn test_isolated_registry_does_not_touch_global() {
    struct OnlyLocal;

    impl Singleton for OnlyLocal {
        type Args = ();
        type Error = Infallible;

        fn build(_: ()) -> Result<Self, Self::Error> {
            Ok(OnlyLocal)
        }
    }

    define_registry!(local);

    local::construct::<OnlyLocal>(()).unwrap();

    assert!(local::contains::<OnlyLocal>().unwrap());
    assert!(!once_instance::contains::<OnlyLocal>().unwrap());
}

#[test]
fn test_api_constant_trait_access() {
    use once_instance::RegistryApi;

    define_registry!(trait_based);

    let via_api: Arc<Database> = trait_based::API.construct("api").unwrap();
    let via_fn: Arc<Database> = trait_based::construct("fn").unwrap();

    assert!(Arc::ptr_eq(&via_api, &via_fn));
}
