//! Basic usage example for once-instance.
//!
//! Demonstrates:
//! - First-writer-wins construction through `Singleton::instance`
//! - Separate slots for separate types
//! - Retrying after a failed first construction
//! - Observing registry events
//!
//! Run with: `cargo run --example basic_usage`

use once_instance::{define_registry, set_trace_callback, Singleton};
use std::convert::Infallible;
use std::sync::Arc;

#[derive(Debug)]
struct Counter {
    count: i32,
}

impl Singleton for Counter {
    type Args = i32;
    type Error = Infallible;

    fn build(count: i32) -> Result<Self, Self::Error> {
        Ok(Counter { count })
    }
}

#[derive(Debug)]
struct Endpoint {
    url: String,
}

impl Singleton for Endpoint {
    type Args = Option<&'static str>;
    type Error = String;

    fn build(url: Option<&'static str>) -> Result<Self, Self::Error> {
        let url = url.ok_or_else(|| "url is required".to_string())?;
        Ok(Endpoint { url: url.to_string() })
    }
}

define_registry!(sandbox);

fn main() {
    println!("=== once-instance: Basic Usage ===\n");

    set_trace_callback(|event| println!("   [trace] {event}"));

    // -------------------------------------------------------------------------
    // 1. First call wins
    // -------------------------------------------------------------------------
    println!("1. Constructing Counter twice...");

    let first = Counter::instance(10).unwrap();
    let second = Counter::instance(20).unwrap();

    println!("   first.count = {}, second.count = {}", first.count, second.count);
    println!("   same instance: {}", Arc::ptr_eq(&first, &second));

    // -------------------------------------------------------------------------
    // 2. Failed construction caches nothing
    // -------------------------------------------------------------------------
    println!("\n2. Constructing Endpoint without a url...");

    match Endpoint::instance(None) {
        Ok(endpoint) => println!("   unexpected: {endpoint:?}"),
        Err(err) => println!("   error: {err}"),
    }

    let endpoint = Endpoint::instance(Some("https://example.invalid")).unwrap();
    println!("   retry succeeded: {}", endpoint.url);

    // -------------------------------------------------------------------------
    // 3. Isolated registry
    // -------------------------------------------------------------------------
    println!("\n3. Same type in an isolated registry...");

    let local = sandbox::construct::<Counter>(99).unwrap();
    println!("   sandbox count = {}, global count = {}", local.count, first.count);

    println!("\n=== Done ===");
}
