#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use helmdemo_core::metrics::{Registry, RegistryBuilder};

fn demo_registry() -> Registry {
    let mut b = RegistryBuilder::new();
    b.counter("http_requests_total", "Total HTTP requests").unwrap();
    b.counter("index_requests_total", "Index page requests").unwrap();
    b.build()
}

#[test]
fn fresh_counters_start_at_zero() {
    let reg = demo_registry();
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.value("http_requests_total").unwrap(), 0);
    assert_eq!(reg.value("index_requests_total").unwrap(), 0);
}

#[test]
fn increment_adds_exactly_one() {
    let reg = demo_registry();
    reg.increment("index_requests_total").unwrap();
    reg.increment("index_requests_total").unwrap();

    assert_eq!(reg.value("index_requests_total").unwrap(), 2);
    assert_eq!(reg.value("http_requests_total").unwrap(), 0);
}

#[test]
fn unknown_name_fails_fast() {
    let reg = demo_registry();

    let err = reg.increment("nope_total").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNKNOWN_METRIC");

    let err = reg.value("nope_total").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNKNOWN_METRIC");
    assert!(reg.counter("nope_total").is_none());
}

#[test]
fn duplicate_registration_rejected() {
    let mut b = Registry::builder();
    b.counter("dup_total", "first").unwrap();

    let err = b.counter("dup_total", "second").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "DUPLICATE_METRIC");

    let reg = b.build();
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.counter("dup_total").unwrap().help(), "first");
}

#[test]
fn malformed_names_rejected() {
    for bad in ["", "1abc", "has space", "dash-name", "emoji_✓"] {
        let mut b = RegistryBuilder::new();
        let err = b.counter(bad, "x").expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "INVALID_METRIC_NAME", "name {bad:?}");
    }

    let mut b = RegistryBuilder::new();
    b.counter("_leading_underscore", "").unwrap();
    b.counter("ns:sub:name_total", "").unwrap();
    assert_eq!(b.build().len(), 2);
}

#[test]
fn snapshot_keeps_registration_order() {
    let mut b = RegistryBuilder::new();
    b.counter("zeta_total", "z").unwrap();
    b.counter("alpha_total", "a").unwrap();
    let reg = b.build();

    reg.increment("alpha_total").unwrap();
    let names: Vec<_> = reg.snapshot().into_iter().map(|s| (s.name, s.value)).collect();
    assert_eq!(
        names,
        vec![("zeta_total".to_string(), 0), ("alpha_total".to_string(), 1)]
    );
}

#[test]
fn concurrent_increments_are_not_lost() {
    const THREADS: u64 = 8;
    const PER_THREAD: u64 = 10_000;

    let reg = Arc::new(demo_registry());
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    reg.increment("http_requests_total").unwrap();
                    reg.increment("index_requests_total").unwrap();
                }
            })
        })
        .collect();

    // Render while writers run; every observed value must be monotonic.
    let mut last = 0;
    for _ in 0..100 {
        let v = reg.value("http_requests_total").unwrap();
        assert!(v >= last);
        last = v;
        let _ = reg.render();
    }

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(reg.value("http_requests_total").unwrap(), THREADS * PER_THREAD);
    assert_eq!(reg.value("index_requests_total").unwrap(), THREADS * PER_THREAD);
}
