//! In-process metrics (counters only).
//!
//! This module hosts the counter registry and its text renderer:
//! - Registry: fixed set of named `AtomicU64` counters, built once at startup.
//! - Exposition: Prometheus text format (`# HELP` / `# TYPE` / sample line).
//!
//! Membership is frozen by `RegistryBuilder::build`, so the hot path never
//! takes a lock: increments are a map lookup plus one `fetch_add`.

pub mod exposition;
pub mod registry;

pub use exposition::CONTENT_TYPE;
pub use registry::{Counter, CounterSample, Registry, RegistryBuilder};
