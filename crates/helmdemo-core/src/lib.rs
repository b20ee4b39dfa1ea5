//! helmdemo core: error surface and the in-process metrics registry.
//!
//! This crate owns the counter registry and its Prometheus text renderer.
//! It carries no transport or runtime dependencies so the HTTP server and
//! tests can share it without pulling in axum or tokio.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Lookups of unregistered metrics surface as `DemoError::UnknownMetric`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{DemoError, Result};
