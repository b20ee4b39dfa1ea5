//! helmdemo server library entry.
//!
//! This crate wires config, shared state, the metrics registry, and the HTTP
//! routes into an axum `Router`. It is consumed by the binary (`main.rs`) and
//! by integration tests, which drive the router in-process.

pub mod app_state;
pub mod config;
pub mod error;
pub mod greeting;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
