//! Metrics served by this process.
//!
//! Both counters are bumped by the index route only; ops endpoints
//! (`/healthz`, `/readyz`, `/metrics`) are not counted.

use helmdemo_core::error::Result;
use helmdemo_core::metrics::{Registry, RegistryBuilder};

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const INDEX_REQUESTS_TOTAL: &str = "index_requests_total";

/// Build the process registry. Registration order is render order.
pub fn build_registry() -> Result<Registry> {
    let mut b = RegistryBuilder::new();
    b.counter(HTTP_REQUESTS_TOTAL, "Total HTTP requests")?;
    b.counter(INDEX_REQUESTS_TOTAL, "Index page requests")?;
    Ok(b.build())
}
