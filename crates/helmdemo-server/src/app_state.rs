//! Shared application state for the helmdemo server.
//!
//! Built once at startup; registry construction errors are returned to
//! `main` instead of panicking.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use helmdemo_core::error::Result;
use helmdemo_core::metrics::Registry;

use crate::config::AppConfig;
use crate::obs;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<Registry>,
}

struct AppStateInner {
    cfg: AppConfig,
    draining: AtomicBool,
}

impl AppState {
    pub fn new(cfg: AppConfig) -> Result<Self> {
        let metrics = obs::build_registry()?;
        tracing::debug!(counters = metrics.len(), "metrics registry built");

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                draining: AtomicBool::new(false),
            }),
            metrics: Arc::new(metrics),
        })
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &Registry {
        &self.metrics
    }

    /// Mark draining state (readiness withdrawn).
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }
}
