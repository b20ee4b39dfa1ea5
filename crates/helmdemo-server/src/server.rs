//! Serve loop with readiness drain.
//!
//! On `shutdown`: mark draining, keep serving for `server.drain_grace_ms`
//! (so `/readyz` reports 503 to load balancers), then let axum stop
//! accepting and finish in-flight requests.

use std::future::Future;

use tokio::net::TcpListener;

use helmdemo_core::error::{DemoError, Result};

use crate::{app_state::AppState, router};

pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router::build_router(state.clone());
    let grace = state.cfg().server.drain_grace();

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            state.set_draining();
            tracing::info!(grace_ms = grace.as_millis() as u64, "draining");
            tokio::time::sleep(grace).await;
        })
        .await
        .map_err(|e| DemoError::Internal(format!("server failed: {e}")))
}
