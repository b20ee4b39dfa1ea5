//! Index page.

use axum::extract::State;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::obs::{HTTP_REQUESTS_TOTAL, INDEX_REQUESTS_TOTAL};

/// `GET /`: greeting text; counts the request on both counters.
pub async fn index(State(state): State<AppState>) -> Result<String, ApiError> {
    let metrics = state.metrics();
    metrics.increment(HTTP_REQUESTS_TOTAL)?;
    metrics.increment(INDEX_REQUESTS_TOTAL)?;

    Ok(state.cfg().server.greeting.clone())
}
