//! Catch-all "running" endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::Uri;
use serde::Serialize;

use crate::AppState;
use crate::error::ApiError;

pub const RUNNING_MESSAGE: &str = "PHP API is running";

#[derive(Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    pub version: String,
}

/// Fallback for every path other than `/health`, regardless of method.
#[tracing::instrument(skip(state))]
pub async fn running(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Json<StatusResponse>, ApiError> {
    let version = state.version.read().await?;

    Ok(Json(StatusResponse {
        message: RUNNING_MESSAGE,
        version,
    }))
}
