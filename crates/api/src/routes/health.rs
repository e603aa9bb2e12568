//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::Uri;
use axum::http::uri::PathAndQuery;
use axum::response::{IntoResponse, Response};
use chrono::{Local, SecondsFormat};
use serde::Serialize;

use crate::AppState;
use crate::error::ApiError;
use crate::routes::status;

/// Request target answered with the health body. Compared against path and
/// query together, so `/health?x=1` is not a health check.
pub const HEALTH_TARGET: &str = "/health";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub timestamp: String,
}

/// ANY /health — liveness probe with the deployed version and the current time.
///
/// A `/health` path carrying a query string is served by [`status::running`].
#[tracing::instrument(skip(state))]
pub async fn check(State(state): State<Arc<AppState>>, uri: Uri) -> Result<Response, ApiError> {
    if uri.path_and_query().map(PathAndQuery::as_str) != Some(HEALTH_TARGET) {
        return status::running(State(state), uri)
            .await
            .map(IntoResponse::into_response);
    }

    let version = state.version.read().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version,
        timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
    })
    .into_response())
}
