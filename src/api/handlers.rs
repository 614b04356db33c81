//! API Handlers
//!
//! HTTP request handlers for each greeting service endpoint. Every
//! handler is a thin pass-through to the injected store handle.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::error::{AppError, Result};
use crate::models::{HealthResponse, NameParam};
use crate::store::Store;

/// Key under which the single stored name lives in the external store.
pub const NAME_KEY: &str = "name";

/// Application state shared across all handlers.
///
/// Holds the store handle created at startup. The handle is passed
/// explicitly (constructor injection); there is no global client.
#[derive(Clone)]
pub struct AppState {
    /// Shared store handle
    pub store: Arc<dyn Store>,
}

impl AppState {
    /// Creates a new AppState with the given store handle.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

/// Handler for GET /
///
/// Returns the fixed greeting string regardless of store state.
pub async fn root_handler() -> &'static str {
    "Hello World!"
}

/// Handler for POST /hello/{name}
///
/// Validates the name parameter, writes it under the fixed key, then
/// re-reads and returns the stored value. The re-read (rather than
/// echoing the input) preserves the original contract: under concurrent
/// writes the response can reflect another caller's write, last write
/// wins.
pub async fn set_name_handler(
    State(state): State<AppState>,
    Path(params): Path<NameParam>,
) -> Result<String> {
    // Validation runs before any store call; a rejected request leaves
    // the stored value untouched.
    if let Some(error_msg) = params.validate() {
        return Err(AppError::InvalidName(error_msg));
    }

    state.store.set(NAME_KEY, &params.name).await?;
    let value = state.store.get(NAME_KEY).await?;

    Ok(value.unwrap_or_default())
}

/// Handler for GET /hello
///
/// Returns the current stored value, or an empty body if never set.
pub async fn get_name_handler(State(state): State<AppState>) -> Result<String> {
    let value = state.store.get(NAME_KEY).await?;
    Ok(value.unwrap_or_default())
}

/// Handler for GET /liveness
///
/// Always reports healthy, independent of store reachability.
pub async fn liveness_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /readiness
///
/// Pings the injected store handle; reports 503 when the dependency is
/// unreachable so the orchestration layer stops routing traffic here.
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::healthy())),
        Err(err) => {
            warn!("Readiness probe failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unavailable()),
            )
        }
    }
}
