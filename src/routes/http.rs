// Handlers: version, inventory, credentials, cache clear

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use super::AppState;
use crate::inventory::FetchOutcome;
use crate::models::{Credentials, DashboardStats, Endpoint, EndpointFilter, compute_stats};
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// Wire shape for the inventory route. `source`/`success`/`error` are the
/// flattened view of the three-state fetch outcome, for the UI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct EndpointDataResponse {
    pub success: bool,
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub data: Vec<Endpoint>,
    pub stats: DashboardStats,
}

/// GET /api/endpoints — one fresh fetch cycle. Filter query params narrow
/// `data`; `stats` always describe the full deduplicated list.
pub(super) async fn api_endpoints_handler(
    State(state): State<AppState>,
    Query(filter): Query<EndpointFilter>,
) -> impl IntoResponse {
    let outcome = state.inventory.get_endpoint_data().await;
    let stats = compute_stats(outcome.endpoints());
    let success = outcome.success();
    let source = outcome.source();
    let error = outcome.error().map(str::to_string);

    let mut data = match outcome {
        FetchOutcome::Live(d) | FetchOutcome::Degraded(d, _) | FetchOutcome::Mock(d) => d,
    };
    if !filter.is_empty() {
        data.retain(|ep| filter.matches(ep));
    }

    axum::Json(EndpointDataResponse {
        success,
        source,
        error,
        data,
        stats,
    })
}

/// GET /api/credentials — stored credentials, or 404 with the expected path.
pub(super) async fn get_credentials_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.secrets_repo.load() {
        Some(credentials) => (StatusCode::OK, axum::Json(credentials)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(serde_json::json!({
                "error": "No vendor credentials configured",
                "path": state.secrets_repo.secrets_path().to_string_lossy(),
            })),
        )
            .into_response(),
    }
}

/// PUT /api/credentials — write the secrets file.
pub(super) async fn put_credentials_handler(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> impl IntoResponse {
    match state.secrets_repo.save(&credentials) {
        Ok(()) => (
            StatusCode::OK,
            axum::Json(serde_json::json!({
                "status": "credentials saved",
                "path": state.secrets_repo.secrets_path().to_string_lossy(),
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, operation = "save_credentials", "Failed to save credentials");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(serde_json::json!({
                    "error": format!("failed to save credentials: {e}"),
                })),
            )
                .into_response()
        }
    }
}

/// GET /api/credentials/path — where the secrets file is expected.
pub(super) async fn credentials_path_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "path": state.secrets_repo.secrets_path().to_string_lossy(),
    }))
}

/// POST /api/cache/clear — remove the legacy on-disk cache file.
pub(super) async fn clear_cache_handler(State(state): State<AppState>) -> impl IntoResponse {
    if state.inventory.clear_cache() {
        (
            StatusCode::OK,
            axum::Json(serde_json::json!({ "status": "cache cleared" })),
        )
            .into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(serde_json::json!({ "error": "failed to clear cache" })),
        )
            .into_response()
    }
}
