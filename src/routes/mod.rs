// HTTP routes for the dashboard UI

mod http;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::inventory::InventoryService;
use crate::secrets_repo::SecretsRepo;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) inventory: Arc<InventoryService>,
    pub(crate) secrets_repo: Arc<SecretsRepo>,
}

pub fn app(inventory: Arc<InventoryService>, secrets_repo: Arc<SecretsRepo>) -> Router {
    let state = AppState {
        inventory,
        secrets_repo,
    };
    Router::new()
        .route("/", get(|| async { "fleetserver: endpoint inventory API" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/endpoints", get(http::api_endpoints_handler)) // GET /api/endpoints
        .route(
            "/api/credentials",
            get(http::get_credentials_handler).put(http::put_credentials_handler),
        ) // GET+PUT /api/credentials
        .route("/api/credentials/path", get(http::credentials_path_handler)) // GET /api/credentials/path
        .route("/api/cache/clear", post(http::clear_cache_handler)) // POST /api/cache/clear
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
