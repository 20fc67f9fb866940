// HTTP routes: flight queries, uploads, import, static dashboard

mod error;
mod http;
mod upload;

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::AppConfig;
use crate::flight_repo::FlightRepo;

pub(crate) use error::ApiError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) repo: Arc<FlightRepo>,
}

pub fn app(repo: Arc<FlightRepo>, config: AppConfig) -> Router {
    let state = AppState { repo };
    let router = Router::new()
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/flights", get(http::list_flights)) // GET /api/flights
        .route(
            "/api/flights/{id}",
            get(http::get_flight).delete(upload::delete_flight),
        ) // GET, DELETE /api/flights/{id}
        .route("/api/flights/{id}/telemetry", post(upload::upload_telemetry))
        .route("/api/flights/{id}/videos", post(upload::upload_videos))
        .route(
            "/api/flights/{id}/telemetry/{filename}",
            axum::routing::delete(upload::delete_telemetry_file),
        )
        .route(
            "/api/flights/{id}/videos/{filename}",
            get(http::get_video).delete(upload::delete_video),
        )
        .route("/api/telemetry/{id}", get(http::get_telemetry)) // merged, sorted records
        .route("/api/telemetry/{id}/raw", get(http::get_raw_telemetry)) // unparsed files
        .route("/api/import", post(upload::import))
        .layer(DefaultBodyLimit::max(config.storage.max_upload_bytes()))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state);

    match config.storage.static_dir.as_deref() {
        Some(dir) => router.fallback_service(spa_service(Path::new(dir))),
        None => router,
    }
}

/// Serve built assets; unknown paths fall back to index.html for client-side routing.
fn spa_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

/// Run a blocking flight store call off the async runtime.
pub(crate) async fn with_repo<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&FlightRepo) -> crate::error::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let repo = state.repo.clone();
    tokio::task::spawn_blocking(move || f(&repo))
        .await
        .map_err(|e| ApiError::Internal(format!("flight store task join: {}", e)))?
        .map_err(ApiError::from)
}
