// GET handlers: version, flights, telemetry, raw telemetry, video files

use axum::{
    Json,
    extract::{Path, Request, State},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use super::{ApiError, AppState, with_repo};
use crate::version::{NAME, VERSION};

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/flights — every dated flight folder, newest first.
pub(super) async fn list_flights(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let flights = with_repo(&state, |repo| repo.list_flights()).await?;
    Ok(Json(serde_json::json!({ "flights": flights })))
}

pub(super) async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = with_repo(&state, move |repo| repo.get_flight(&id)).await?;
    Ok(Json(summary))
}

/// GET /api/telemetry/{id} — merged records sorted by time, plus skipped-line warnings.
pub(super) async fn get_telemetry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let flight_id = id.clone();
    let merged = with_repo(&state, move |repo| repo.load_telemetry(&id)).await?;
    Ok(Json(serde_json::json!({
        "flight_id": flight_id,
        "data": merged.records,
        "warnings": merged.warnings,
    })))
}

pub(super) async fn get_raw_telemetry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let flight_id = id.clone();
    let files = with_repo(&state, move |repo| repo.raw_telemetry(&id)).await?;
    Ok(Json(serde_json::json!({
        "flight_id": flight_id,
        "files": files,
    })))
}

/// GET /api/flights/{id}/videos/{filename} — streamed with Range support for seeking.
pub(super) async fn get_video(
    State(state): State<AppState>,
    Path((id, filename)): Path<(String, String)>,
    req: Request,
) -> Result<Response, ApiError> {
    let path = with_repo(&state, move |repo| repo.video_path(&id, &filename)).await?;
    match ServeFile::new(path).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(never) => match never {},
    }
}
