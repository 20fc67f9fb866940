// Write paths: multipart uploads, bulk import, deletes

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::warn;

use super::{ApiError, AppState, with_repo};
use crate::flight_repo::{AssetKind, today_flight_id, validate_flight_id};
use crate::models::UploadResult;

/// Collect every multipart field that carries a file name.
async fn read_files(mut multipart: Multipart) -> Result<Vec<(String, bytes::Bytes)>, ApiError> {
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("multipart: {}", e)))?
    {
        let Some(name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("multipart: {}", e)))?;
        files.push((name, data));
    }
    if files.is_empty() {
        return Err(ApiError::BadRequest("no file in upload".into()));
    }
    Ok(files)
}

async fn upload(
    state: AppState,
    id: String,
    kind: AssetKind,
    multipart: Multipart,
) -> Result<Json<UploadResult>, ApiError> {
    validate_flight_id(&id)?;
    let files = read_files(multipart).await?;
    let flight_id = id.clone();
    let (saved, errors) = with_repo(&state, move |repo| {
        // Reject the whole batch before writing if any file is unacceptable.
        for (name, _) in &files {
            repo.validate_upload(&id, kind, name)?;
        }
        let mut saved = Vec::with_capacity(files.len());
        let mut errors = Vec::new();
        for (name, data) in &files {
            match repo.save_file(&id, kind, name, data) {
                Ok(stored) => saved.push(stored),
                Err(e) => {
                    warn!(flight = %id, file = %name, error = %e, "upload: write failed");
                    errors.push(format!("{}: {}", name, e));
                }
            }
        }
        Ok((saved, errors))
    })
    .await?;
    Ok(Json(UploadResult {
        flight_id,
        saved,
        errors,
    }))
}

/// POST /api/flights/{id}/telemetry — multipart, one or more telemetry files.
pub(super) async fn upload_telemetry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    upload(state, id, AssetKind::Telemetry, multipart).await
}

/// POST /api/flights/{id}/videos — multipart, one or more video files.
pub(super) async fn upload_videos(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    upload(state, id, AssetKind::Video, multipart).await
}

#[derive(Debug, Deserialize)]
pub(super) struct ImportRequest {
    source: String,
    /// Defaults to today's date.
    #[serde(default)]
    flight_id: Option<String>,
}

/// POST /api/import — copy a local folder tree into a flight; partial success is reported, not failed.
pub(super) async fn import(
    State(state): State<AppState>,
    Json(req): Json<ImportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = req.flight_id.unwrap_or_else(today_flight_id);
    let source = std::path::PathBuf::from(req.source);
    let report = with_repo(&state, move |repo| repo.import_directory(&source, &id)).await?;
    Ok(Json(report))
}

pub(super) async fn delete_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    with_repo(&state, move |repo| repo.delete_flight(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn delete_telemetry_file(
    State(state): State<AppState>,
    Path((id, filename)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    with_repo(&state, move |repo| {
        repo.delete_file(&id, AssetKind::Telemetry, &filename)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn delete_video(
    State(state): State<AppState>,
    Path((id, filename)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    with_repo(&state, move |repo| {
        repo.delete_file(&id, AssetKind::Video, &filename)
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}
