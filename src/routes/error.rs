// Maps FlightError onto HTTP status codes with a JSON `{"error": ...}` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::FlightError;

#[derive(Debug)]
pub(crate) enum ApiError {
    Flight(FlightError),
    BadRequest(String),
    Internal(String),
}

impl From<FlightError> for ApiError {
    fn from(e: FlightError) -> Self {
        ApiError::Flight(e)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Flight(FlightError::Format(_))
            | ApiError::Flight(FlightError::InvalidUpload(_))
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Flight(FlightError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Flight(FlightError::Forbidden(_)) => StatusCode::FORBIDDEN,
            ApiError::Flight(FlightError::Io { .. }) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Flight(e) => e.to_string(),
            ApiError::BadRequest(m) | ApiError::Internal(m) => m.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            tracing::error!(%status, "{}", message);
        } else {
            tracing::debug!(%status, "{}", message);
        }
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
