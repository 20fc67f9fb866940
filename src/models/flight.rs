// Flight summary and collaborator-facing result models

use serde::{Deserialize, Serialize};

/// Completeness of a flight's assets; serializes lowercase ("success", "partial", "pending").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatus {
    Success,
    Partial,
    Pending,
}

impl FlightStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Success => "success",
            FlightStatus::Partial => "partial",
            FlightStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSummary {
    pub id: String,
    pub date: String,
    /// Max `time` over merged records, 0 without telemetry.
    pub duration: f64,
    pub cameras: usize,
    pub videos: Vec<String>,
    pub telemetry_files: Vec<String>,
    pub has_telemetry: bool,
    pub status: FlightStatus,
}

/// Unparsed contents of one telemetry file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTelemetryFile {
    pub filename: String,
    pub content: String,
}

/// Outcome of a bulk import. Per-item failures land in `errors`; the batch keeps going.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub flight_id: String,
    pub imported: Vec<String>,
    pub skipped: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub flight_id: String,
    pub saved: Vec<String>,
    /// Files that passed validation but could not be written.
    #[serde(default)]
    pub errors: Vec<String>,
}
