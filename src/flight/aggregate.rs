// Merge per-file telemetry into one time-sorted sequence and derive the flight summary.
// Pure: asset lists come from the flight store, nothing here touches the filesystem.

use crate::models::{FlightStatus, FlightSummary, TelemetryRecord};
use crate::telemetry::ParsedFile;

/// Summary plus the merged records (served separately by the telemetry endpoint).
#[derive(Debug, Clone, PartialEq)]
pub struct FlightAggregate {
    pub summary: FlightSummary,
    pub records: Vec<TelemetryRecord>,
    /// Warnings from every file, in file order.
    pub warnings: Vec<String>,
}

/// success = both assets present, partial = exactly one, pending = neither.
pub fn classify_status(has_telemetry: bool, has_videos: bool) -> FlightStatus {
    match (has_telemetry, has_videos) {
        (true, true) => FlightStatus::Success,
        (false, false) => FlightStatus::Pending,
        _ => FlightStatus::Partial,
    }
}

/// Order-preserving dedup.
pub fn distinct(names: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for n in names {
        if !out.contains(n) {
            out.push(n.clone());
        }
    }
    out
}

/// `files` must be in directory-listing order; ties on `time` keep that order (stable sort).
pub fn aggregate(
    flight_id: &str,
    files: Vec<ParsedFile>,
    videos: &[String],
    telemetry_files: &[String],
) -> FlightAggregate {
    let mut records = Vec::new();
    let mut warnings = Vec::new();
    for file in files {
        records.extend(file.records);
        warnings.extend(file.warnings);
    }
    records.sort_by(|a, b| a.time.total_cmp(&b.time));

    let duration = records
        .iter()
        .map(|r| r.time)
        .fold(None, |acc: Option<f64>, t| Some(acc.map_or(t, |m| m.max(t))))
        .unwrap_or(0.0);

    let videos = distinct(videos);
    let telemetry_files = distinct(telemetry_files);
    let has_telemetry = !telemetry_files.is_empty();
    let status = classify_status(has_telemetry, !videos.is_empty());

    FlightAggregate {
        summary: FlightSummary {
            id: flight_id.to_string(),
            date: flight_id.to_string(),
            duration,
            cameras: videos.len(),
            videos,
            telemetry_files,
            has_telemetry,
            status,
        },
        records,
        warnings,
    }
}
