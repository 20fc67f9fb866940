// Flight identifiers and stored file names.

use chrono::NaiveDate;

use crate::error::{FlightError, Result};

pub const FLIGHT_ID_FORMAT: &str = "%Y-%m-%d";

const TELEMETRY_EXTENSIONS: &[&str] = &["csv", "txt", "log", "tsv", "dat"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

/// Which asset folder a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Telemetry,
    Video,
}

impl AssetKind {
    pub fn dir_name(&self) -> &'static str {
        match self {
            AssetKind::Telemetry => "telemetry",
            AssetKind::Video => "videos",
        }
    }

    /// Parse a route segment ("telemetry" or "videos").
    pub fn from_segment(s: &str) -> Option<Self> {
        match s {
            "telemetry" => Some(AssetKind::Telemetry),
            "videos" => Some(AssetKind::Video),
            _ => None,
        }
    }

    /// Classify by extension, case-insensitive.
    pub fn for_filename(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
        if TELEMETRY_EXTENSIONS.contains(&ext.as_str()) {
            Some(AssetKind::Telemetry)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(AssetKind::Video)
        } else {
            None
        }
    }
}

/// Accepts `YYYY-MM-DD` that is also a real calendar date.
pub fn validate_flight_id(id: &str) -> Result<()> {
    let shaped = id.len() == 10
        && id.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if shaped && NaiveDate::parse_from_str(id, FLIGHT_ID_FORMAT).is_ok() {
        Ok(())
    } else {
        Err(FlightError::Format(id.to_string()))
    }
}

/// Today's local date as a flight id.
pub fn today_flight_id() -> String {
    chrono::Local::now().format(FLIGHT_ID_FORMAT).to_string()
}

/// Reject anything that is not a plain file name (separators, `..`, hidden files).
pub fn validate_filename(name: &str) -> Result<()> {
    let ok = !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\', '\0'])
        && name != "..";
    if ok {
        Ok(())
    } else {
        Err(FlightError::InvalidUpload(format!("bad file name '{}'", name)))
    }
}
