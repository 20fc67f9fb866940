// Per-file parsing: sniff line 0, map every non-blank data line, collect skip warnings.
// Malformed lines never abort a file; only an unreadable file is an error.

use std::path::Path;

use tracing::warn;

use super::mapper::map_record;
use super::sniff::sniff_format;
use crate::error::{FlightError, Result};
use crate::models::TelemetryRecord;

/// Records in file order plus one warning per rejected line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFile {
    pub records: Vec<TelemetryRecord>,
    pub warnings: Vec<String>,
}

pub fn parse_content(content: &str) -> ParsedFile {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let lines: Vec<&str> = content.lines().collect();
    let Some(first) = lines.first() else {
        return ParsedFile::default();
    };

    let format = sniff_format(first);
    let mut parsed = ParsedFile::default();
    let mut ordinal = 0usize;

    for (line_idx, line) in lines.iter().enumerate().skip(format.start_index) {
        if line.trim().is_empty() {
            continue;
        }
        let tokens = format.delimiter.tokenize(line);
        match map_record(&tokens, ordinal) {
            Ok(record) => parsed.records.push(record),
            Err(rejected) => {
                let line_no = line_idx + 1;
                warn!(line = line_no, reason = %rejected, "skipping telemetry line");
                parsed
                    .warnings
                    .push(format!("line {}: could not parse '{}'", line_no, line));
            }
        }
        ordinal += 1;
    }

    parsed
}

/// Read and parse one file. The handle is scoped to the read; invalid UTF-8 is replaced lossily.
pub fn parse_file(path: &Path) -> Result<ParsedFile> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FlightError::NotFound(path.display().to_string()),
        _ => FlightError::io(path, e),
    })?;
    let parsed = parse_content(&String::from_utf8_lossy(&bytes));
    if !parsed.warnings.is_empty() {
        warn!(
            file = %path.display(),
            skipped = parsed.warnings.len(),
            kept = parsed.records.len(),
            "telemetry file had malformed lines"
        );
    }
    Ok(parsed)
}
