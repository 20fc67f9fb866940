// Positional token -> TelemetryRecord mapping with typed defaults for missing trailing fields.

use crate::models::{FIELD_COUNT, FIELD_NAMES, TelemetryRecord};

/// A line was rejected because one of its tokens is not a number.
/// The whole line is dropped; no partial record is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field {field} (column {index}) is not a number: '{token}'")]
pub struct RecordRejected {
    pub index: usize,
    pub field: &'static str,
    pub token: String,
}

/// Maps one data line's tokens onto the 16 telemetry fields.
/// `ordinal` is the line's position among processed data lines and seeds the `time` default.
/// Tokens past the last field are ignored.
pub fn map_record(tokens: &[&str], ordinal: usize) -> Result<TelemetryRecord, RecordRejected> {
    let mut fields = [0.0; FIELD_COUNT];
    for (index, slot) in fields.iter_mut().enumerate() {
        *slot = match tokens.get(index) {
            Some(raw) => raw.trim().parse::<f64>().map_err(|_| RecordRejected {
                index,
                field: FIELD_NAMES[index],
                token: (*raw).to_string(),
            })?,
            None => TelemetryRecord::default_field(index, ordinal),
        };
    }
    Ok(TelemetryRecord::from_fields(fields))
}
