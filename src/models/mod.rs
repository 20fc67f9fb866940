// Domain models: telemetry samples, flight summaries, collaborator results

mod flight;
mod telemetry;

pub use flight::{FlightStatus, FlightSummary, ImportReport, RawTelemetryFile, UploadResult};
pub use telemetry::{FIELD_COUNT, FIELD_NAMES, TelemetryRecord};
