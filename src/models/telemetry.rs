// Normalized telemetry sample (16 fixed positional fields)

use serde::{Deserialize, Serialize};

/// Number of positional fields in a telemetry line.
pub const FIELD_COUNT: usize = 16;

/// JSON field names in positional order.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "time",
    "altitude",
    "velocity",
    "horizontalVelocity",
    "acceleration",
    "accelerationX",
    "accelerationY",
    "accelerationZ",
    "temperature",
    "pressure",
    "humidity",
    "gpsLat",
    "gpsLon",
    "pitch",
    "roll",
    "yaw",
];

/// One sample at a point in time. Serializes with the dashboard's camelCase names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryRecord {
    pub time: f64,
    pub altitude: f64,
    pub velocity: f64,
    pub horizontal_velocity: f64,
    pub acceleration: f64,
    pub acceleration_x: f64,
    pub acceleration_y: f64,
    pub acceleration_z: f64,
    pub temperature: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub gps_lat: f64,
    pub gps_lon: f64,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

impl TelemetryRecord {
    /// Default for the field at `index` when the line has no token there.
    /// `time` falls back to the line's ordinal (10 Hz spacing).
    pub fn default_field(index: usize, ordinal: usize) -> f64 {
        match index {
            0 => ordinal as f64 * 0.1,
            8 => 20.0,
            9 => 101.3,
            10 => 50.0,
            _ => 0.0,
        }
    }

    /// Record with every field at its default for line `ordinal`.
    pub fn with_defaults(ordinal: usize) -> Self {
        let mut fields = [0.0; FIELD_COUNT];
        for (i, slot) in fields.iter_mut().enumerate() {
            *slot = Self::default_field(i, ordinal);
        }
        Self::from_fields(fields)
    }

    pub fn from_fields(f: [f64; FIELD_COUNT]) -> Self {
        Self {
            time: f[0],
            altitude: f[1],
            velocity: f[2],
            horizontal_velocity: f[3],
            acceleration: f[4],
            acceleration_x: f[5],
            acceleration_y: f[6],
            acceleration_z: f[7],
            temperature: f[8],
            pressure: f[9],
            humidity: f[10],
            gps_lat: f[11],
            gps_lon: f[12],
            pitch: f[13],
            roll: f[14],
            yaw: f[15],
        }
    }

    /// Fields in positional order.
    pub fn to_fields(&self) -> [f64; FIELD_COUNT] {
        [
            self.time,
            self.altitude,
            self.velocity,
            self.horizontal_velocity,
            self.acceleration,
            self.acceleration_x,
            self.acceleration_y,
            self.acceleration_z,
            self.temperature,
            self.pressure,
            self.humidity,
            self.gps_lat,
            self.gps_lon,
            self.pitch,
            self.roll,
            self.yaw,
        ]
    }
}
