// Shared test helpers

#![allow(dead_code)]

use flightdeck::flight_repo::FlightRepo;
use std::path::Path;
use tempfile::TempDir;

/// Write `<root>/<id>/<kind>/<name>` with `content`, creating folders.
pub fn write_asset(root: &Path, id: &str, kind: &str, name: &str, content: &str) {
    let dir = root.join(id).join(kind);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(name), content).unwrap();
}

/// Store with one complete flight (two telemetry files + one video) and one telemetry-only flight.
pub fn seeded_repo() -> (TempDir, FlightRepo) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_asset(root, "2024-03-15", "telemetry", "a.csv", "time,alt,vel\n0.0,10,1\n0.2,30,3\n");
    write_asset(root, "2024-03-15", "telemetry", "b.txt", "0.1 20 2\n0.3 40 4\n");
    write_asset(root, "2024-03-15", "videos", "cam1.mp4", "not really a video");
    write_asset(root, "2024-03-16", "telemetry", "only.csv", "1,2,3\n");
    let repo = FlightRepo::new(root);
    (dir, repo)
}
