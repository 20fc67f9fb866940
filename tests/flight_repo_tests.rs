// FlightRepo tests: listing, summaries, raw files, uploads, deletes, bulk import

mod common;

use common::{seeded_repo, write_asset};
use flightdeck::error::FlightError;
use flightdeck::flight_repo::{AssetKind, FlightRepo};
use flightdeck::models::FlightStatus;
use tempfile::TempDir;

#[test]
fn list_flights_newest_first_and_ignores_non_dates() {
    let (dir, repo) = seeded_repo();
    std::fs::create_dir_all(dir.path().join("not-a-flight")).unwrap();
    std::fs::write(dir.path().join("2024-01-01"), "a file, not a folder").unwrap();

    let flights = repo.list_flights().unwrap();
    let ids: Vec<&str> = flights.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["2024-03-16", "2024-03-15"]);
}

#[test]
fn missing_data_root_lists_nothing() {
    let dir = TempDir::new().unwrap();
    let repo = FlightRepo::new(dir.path().join("absent"));
    assert!(repo.list_flights().unwrap().is_empty());
}

#[test]
fn get_flight_summarizes_assets() {
    let (_dir, repo) = seeded_repo();
    let s = repo.get_flight("2024-03-15").unwrap();
    assert_eq!(s.telemetry_files, vec!["a.csv", "b.txt"]);
    assert_eq!(s.videos, vec!["cam1.mp4"]);
    assert_eq!(s.cameras, 1);
    assert_eq!(s.duration, 0.3);
    assert_eq!(s.status, FlightStatus::Success);

    let only = repo.get_flight("2024-03-16").unwrap();
    assert_eq!(only.status, FlightStatus::Partial);
    assert_eq!(only.duration, 1.0);
}

#[test]
fn load_telemetry_merges_files_by_time() {
    let (_dir, repo) = seeded_repo();
    let merged = repo.load_telemetry("2024-03-15").unwrap();
    let alts: Vec<f64> = merged.records.iter().map(|r| r.altitude).collect();
    assert_eq!(alts, vec![10.0, 20.0, 30.0, 40.0]);
}

#[test]
fn bad_id_is_format_error_and_unknown_is_not_found() {
    let (_dir, repo) = seeded_repo();
    assert!(matches!(
        repo.get_flight("15-03-2024"),
        Err(FlightError::Format(_))
    ));
    assert!(matches!(
        repo.get_flight("2023-01-01"),
        Err(FlightError::NotFound(_))
    ));
}

#[test]
fn raw_telemetry_returns_unparsed_content() {
    let (_dir, repo) = seeded_repo();
    let raw = repo.raw_telemetry("2024-03-15").unwrap();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0].filename, "a.csv");
    assert!(raw[0].content.starts_with("time,alt,vel"));
}

#[test]
fn empty_flight_folder_is_pending() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("2024-05-01")).unwrap();
    let repo = FlightRepo::new(dir.path());
    let s = repo.get_flight("2024-05-01").unwrap();
    assert_eq!(s.status, FlightStatus::Pending);
    assert_eq!(s.duration, 0.0);
}

#[test]
fn hidden_files_are_not_listed() {
    let (dir, repo) = seeded_repo();
    write_asset(dir.path(), "2024-03-15", "videos", ".DS_Store", "junk");
    assert_eq!(repo.list_videos("2024-03-15").unwrap(), vec!["cam1.mp4"]);
}

#[test]
fn save_creates_flight_and_checks_extension() {
    let dir = TempDir::new().unwrap();
    let repo = FlightRepo::new(dir.path());
    repo.save_telemetry("2024-06-01", "log.csv", b"0,1\n").unwrap();
    repo.save_video("2024-06-01", "cam.MP4", b"x").unwrap();
    assert_eq!(
        repo.get_flight("2024-06-01").unwrap().status,
        FlightStatus::Success
    );

    assert!(matches!(
        repo.save_video("2024-06-01", "log.csv", b"x"),
        Err(FlightError::InvalidUpload(_))
    ));
    assert!(matches!(
        repo.save_telemetry("2024-06-01", "../escape.csv", b"x"),
        Err(FlightError::InvalidUpload(_))
    ));
    assert!(matches!(
        repo.save_telemetry("june", "log.csv", b"x"),
        Err(FlightError::Format(_))
    ));
}

#[test]
fn delete_file_and_flight() {
    let (dir, repo) = seeded_repo();
    repo.delete_file("2024-03-15", AssetKind::Video, "cam1.mp4")
        .unwrap();
    assert_eq!(
        repo.get_flight("2024-03-15").unwrap().status,
        FlightStatus::Partial
    );
    assert!(matches!(
        repo.delete_file("2024-03-15", AssetKind::Video, "cam1.mp4"),
        Err(FlightError::NotFound(_))
    ));

    repo.delete_flight("2024-03-15").unwrap();
    assert!(!dir.path().join("2024-03-15").exists());
    assert!(matches!(
        repo.delete_flight("2024-03-15"),
        Err(FlightError::NotFound(_))
    ));
}

#[test]
fn video_path_resolves_existing_file_only() {
    let (_dir, repo) = seeded_repo();
    assert!(repo.video_path("2024-03-15", "cam1.mp4").unwrap().is_file());
    assert!(repo.video_path("2024-03-15", "cam9.mp4").is_err());
    assert!(repo.video_path("2024-03-15", "../videos/cam1.mp4").is_err());
}

#[test]
fn import_copies_known_files_and_skips_others() {
    let source = TempDir::new().unwrap();
    let nested = source.path().join("sd").join("DCIM");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(source.path().join("flight.csv"), "0,1\n0.1,2\n").unwrap();
    std::fs::write(nested.join("front.mp4"), "video").unwrap();
    std::fs::write(source.path().join("notes.pdf"), "pdf").unwrap();

    let data = TempDir::new().unwrap();
    let repo = FlightRepo::new(data.path()).with_import_root(source.path());
    let report = repo
        .import_directory(source.path(), "2024-07-04")
        .unwrap();

    assert_eq!(report.flight_id, "2024-07-04");
    assert!(report.errors.is_empty());
    assert_eq!(report.skipped, vec!["notes.pdf"]);
    assert!(report.imported.contains(&"telemetry/flight.csv".to_string()));
    assert!(report.imported.contains(&"videos/front.mp4".to_string()));

    let s = repo.get_flight("2024-07-04").unwrap();
    assert_eq!(s.status, FlightStatus::Success);
    assert_eq!(s.duration, 0.1);
}

#[test]
fn import_rejects_missing_source_and_bad_id() {
    let data = TempDir::new().unwrap();
    let repo = FlightRepo::new(data.path()).with_import_root(data.path());
    assert!(matches!(
        repo.import_directory(&data.path().join("nope"), "2024-07-04"),
        Err(FlightError::NotFound(_))
    ));
    assert!(matches!(
        repo.import_directory(data.path(), "today"),
        Err(FlightError::Format(_))
    ));
}

#[test]
fn import_from_data_root_does_not_copy_into_itself() {
    let (dir, repo) = seeded_repo();
    let repo = repo.with_import_root(dir.path());
    let report = repo.import_directory(dir.path(), "2024-03-15").unwrap();
    assert!(report.errors.is_empty());
    // Files of 2024-03-16 are pulled in; 2024-03-15's own files are left alone.
    assert_eq!(report.imported, vec!["telemetry/only.csv"]);
    let raw = repo.raw_telemetry("2024-03-15").unwrap();
    assert_eq!(raw.len(), 3);
    assert!(raw[0].content.starts_with("time,alt,vel"));
}

#[test]
fn import_through_parent_alias_keeps_destination_files_intact() {
    let (dir, repo) = seeded_repo();
    let repo = repo.with_import_root(dir.path());
    let alias = dir.path().join("2024-03-16").join("..");
    let before = std::fs::read_to_string(dir.path().join("2024-03-15/telemetry/a.csv")).unwrap();

    let report = repo.import_directory(&alias, "2024-03-15").unwrap();

    assert!(report.errors.is_empty());
    assert_eq!(report.imported, vec!["telemetry/only.csv"]);
    let after = std::fs::read_to_string(dir.path().join("2024-03-15/telemetry/a.csv")).unwrap();
    assert_eq!(after, before);
    assert_eq!(repo.load_telemetry("2024-03-15").unwrap().records.len(), 5);
}

#[test]
fn import_refused_without_import_root() {
    let source = TempDir::new().unwrap();
    std::fs::write(source.path().join("run.csv"), "0,1\n").unwrap();
    let data = TempDir::new().unwrap();
    let repo = FlightRepo::new(data.path());
    assert!(matches!(
        repo.import_directory(source.path(), "2024-07-04"),
        Err(FlightError::Forbidden(_))
    ));
}

#[test]
fn import_refused_outside_import_root() {
    let allowed = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    std::fs::write(outside.path().join("secret.log"), "1 2 3\n").unwrap();
    let data = TempDir::new().unwrap();
    let repo = FlightRepo::new(data.path()).with_import_root(allowed.path());

    let escape = allowed.path().join("..").join(outside.path().file_name().unwrap());
    assert!(matches!(
        repo.import_directory(&escape, "2024-07-04"),
        Err(FlightError::Forbidden(_))
    ));
    assert!(matches!(
        repo.import_directory(outside.path(), "2024-07-04"),
        Err(FlightError::Forbidden(_))
    ));
    assert!(!data.path().join("2024-07-04").exists());
}

#[cfg(unix)]
#[test]
fn import_does_not_follow_symlinked_folders() {
    let source = TempDir::new().unwrap();
    std::fs::write(source.path().join("run.csv"), "0,1\n").unwrap();
    std::os::unix::fs::symlink(source.path(), source.path().join("loop")).unwrap();
    let data = TempDir::new().unwrap();
    let repo = FlightRepo::new(data.path()).with_import_root(source.path());

    let report = repo.import_directory(source.path(), "2024-07-04").unwrap();

    assert_eq!(report.imported, vec!["telemetry/run.csv"]);
    assert_eq!(report.skipped, vec!["loop"]);
    assert!(report.errors.is_empty());
}
