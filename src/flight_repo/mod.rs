// On-disk flight store: <data_root>/<YYYY-MM-DD>/{videos,telemetry}/<file>.
// Synchronous std::fs; async callers wrap calls in spawn_blocking. Reads are recomputed per call.

mod ids;

pub use ids::{
    AssetKind, FLIGHT_ID_FORMAT, today_flight_id, validate_filename, validate_flight_id,
};

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::error::{FlightError, Result};
use crate::flight::{FlightAggregate, aggregate};
use crate::models::{FlightSummary, ImportReport, RawTelemetryFile};
use crate::telemetry::parse_file;

#[derive(Debug, Clone)]
pub struct FlightRepo {
    data_root: PathBuf,
    import_root: Option<PathBuf>,
}

impl FlightRepo {
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
            import_root: None,
        }
    }

    /// Allow bulk import from folders under `root`. Without it, import is refused.
    pub fn with_import_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.import_root = Some(root.into());
        self
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Folder for `id` (validated, may not exist yet).
    pub fn flight_dir(&self, id: &str) -> Result<PathBuf> {
        validate_flight_id(id)?;
        Ok(self.data_root.join(id))
    }

    fn existing_flight_dir(&self, id: &str) -> Result<PathBuf> {
        let dir = self.flight_dir(id)?;
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(FlightError::NotFound(format!("flight {}", id)))
        }
    }

    fn asset_dir(&self, id: &str, kind: AssetKind) -> Result<PathBuf> {
        Ok(self.existing_flight_dir(id)?.join(kind.dir_name()))
    }

    /// Ids of every dated folder under the data root, newest first.
    pub fn list_flight_ids(&self) -> Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.data_root) {
            Ok(e) => e,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(FlightError::io(&self.data_root, e)),
        };
        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FlightError::io(&self.data_root, e))?;
            if !entry.path().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if validate_flight_id(&name).is_ok() {
                ids.push(name);
            }
        }
        ids.sort_unstable_by(|a, b| b.cmp(a));
        Ok(ids)
    }

    #[instrument(skip(self), fields(repo = "flights", operation = "list_flights"))]
    pub fn list_flights(&self) -> Result<Vec<FlightSummary>> {
        let mut out = Vec::new();
        for id in self.list_flight_ids()? {
            match self.get_flight(&id) {
                Ok(summary) => out.push(summary),
                Err(e) => warn!(flight = %id, error = %e, "skipping unreadable flight"),
            }
        }
        Ok(out)
    }

    pub fn get_flight(&self, id: &str) -> Result<FlightSummary> {
        Ok(self.load_telemetry(id)?.summary)
    }

    /// Parse every telemetry file of the flight and merge them.
    #[instrument(skip(self), fields(repo = "flights", operation = "load_telemetry"))]
    pub fn load_telemetry(&self, id: &str) -> Result<FlightAggregate> {
        let telemetry_dir = self.asset_dir(id, AssetKind::Telemetry)?;
        let telemetry_files = list_files(&telemetry_dir)?;
        let videos = self.list_videos(id)?;

        let mut parsed = Vec::with_capacity(telemetry_files.len());
        for name in &telemetry_files {
            parsed.push(parse_file(&telemetry_dir.join(name))?);
        }
        Ok(aggregate(id, parsed, &videos, &telemetry_files))
    }

    pub fn list_videos(&self, id: &str) -> Result<Vec<String>> {
        list_files(&self.asset_dir(id, AssetKind::Video)?)
    }

    pub fn list_telemetry_files(&self, id: &str) -> Result<Vec<String>> {
        list_files(&self.asset_dir(id, AssetKind::Telemetry)?)
    }

    /// Unparsed file contents in listing order.
    pub fn raw_telemetry(&self, id: &str) -> Result<Vec<RawTelemetryFile>> {
        let dir = self.asset_dir(id, AssetKind::Telemetry)?;
        let mut out = Vec::new();
        for filename in list_files(&dir)? {
            let path = dir.join(&filename);
            let bytes = std::fs::read(&path).map_err(|e| FlightError::io(&path, e))?;
            out.push(RawTelemetryFile {
                filename,
                content: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(out)
    }

    /// Path of an existing stored asset.
    pub fn asset_path(&self, id: &str, kind: AssetKind, filename: &str) -> Result<PathBuf> {
        validate_filename(filename)?;
        let path = self.asset_dir(id, kind)?.join(filename);
        if path.is_file() {
            Ok(path)
        } else {
            Err(FlightError::NotFound(format!(
                "{}/{}/{}",
                id,
                kind.dir_name(),
                filename
            )))
        }
    }

    pub fn video_path(&self, id: &str, filename: &str) -> Result<PathBuf> {
        self.asset_path(id, AssetKind::Video, filename)
    }

    /// Checks an upload's flight id, file name and extension without writing anything.
    pub fn validate_upload(&self, id: &str, kind: AssetKind, filename: &str) -> Result<()> {
        validate_flight_id(id)?;
        validate_filename(filename)?;
        if AssetKind::for_filename(filename) != Some(kind) {
            return Err(FlightError::InvalidUpload(format!(
                "'{}' is not an accepted {} file",
                filename,
                kind.dir_name()
            )));
        }
        Ok(())
    }

    /// Store an uploaded file, creating the flight folder on first upload.
    #[instrument(skip(self, bytes), fields(repo = "flights", operation = "save_file", size = bytes.len()))]
    pub fn save_file(
        &self,
        id: &str,
        kind: AssetKind,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String> {
        self.validate_upload(id, kind, filename)?;
        let dir = self.flight_dir(id)?.join(kind.dir_name());
        std::fs::create_dir_all(&dir).map_err(|e| FlightError::io(&dir, e))?;
        let path = dir.join(filename);
        std::fs::write(&path, bytes).map_err(|e| FlightError::io(&path, e))?;
        info!(flight = %id, file = %filename, "stored upload");
        Ok(filename.to_string())
    }

    pub fn save_telemetry(&self, id: &str, filename: &str, bytes: &[u8]) -> Result<String> {
        self.save_file(id, AssetKind::Telemetry, filename, bytes)
    }

    pub fn save_video(&self, id: &str, filename: &str, bytes: &[u8]) -> Result<String> {
        self.save_file(id, AssetKind::Video, filename, bytes)
    }

    #[instrument(skip(self), fields(repo = "flights", operation = "delete_flight"))]
    pub fn delete_flight(&self, id: &str) -> Result<()> {
        let dir = self.existing_flight_dir(id)?;
        std::fs::remove_dir_all(&dir).map_err(|e| FlightError::io(&dir, e))?;
        info!(flight = %id, "deleted flight");
        Ok(())
    }

    pub fn delete_file(&self, id: &str, kind: AssetKind, filename: &str) -> Result<()> {
        let path = self.asset_path(id, kind, filename)?;
        std::fs::remove_file(&path).map_err(|e| FlightError::io(&path, e))?;
        info!(flight = %id, file = %filename, "deleted file");
        Ok(())
    }

    /// Copy every telemetry/video file found under `source` into flight `id`.
    /// `source` must resolve inside the import root. Unknown extensions are skipped;
    /// per-file failures are collected and the walk continues. Symlinked folders are not followed.
    #[instrument(skip(self), fields(repo = "flights", operation = "import_directory"))]
    pub fn import_directory(&self, source: &Path, id: &str) -> Result<ImportReport> {
        let flight_dir = self.flight_dir(id)?;
        let source = self.resolve_import_source(source)?;

        std::fs::create_dir_all(&flight_dir).map_err(|e| FlightError::io(&flight_dir, e))?;
        let flight_dir =
            std::fs::canonicalize(&flight_dir).map_err(|e| FlightError::io(&flight_dir, e))?;

        let mut report = ImportReport {
            flight_id: id.to_string(),
            ..Default::default()
        };
        let mut pending = vec![source.clone()];
        while let Some(dir) = pending.pop() {
            let mut entries: Vec<(PathBuf, std::fs::FileType)> = match std::fs::read_dir(&dir) {
                Ok(rd) => rd
                    .filter_map(|e| e.ok())
                    .filter_map(|e| e.file_type().ok().map(|ft| (e.path(), ft)))
                    .collect(),
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "import: cannot read directory");
                    report.errors.push(format!("{}: {}", dir.display(), e));
                    continue;
                }
            };
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (path, file_type) in entries {
                let rel = path
                    .strip_prefix(&source)
                    .unwrap_or(path.as_path())
                    .display()
                    .to_string();
                if file_type.is_dir() {
                    // Never walk into the destination (source may be the data root).
                    if !path.starts_with(&flight_dir) {
                        pending.push(path);
                    }
                    continue;
                }
                if file_type.is_symlink() && !path.is_file() {
                    report.skipped.push(rel);
                    continue;
                }
                let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                    report.skipped.push(rel);
                    continue;
                };
                let kind = match AssetKind::for_filename(name) {
                    Some(k) if !name.starts_with('.') => k,
                    _ => {
                        report.skipped.push(rel);
                        continue;
                    }
                };
                // A file already inside the destination would be copied onto itself.
                match std::fs::canonicalize(&path) {
                    Ok(resolved) if resolved.starts_with(&flight_dir) => continue,
                    Ok(_) => {}
                    Err(e) => {
                        report.errors.push(format!("{}: {}", rel, e));
                        continue;
                    }
                }
                let target_dir = flight_dir.join(kind.dir_name());
                let copied = std::fs::create_dir_all(&target_dir)
                    .and_then(|_| std::fs::copy(&path, target_dir.join(name)));
                match copied {
                    Ok(_) => report
                        .imported
                        .push(format!("{}/{}", kind.dir_name(), name)),
                    Err(e) => {
                        warn!(file = %rel, error = %e, "import: copy failed");
                        report.errors.push(format!("{}: {}", rel, e));
                    }
                }
            }
        }
        info!(
            flight = %id,
            imported = report.imported.len(),
            skipped = report.skipped.len(),
            errors = report.errors.len(),
            "import finished"
        );
        Ok(report)
    }

    /// Resolved import source, refused unless it lies under the import root.
    fn resolve_import_source(&self, source: &Path) -> Result<PathBuf> {
        let Some(root) = &self.import_root else {
            return Err(FlightError::Forbidden("import is disabled".into()));
        };
        let resolved = std::fs::canonicalize(source)
            .map_err(|_| FlightError::NotFound(source.display().to_string()))?;
        if !resolved.is_dir() {
            return Err(FlightError::NotFound(source.display().to_string()));
        }
        let root = std::fs::canonicalize(root).map_err(|e| FlightError::io(root, e))?;
        if !resolved.starts_with(&root) {
            warn!(source = %resolved.display(), "import: source outside import root");
            return Err(FlightError::Forbidden(format!(
                "{} is outside the import root",
                source.display()
            )));
        }
        Ok(resolved)
    }
}

/// Regular, non-hidden file names in `dir`, sorted. A missing folder is empty.
fn list_files(dir: &Path) -> Result<Vec<String>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
        Err(e) => return Err(FlightError::io(dir, e)),
    };
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FlightError::io(dir, e))?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) if !name.starts_with('.') => names.push(name.to_string()),
            _ => {}
        }
    }
    names.sort();
    Ok(names)
}
