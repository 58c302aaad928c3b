//! Rotating log file writer with size-based rotation and backup retention.
//!
//! The writer plugs into `tracing-subscriber` as a [`MakeWriter`]. When the
//! current file would grow past its size limit, it is renamed with a `chrono`
//! timestamp suffix and a fresh file is started. Only the newest backups are
//! kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Backup suffix format; sorts lexicographically in time order.
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S%3f";

/// Thread-safe rotating file writer.
///
/// # Rotation Strategy
///
/// 1. Track the current file size (seeded from disk when opened)
/// 2. If a write would exceed the limit on a non-empty file, rotate:
///    - Rename the file to `<name>.<timestamp>`
///    - Start a new empty file
///    - Remove the oldest backups beyond the retention limit
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    state: Mutex<WriterState>,
}

#[derive(Default)]
struct WriterState {
    /// Lazily opened on first write.
    file: Option<File>,
    size: u64,
}

impl FileWriter {
    /// Creates a writer with the default limits, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn create(file_path: impl Into<PathBuf>) -> io::Result<Self> {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit size and retention limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn with_limits(file_path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> io::Result<Self> {
        let file_path = file_path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        Ok(Self {
            file_path,
            max_bytes,
            max_backups,
            state: Mutex::new(WriterState::default()),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `buf` to the log file, rotating first if needed.
    fn write_record(&self, buf: &[u8]) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if state.file.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.file_path)?;
            state.size = file.metadata()?.len();
            state.file = Some(file);
        }

        let incoming = buf.len() as u64;
        if state.size > 0 && state.size + incoming > self.max_bytes {
            state.file = None;
            self.rotate_files()?;
            state.file = Some(OpenOptions::new().create(true).append(true).open(&self.file_path)?);
            state.size = 0;
        }

        let file = state
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        file.write_all(buf)?;
        file.flush()?;
        state.size += incoming;
        drop(state);

        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = chrono::Local::now().format(BACKUP_TIMESTAMP_FORMAT);
        let backup_path = PathBuf::from(format!("{}.{timestamp}", self.file_path.display()));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Removes backups beyond the retention limit, oldest first.
    ///
    /// Individual deletion errors are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = match self.file_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;
        let prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        backups.sort_unstable_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl io::Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_record(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a Self;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| name.starts_with("compara.log."))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn creates_parent_directories_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/logs/compara.log");
        let writer = FileWriter::create(&path).unwrap();

        (&writer).write_all(b"first\n").unwrap();
        (&writer).write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn rotates_when_limit_exceeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compara.log");
        let writer = FileWriter::with_limits(&path, 10, 3).unwrap();

        (&writer).write_all(b"12345678\n").unwrap();
        (&writer).write_all(b"abcdefgh\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "abcdefgh\n");
        let rotated = backups(dir.path());
        assert_eq!(rotated.len(), 1);
        assert_eq!(fs::read_to_string(dir.path().join(&rotated[0])).unwrap(), "12345678\n");
    }

    #[test]
    fn oversized_record_on_empty_file_is_written_whole() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compara.log");
        let writer = FileWriter::with_limits(&path, 4, 3).unwrap();

        (&writer).write_all(b"longer than four\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "longer than four\n");
        assert!(backups(dir.path()).is_empty());
    }

    #[test]
    fn retention_limit_prunes_old_backups() {
        let dir = tempfile::tempdir().unwrap();
        for stamp in ["20240101000000000", "20240102000000000", "20240103000000000"] {
            fs::write(dir.path().join(format!("compara.log.{stamp}")), "old").unwrap();
        }
        let writer = FileWriter::with_limits(dir.path().join("compara.log"), 1, 2).unwrap();

        (&writer).write_all(b"a").unwrap();
        (&writer).write_all(b"b").unwrap();

        let remaining = backups(dir.path());
        assert_eq!(remaining.len(), 2);
        assert!(!remaining.contains(&"compara.log.20240101000000000".to_string()));
        assert!(!remaining.contains(&"compara.log.20240102000000000".to_string()));
    }
}
