//! Filesystem access for the log directory. Every I/O failure is translated
//! into a `LogAccessError` at the call site; callers never see `io::Error`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use super::log_access_error::LogAccessError;
use super::log_file_entity::{LogFileContent, LogFileDescriptor};

pub const LOG_FILE_SUFFIX: &str = ".txt";

pub trait LogFileRepository: Send + Sync {
    /// Enumerate the `.txt` entries of the base directory, in whatever order
    /// the filesystem yields them.
    fn list_log_files(&self) -> Result<Vec<LogFileDescriptor>, LogAccessError>;

    /// Read one file. `filename` has already been validated as a plain
    /// `.txt` name; it is joined onto the base directory as a single segment.
    fn read_log_file(&self, filename: &str) -> Result<LogFileContent, LogAccessError>;
}

pub struct LogFileRepositoryImpl {
    base_dir: PathBuf,
}

impl LogFileRepositoryImpl {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn list_error(&self, err: &io::Error) -> LogAccessError {
        LogAccessError::DirectoryList {
            path: self.base_dir.clone(),
            message: err.to_string(),
        }
    }

    fn read_error(filename: &str, path: &Path, err: io::Error) -> LogAccessError {
        match err.kind() {
            // The file can disappear between the existence check and the read.
            io::ErrorKind::NotFound => LogAccessError::NotFound {
                filename: filename.to_string(),
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => LogAccessError::PermissionDenied {
                filename: filename.to_string(),
                path: path.to_path_buf(),
                message: err.to_string(),
            },
            io::ErrorKind::IsADirectory => LogAccessError::IsDirectory {
                filename: filename.to_string(),
                path: path.to_path_buf(),
            },
            _ => LogAccessError::Read {
                filename: filename.to_string(),
                path: path.to_path_buf(),
                code: err.raw_os_error(),
                message: err.to_string(),
            },
        }
    }
}

fn timestamp(time: io::Result<SystemTime>) -> DateTime<Utc> {
    time.map(DateTime::from).unwrap_or(DateTime::UNIX_EPOCH)
}

impl LogFileRepository for LogFileRepositoryImpl {
    fn list_log_files(&self) -> Result<Vec<LogFileDescriptor>, LogAccessError> {
        let entries = fs::read_dir(&self.base_dir).map_err(|e| self.list_error(&e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| self.list_error(&e))?;

            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                tracing::warn!("skipping log entry with non-UTF-8 name: {:?}", entry.path());
                continue;
            };
            if !name.ends_with(LOG_FILE_SUFFIX) {
                continue;
            }

            let meta = entry.metadata().map_err(|e| self.list_error(&e))?;
            let modified = timestamp(meta.modified());
            files.push(LogFileDescriptor {
                name: name.to_string(),
                size: meta.len(),
                modified,
                // Not every filesystem reports a creation time.
                created: meta.created().map(DateTime::from).unwrap_or(modified),
            });
        }

        Ok(files)
    }

    fn read_log_file(&self, filename: &str) -> Result<LogFileContent, LogAccessError> {
        let path = self.base_dir.join(filename);

        if !path.exists() {
            return Err(LogAccessError::NotFound {
                filename: filename.to_string(),
                path,
            });
        }

        let content =
            fs::read_to_string(&path).map_err(|e| Self::read_error(filename, &path, e))?;
        let meta = fs::metadata(&path).map_err(|e| Self::read_error(filename, &path, e))?;

        Ok(LogFileContent::new(
            filename.to_string(),
            content,
            meta.len(),
            timestamp(meta.modified()),
        ))
    }
}
