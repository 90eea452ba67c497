//! Closed set of failures the log store can produce. OS error codes are
//! inspected in the repository and nowhere else; everything downstream maps
//! from these kinds.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogAccessError {
    /// Requested name does not end in `.txt`; rejected before any I/O.
    #[error("Only .txt files are allowed")]
    InvalidFileType { filename: String },

    /// Requested name is not a single path segment; rejected before any I/O.
    #[error("Invalid log file name")]
    InvalidFileName { filename: String },

    #[error("File not found")]
    NotFound { filename: String, path: PathBuf },

    #[error("Permission denied - cannot access file")]
    PermissionDenied {
        filename: String,
        path: PathBuf,
        message: String,
    },

    #[error("Path is a directory, not a file")]
    IsDirectory { filename: String, path: PathBuf },

    /// Any other failure while reading a file.
    #[error("Error reading file")]
    Read {
        filename: String,
        path: PathBuf,
        code: Option<i32>,
        message: String,
    },

    /// The base directory itself could not be enumerated.
    #[error("Error reading logs directory")]
    DirectoryList { path: PathBuf, message: String },
}

impl LogAccessError {
    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::InvalidFileType { filename }
            | Self::InvalidFileName { filename }
            | Self::NotFound { filename, .. }
            | Self::PermissionDenied { filename, .. }
            | Self::IsDirectory { filename, .. }
            | Self::Read { filename, .. } => Some(filename),
            Self::DirectoryList { .. } => None,
        }
    }

    /// The path the failure was observed at, when the filesystem was reached.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::IsDirectory { path, .. }
            | Self::Read { path, .. }
            | Self::DirectoryList { path, .. } => Some(path),
            Self::InvalidFileType { .. } | Self::InvalidFileName { .. } => None,
        }
    }

    /// Underlying OS message, when the failure came from the filesystem.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::PermissionDenied { message, .. }
            | Self::Read { message, .. }
            | Self::DirectoryList { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Raw OS errno, when one was reported.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            Self::Read { code, .. } => *code,
            _ => None,
        }
    }
}
