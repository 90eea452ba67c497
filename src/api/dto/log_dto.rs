//! Log API DTOs

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::persistence::logs::log_access_error::LogAccessError;
use crate::core::persistence::logs::log_file_entity::{LogFileContent, LogFileDescriptor};

#[derive(Serialize)]
pub struct LogFileListResponse {
    pub success: bool,
    pub count: usize,
    pub files: Vec<LogFileDescriptor>,
}

impl LogFileListResponse {
    pub fn new(files: Vec<LogFileDescriptor>) -> Self {
        Self {
            success: true,
            count: files.len(),
            files,
        }
    }
}

#[derive(Serialize)]
pub struct LogFileContentResponse {
    pub success: bool,
    pub filename: String,
    pub content: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub lines: usize,
}

impl From<LogFileContent> for LogFileContentResponse {
    fn from(content: LogFileContent) -> Self {
        Self {
            success: true,
            filename: content.filename,
            content: content.content,
            size: content.size,
            modified: content.modified,
            lines: content.lines,
        }
    }
}

/// Failure body shared by every JSON route. `message` is the kind's friendly
/// message; `error` and `code` carry the raw OS detail when one exists, so a
/// caller can debug without access to the server's own logs.
#[derive(Serialize)]
pub struct LogErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

impl From<&LogAccessError> for LogErrorBody {
    fn from(err: &LogAccessError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            filename: err.filename().map(str::to_string),
            path: err.path().map(Path::to_path_buf),
            error: err.detail().map(str::to_string),
            code: err.os_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_omits_absent_fields() {
        let err = LogAccessError::InvalidFileType {
            filename: "a.log".into(),
        };
        let body = serde_json::to_value(LogErrorBody::from(&err)).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Only .txt files are allowed");
        assert_eq!(body["filename"], "a.log");
        assert!(body.get("path").is_none());
        assert!(body.get("code").is_none());
    }

    #[test]
    fn error_body_carries_os_detail() {
        let err = LogAccessError::Read {
            filename: "a.txt".into(),
            path: "/logs/a.txt".into(),
            code: Some(5),
            message: "input/output error".into(),
        };
        let body = serde_json::to_value(LogErrorBody::from(&err)).unwrap();

        assert_eq!(body["path"], "/logs/a.txt");
        assert_eq!(body["error"], "input/output error");
        assert_eq!(body["code"], 5);
    }

    #[test]
    fn list_response_counts_files() {
        let files = vec![LogFileDescriptor {
            name: "a.txt".into(),
            size: 3,
            modified: Utc::now(),
            created: Utc::now(),
        }];
        let body = serde_json::to_value(LogFileListResponse::new(files)).unwrap();

        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 1);
        assert_eq!(body["files"][0]["name"], "a.txt");
    }
}
