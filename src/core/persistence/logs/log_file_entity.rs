//! Per-request views over the log directory. Nothing here is cached; the
//! directory is externally mutable, so every request recomputes these.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One directory entry from a single listing pass.
#[derive(Debug, Clone, Serialize)]
pub struct LogFileDescriptor {
    pub name: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub created: DateTime<Utc>,
}

/// Full content of one log file plus the metadata shown alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogFileContent {
    pub filename: String,
    pub content: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub lines: usize,
}

impl LogFileContent {
    pub fn new(filename: String, content: String, size: u64, modified: DateTime<Utc>) -> Self {
        let lines = line_count(&content);
        Self {
            filename,
            content,
            size,
            modified,
            lines,
        }
    }
}

/// Count of `\n`-delimited segments. An empty file counts as one empty line,
/// and a trailing newline contributes a trailing empty segment.
pub fn line_count(content: &str) -> usize {
    content.split('\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_is_segment_count() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("a"), 1);
        assert_eq!(line_count("a\nb"), 2);
        assert_eq!(line_count("a\n"), 2);
        assert_eq!(line_count("\n\n"), 3);
    }
}
