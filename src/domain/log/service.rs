//! Log directory service: request validation and delegation to the file
//! store. Validation runs in a fixed order so each failure has exactly one
//! kind: extension first, then path-segment shape, and only then any
//! filesystem access.

use std::path::{Component, Path};

use crate::core::persistence::logs::log_access_error::LogAccessError;
use crate::core::persistence::logs::log_file_entity::{LogFileContent, LogFileDescriptor};
use crate::core::persistence::logs::log_repository::{LogFileRepository, LOG_FILE_SUFFIX};

pub struct LogService<R: LogFileRepository> {
    repo: R,
}

impl<R: LogFileRepository> LogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn list_log_files(&self) -> Result<Vec<LogFileDescriptor>, LogAccessError> {
        self.repo.list_log_files()
    }

    pub async fn fetch_log_file(&self, filename: &str) -> Result<LogFileContent, LogAccessError> {
        validate_filename(filename)?;
        self.repo.read_log_file(filename)
    }
}

/// Reject anything that is not a plain `<name>.txt` file name. The filename
/// comes verbatim from the request path and is untrusted; it must stay a
/// single path segment so the join cannot escape the base directory.
fn validate_filename(filename: &str) -> Result<(), LogAccessError> {
    if !filename.ends_with(LOG_FILE_SUFFIX) {
        return Err(LogAccessError::InvalidFileType {
            filename: filename.to_string(),
        });
    }

    let mut components = Path::new(filename).components();
    let single_normal_segment =
        matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none();
    // Backslashes are ordinary name bytes on Unix but separators on Windows;
    // reject them outright.
    if !single_normal_segment || filename.contains('\\') {
        return Err(LogAccessError::InvalidFileName {
            filename: filename.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use chrono::Utc;

    use crate::core::persistence::logs::log_repository::LogFileRepositoryImpl;

    /// In-memory store that counts how often the "filesystem" is touched.
    #[derive(Default)]
    struct MockLogRepository {
        files: HashMap<String, String>,
        accesses: AtomicUsize,
    }

    impl MockLogRepository {
        fn with_file(name: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(name.to_string(), content.to_string());
            Self {
                files,
                accesses: AtomicUsize::new(0),
            }
        }

        fn access_count(&self) -> usize {
            self.accesses.load(Ordering::SeqCst)
        }
    }

    impl LogFileRepository for MockLogRepository {
        fn list_log_files(&self) -> Result<Vec<LogFileDescriptor>, LogAccessError> {
            self.accesses.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .files
                .iter()
                .map(|(name, content)| LogFileDescriptor {
                    name: name.clone(),
                    size: content.len() as u64,
                    modified: Utc::now(),
                    created: Utc::now(),
                })
                .collect())
        }

        fn read_log_file(&self, filename: &str) -> Result<LogFileContent, LogAccessError> {
            self.accesses.fetch_add(1, Ordering::SeqCst);
            match self.files.get(filename) {
                Some(content) => Ok(LogFileContent::new(
                    filename.to_string(),
                    content.clone(),
                    content.len() as u64,
                    Utc::now(),
                )),
                None => Err(LogAccessError::NotFound {
                    filename: filename.to_string(),
                    path: filename.into(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn non_txt_name_is_rejected_before_any_access() {
        let service = LogService::new(MockLogRepository::with_file("app.txt", "x"));

        let err = service.fetch_log_file("app.log").await.unwrap_err();

        assert!(matches!(err, LogAccessError::InvalidFileType { .. }));
        assert_eq!(service.repo.access_count(), 0);
    }

    #[tokio::test]
    async fn traversal_names_are_rejected_before_any_access() {
        let service = LogService::new(MockLogRepository::default());

        for name in [
            "../secret.txt",
            "sub/dir.txt",
            "/etc/passwd.txt",
            "..\\up.txt",
        ] {
            let err = service.fetch_log_file(name).await.unwrap_err();
            assert!(
                matches!(err, LogAccessError::InvalidFileName { .. }),
                "{name} should be rejected"
            );
        }
        assert_eq!(service.repo.access_count(), 0);
    }

    #[tokio::test]
    async fn extension_check_precedes_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("removed");
        let service = LogService::new(LogFileRepositoryImpl::new(gone));

        let err = service.fetch_log_file("report.log").await.unwrap_err();

        assert!(matches!(err, LogAccessError::InvalidFileType { .. }));
    }

    #[tokio::test]
    async fn missing_txt_file_is_not_found() {
        let service = LogService::new(MockLogRepository::default());

        let err = service.fetch_log_file("absent.txt").await.unwrap_err();

        assert!(matches!(err, LogAccessError::NotFound { .. }));
        assert_eq!(service.repo.access_count(), 1);
    }

    #[tokio::test]
    async fn fetch_returns_content_with_segment_line_count() {
        let service = LogService::new(MockLogRepository::with_file("app.txt", "a\nb\n"));

        let content = service.fetch_log_file("app.txt").await.unwrap();

        assert_eq!(content.content, "a\nb\n");
        assert_eq!(content.size, 4);
        assert_eq!(content.lines, 3);
    }

    #[tokio::test]
    async fn listing_delegates_to_the_store() {
        let service = LogService::new(MockLogRepository::with_file("app.txt", "x"));

        let files = service.list_log_files().await.unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "app.txt");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_fetches_do_not_cross_talk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        std::fs::write(dir.path().join("b.txt"), "beta").unwrap();

        let service = Arc::new(LogService::new(LogFileRepositoryImpl::new(dir.path())));

        let mut handles = Vec::new();
        for _ in 0..8 {
            for (name, expected) in [("a.txt", "alpha"), ("b.txt", "beta")] {
                let service = Arc::clone(&service);
                handles.push(tokio::spawn(async move {
                    let content = service.fetch_log_file(name).await.unwrap();
                    assert_eq!(content.content, expected);
                }));
            }
        }
        for handle in handles {
            handle.await.unwrap();
        }
    }
}
