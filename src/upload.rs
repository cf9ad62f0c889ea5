//! Staged upload files
//!
//! An uploaded document is written to a uniquely named file, read back as
//! text, and removed before the request completes. [`TempUpload::remove`] is
//! the normal exit; the `Drop` impl catches every other path (early return,
//! error, panic, cancelled request).

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;
use uuid::Uuid;

#[derive(Debug)]
pub struct TempUpload {
    path: PathBuf,
    original_name: String,
    armed: bool,
}

impl TempUpload {
    /// Write `bytes` under `dir` as `<millis>-<uuid>-<sanitized name>`
    pub async fn write(dir: &Path, original_name: &str, bytes: &[u8]) -> io::Result<Self> {
        let upload = Self::stage(dir, original_name, |path| fs::write(path, bytes)).await?;
        tracing::debug!(path = %upload.path.display(), bytes = bytes.len(), "upload staged");
        Ok(upload)
    }

    /// Arm the guard before `fill` runs, so a partial write is cleaned up too
    async fn stage<F, Fut>(dir: &Path, original_name: &str, fill: F) -> io::Result<Self>
    where
        F: FnOnce(PathBuf) -> Fut,
        Fut: Future<Output = io::Result<()>>,
    {
        fs::create_dir_all(dir).await?;

        let file_name = format!(
            "{}-{}-{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple(),
            sanitize_file_name(original_name)
        );
        let upload = Self {
            path: dir.join(file_name),
            original_name: original_name.to_string(),
            armed: true,
        };
        fill(upload.path.clone()).await?;
        Ok(upload)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// File content as text. Invalid UTF-8 is replaced, never rejected.
    pub async fn read_text(&self) -> io::Result<String> {
        let bytes = fs::read(&self.path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Delete the staged file, reporting failure to the caller
    pub async fn remove(mut self) -> io::Result<()> {
        self.armed = false;
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "upload removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if self.armed {
            if let Err(e) = std::fs::remove_file(&self.path) {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::error!(path = %self.path.display(), error = %e, "failed to remove upload");
                }
            }
        }
    }
}

/// Keep the last path component, restricted to a safe character set
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .take(100)
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("notes.txt"), "notes.txt");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\docs\\my report.md"), "my_report.md");
        assert_eq!(sanitize_file_name(".."), "upload");
        assert_eq!(sanitize_file_name(""), "upload");
    }

    #[tokio::test]
    async fn test_write_read_remove() {
        let dir = tempfile::tempdir().unwrap();
        let upload = TempUpload::write(dir.path(), "a.txt", b"hello \xffworld").await.unwrap();
        assert!(upload.path().exists());
        assert!(upload.path().starts_with(dir.path()));
        assert_eq!(upload.original_name(), "a.txt");

        let text = upload.read_text().await.unwrap();
        assert_eq!(text, "hello \u{fffd}world");

        let path = upload.path().to_path_buf();
        upload.remove().await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_drop_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = {
            let upload = TempUpload::write(dir.path(), "b.txt", b"x").await.unwrap();
            upload.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_failed_write_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TempUpload::stage(dir.path(), "big.txt", |path| async move {
            fs::write(&path, b"partial").await?;
            Err::<(), _>(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        })
        .await;

        assert!(result.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_names_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let a = TempUpload::write(dir.path(), "same.txt", b"1").await.unwrap();
        let b = TempUpload::write(dir.path(), "same.txt", b"2").await.unwrap();
        assert_ne!(a.path(), b.path());
    }
}
