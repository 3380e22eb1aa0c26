//! Avatar file storage on the local filesystem.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use tracing::{debug, info};
use uuid::Uuid;

use coursehub_core::error::{AppError, ErrorKind};
use coursehub_core::result::AppResult;

/// Stores and serves uploaded avatar files under a configured directory.
///
/// The upload directory comes from `StorageConfig` at construction; no
/// process-wide settings are consulted afterwards.
#[derive(Debug, Clone)]
pub struct AvatarStore {
    /// Root directory for all stored avatars.
    root: PathBuf,
}

impl AvatarStore {
    /// Create a new store rooted at the given path, creating it if needed.
    pub async fn new(upload_dir: &str) -> AppResult<Self> {
        let root = PathBuf::from(upload_dir);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create upload directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Store an uploaded avatar and return its generated filename.
    ///
    /// Filenames are unique per upload: `admin_{id}_{uuid}{ext}`, with the
    /// extension taken from the original filename (`.jpg` when absent).
    pub async fn store(
        &self,
        admin_id: i32,
        original_filename: Option<&str>,
        data: Bytes,
    ) -> AppResult<String> {
        let extension = file_extension(original_filename);
        let filename = format!("admin_{}_{}{}", admin_id, Uuid::new_v4(), extension);
        let path = self.resolve(&filename)?;

        let mut file = fs::File::create(&path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create file: {}", path.display()),
                e,
            )
        })?;
        file.write_all(&data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {}", path.display()),
                e,
            )
        })?;
        file.flush().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to flush upload", e)
        })?;

        info!(filename = %filename, "Avatar stored");
        Ok(filename)
    }

    /// Open a stored avatar as a byte stream, with its content type.
    pub async fn open(
        &self,
        filename: &str,
    ) -> AppResult<(ReaderStream<fs::File>, &'static str)> {
        let path = self.resolve(filename)?;
        let file = fs::File::open(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {filename}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to open file: {filename}"),
                    e,
                )
            }
        })?;

        debug!(filename = %filename, "Serving avatar");
        Ok((ReaderStream::new(file), content_type(filename)))
    }

    /// Delete a stored avatar if it exists.
    pub async fn delete(&self, filename: &str) -> AppResult<()> {
        let path = self.resolve(filename)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                info!(filename = %filename, "Avatar deleted");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete file: {filename}"),
                e,
            )),
        }
    }

    /// Resolve a filename inside the root, rejecting path traversal.
    fn resolve(&self, filename: &str) -> AppResult<PathBuf> {
        let name = Path::new(filename);
        if filename.is_empty()
            || name.components().count() != 1
            || filename.contains("..")
        {
            return Err(AppError::validation(format!(
                "Invalid filename: {filename}"
            )));
        }
        Ok(self.root.join(name))
    }
}

/// Extension of the original upload, defaulting to `.jpg`.
fn file_extension(original_filename: Option<&str>) -> String {
    original_filename
        .and_then(|name| name.rfind('.').map(|i| name[i..].to_ascii_lowercase()))
        .unwrap_or_else(|| ".jpg".to_string())
}

/// Content type derived from a stored filename's extension.
pub fn content_type(filename: &str) -> &'static str {
    let lower = filename.to_ascii_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".gif") {
        "image/gif"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_and_open_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = AvatarStore::new(dir.path().to_str().unwrap())
            .await
            .expect("store");

        let filename = store
            .store(3, Some("me.png"), Bytes::from_static(b"png-bytes"))
            .await
            .expect("store file");
        assert!(filename.starts_with("admin_3_"));
        assert!(filename.ends_with(".png"));

        let (_stream, content_type) = store.open(&filename).await.expect("open");
        assert_eq!(content_type, "image/png");
    }

    #[tokio::test]
    async fn test_open_missing_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = AvatarStore::new(dir.path().to_str().unwrap())
            .await
            .expect("store");

        let err = store.open("admin_1_nope.jpg").await.unwrap_err();
        assert_eq!(err.kind, coursehub_core::error::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_traversal_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = AvatarStore::new(dir.path().to_str().unwrap())
            .await
            .expect("store");

        assert!(store.open("../etc/passwd").await.is_err());
        assert!(store.open("a/b.jpg").await.is_err());
    }

    #[test]
    fn test_file_extension_defaults_to_jpg() {
        assert_eq!(file_extension(Some("photo.PNG")), ".png");
        assert_eq!(file_extension(Some("noext")), ".jpg");
        assert_eq!(file_extension(None), ".jpg");
    }

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type("x.jpg"), "image/jpeg");
        assert_eq!(content_type("x.jpeg"), "image/jpeg");
        assert_eq!(content_type("x.png"), "image/png");
        assert_eq!(content_type("x.gif"), "image/gif");
        assert_eq!(content_type("x.bin"), "application/octet-stream");
    }
}
