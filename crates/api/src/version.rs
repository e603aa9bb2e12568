//! Release identifier read from the deployment's `VERSION` file.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur when reading the version file.
#[derive(Debug, Error)]
pub enum VersionError {
    /// The file is missing, unreadable, or not valid UTF-8.
    #[error("failed to read version file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Handle to the plain-text file holding the deployed release identifier.
///
/// The file is read on every call to [`VersionFile::read`]; nothing is cached,
/// so a redeploy that rewrites the file is picked up by the next request.
#[derive(Debug, Clone)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file and returns its contents with surrounding whitespace removed.
    pub async fn read(&self) -> Result<String, VersionError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| VersionError::Read {
                path: self.path.clone(),
                source,
            })?;
        Ok(contents.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Uniquely named file in the temp directory, removed on drop.
    struct TempFile {
        path: PathBuf,
    }

    impl TempFile {
        fn unused() -> Self {
            let path = std::env::temp_dir().join(format!("VERSION-{}", uuid::Uuid::new_v4()));
            Self { path }
        }

        fn with_contents(contents: impl AsRef<[u8]>) -> Self {
            let file = Self::unused();
            std::fs::write(&file.path, contents).unwrap();
            file
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }

    #[tokio::test]
    async fn read_trims_trailing_newline() {
        let file = TempFile::with_contents("1.2.3\n");

        let version = VersionFile::new(&file.path).read().await.unwrap();
        assert_eq!(version, "1.2.3");
    }

    #[tokio::test]
    async fn read_trims_leading_and_trailing_whitespace() {
        let file = TempFile::with_contents(" \t v2.0.0-rc.1 \r\n\n");

        let version = VersionFile::new(&file.path).read().await.unwrap();
        assert_eq!(version, "v2.0.0-rc.1");
    }

    #[tokio::test]
    async fn read_empty_file_yields_empty_string() {
        let file = TempFile::with_contents("  \n");

        let version = VersionFile::new(&file.path).read().await.unwrap();
        assert_eq!(version, "");
    }

    #[tokio::test]
    async fn read_missing_file_is_error() {
        let file = TempFile::unused();

        let err = VersionFile::new(&file.path).read().await.unwrap_err();
        let VersionError::Read { path, source } = &err;
        assert_eq!(path, &file.path);
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("failed to read version file"));
    }

    #[tokio::test]
    async fn read_non_utf8_file_is_error() {
        let file = TempFile::with_contents([0xff, 0xfe, 0x00]);

        let result = VersionFile::new(&file.path).read().await;
        assert!(matches!(result, Err(VersionError::Read { .. })));
    }

    #[tokio::test]
    async fn temp_files_do_not_collide() {
        let first = TempFile::with_contents("1.0.0");
        let second = TempFile::with_contents("2.0.0");
        assert_ne!(first.path, second.path);

        assert_eq!(VersionFile::new(&first.path).read().await.unwrap(), "1.0.0");
        assert_eq!(VersionFile::new(&second.path).read().await.unwrap(), "2.0.0");
    }
}
