//! Bundled lecture files: opening and downloading.

use std::path::{Path, PathBuf};

use directories::UserDirs;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::entities::Lecture;
use crate::infrastructure::config::LecturesConfig;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("lecture file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("no download directory available")]
    NoDownloadDir,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: opener::OpenError,
    },
}

/// Resolves lecture files against the configured directory.
#[derive(Debug, Clone)]
pub struct LectureLibrary {
    dir: PathBuf,
    download_dir: Option<PathBuf>,
}

impl LectureLibrary {
    #[must_use]
    pub fn new(config: &LecturesConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            download_dir: config.download_dir.clone(),
        }
    }

    /// Location of the lecture file.
    #[must_use]
    pub fn path_of(&self, lecture: &Lecture) -> PathBuf {
        self.dir.join(lecture.file_name)
    }

    fn existing_path(&self, lecture: &Lecture) -> Result<PathBuf, LibraryError> {
        let path = self.path_of(lecture);
        if path.is_file() {
            Ok(path)
        } else {
            Err(LibraryError::NotFound(path))
        }
    }

    /// Opens the lecture with the system viewer.
    ///
    /// # Errors
    /// Returns error if the file is missing or no viewer could be launched.
    pub fn open(&self, lecture: &Lecture) -> Result<(), LibraryError> {
        let path = self.existing_path(lecture)?;
        debug!(path = %path.display(), "Opening lecture");
        opener::open(&path).map_err(|source| LibraryError::Open { path, source })
    }

    /// Copies the lecture into the download directory and returns the new path.
    ///
    /// # Errors
    /// Returns error if the file is missing or the copy fails.
    pub async fn download(&self, lecture: &Lecture) -> Result<PathBuf, LibraryError> {
        let source = self.path_of(lecture);
        match tokio::fs::metadata(&source).await {
            Ok(metadata) if metadata.is_file() => {}
            _ => return Err(LibraryError::NotFound(source)),
        }
        let target_dir = self.download_dir()?;
        tokio::fs::create_dir_all(&target_dir).await?;

        let target = target_dir.join(lecture.file_name);
        tokio::fs::copy(&source, &target).await?;
        info!(path = %target.display(), "Lecture downloaded");
        Ok(target)
    }

    fn download_dir(&self) -> Result<PathBuf, LibraryError> {
        if let Some(dir) = &self.download_dir {
            return Ok(dir.clone());
        }
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .ok_or(LibraryError::NoDownloadDir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LECTURES;
    use tempfile::tempdir;

    fn library(dir: &Path, downloads: &Path) -> LectureLibrary {
        LectureLibrary::new(&LecturesConfig {
            dir: dir.to_path_buf(),
            download_dir: Some(downloads.to_path_buf()),
        })
    }

    #[tokio::test]
    async fn test_download_copies_file() {
        let lectures = tempdir().unwrap();
        let downloads = tempdir().unwrap();
        let lecture = &LECTURES[0];
        std::fs::write(lectures.path().join(lecture.file_name), b"pdf").unwrap();

        let target = library(lectures.path(), &downloads.path().join("new"))
            .download(lecture)
            .await
            .unwrap();

        assert_eq!(std::fs::read(target).unwrap(), b"pdf");
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let lectures = tempdir().unwrap();
        let downloads = tempdir().unwrap();
        let lib = library(lectures.path(), downloads.path());

        let err = lib.download(&LECTURES[1]).await.unwrap_err();

        assert!(matches!(err, LibraryError::NotFound(path) if path.ends_with(LECTURES[1].file_name)));
        assert!(matches!(lib.open(&LECTURES[1]), Err(LibraryError::NotFound(_))));
    }
}
