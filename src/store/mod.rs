//! Filesystem layer for the managed directory.
//!
//! All stored files and generated archives live in one shared flat
//! namespace under a single root.

mod archive;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

/// Handle to the managed directory. Cheap to clone; every service
/// request goes through one of these.
///
/// Names are used verbatim as path segments under the root. There is
/// no sanitization and no locking; concurrent writes to the same name
/// race with last-write-wins, matching the on-disk contract.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if absent.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path for a stored name.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub async fn exists(&self, name: &str) -> Result<bool, StoreError> {
        Ok(fs::try_exists(self.path_of(name)).await?)
    }

    /// Write `content` to the named file, creating parent directories
    /// first. Overwrites silently if the file already exists.
    pub async fn write(&self, name: &str, content: &[u8]) -> Result<(), StoreError> {
        let path = self.path_of(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, content).await?;
        Ok(())
    }

    /// Overwrite an existing file. Unlike [`write`](Self::write) this
    /// refuses if the file is not already present.
    pub async fn update(&self, name: &str, content: &[u8]) -> Result<(), StoreError> {
        if !self.exists(name).await? {
            return Err(StoreError::NotFound(name.to_string()));
        }
        fs::write(self.path_of(name), content).await?;
        Ok(())
    }

    /// Full content of the named file as UTF-8 text.
    pub async fn read(&self, name: &str) -> Result<String, StoreError> {
        fs::read_to_string(self.path_of(name))
            .await
            .map_err(|e| Self::map_not_found(e, name))
    }

    /// Full content of the named file as raw bytes.
    pub async fn read_bytes(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        fs::read(self.path_of(name))
            .await
            .map_err(|e| Self::map_not_found(e, name))
    }

    /// Remove the named regular file.
    pub async fn remove(&self, name: &str) -> Result<(), StoreError> {
        fs::remove_file(self.path_of(name))
            .await
            .map_err(|e| Self::map_not_found(e, name))
    }

    /// Snapshot the entire root into a new zip written into the root
    /// itself, named `project-<unix-epoch-ms>.zip`. Returns the
    /// generated file name.
    ///
    /// Entries are enumerated before the zip is created, so the
    /// in-progress archive never includes itself. Archives generated by
    /// earlier exports are ordinary entries and are included.
    pub async fn archive(&self) -> Result<String, StoreError> {
        let now = time::OffsetDateTime::now_utc();
        let epoch_ms = now.unix_timestamp_nanos() / 1_000_000;
        let name = format!("project-{}.zip", epoch_ms);

        let root = self.root.clone();
        let zip_name = name.clone();
        tokio::task::spawn_blocking(move || archive::write_zip(&root, &zip_name)).await??;

        tracing::info!(archive = %name, "directory archived");
        Ok(name)
    }

    /// Cheap readiness probe: the root must exist and be a directory.
    pub async fn probe(&self) -> Result<(), StoreError> {
        let meta = fs::metadata(&self.root).await?;
        if !meta.is_dir() {
            return Err(StoreError::Io(std::io::Error::other(
                "store root is not a directory",
            )));
        }
        Ok(())
    }

    fn map_not_found(err: std::io::Error, name: &str) -> StoreError {
        if err.kind() == ErrorKind::NotFound {
            StoreError::NotFound(name.to_string())
        } else {
            StoreError::Io(err)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("archive task failed: {0}")]
    ArchiveTask(#[from] tokio::task::JoinError),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
