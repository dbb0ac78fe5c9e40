//! Scratch directory for uploads awaiting analysis

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{DomainError, UploadedFile};

/// Directory holding transient upload files
#[derive(Debug, Clone)]
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the directory if it does not exist yet
    pub async fn ensure(&self) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Writes an upload under a collision-free sanitized name, recreating
    /// the directory if something removed it
    pub async fn persist(&self, upload: &UploadedFile) -> Result<ScratchFile, DomainError> {
        self.ensure().await?;

        let name = format!("{}_{}", Uuid::new_v4().simple(), upload.sanitized_name());
        let path = self.root.join(name);

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        let written: std::io::Result<()> = async {
            file.write_all(&upload.contents).await?;
            file.flush().await
        }
        .await;
        drop(file);

        let scratch = ScratchFile::new(path);

        if let Err(e) = written {
            scratch.remove().await;
            return Err(e.into());
        }

        debug!(path = %scratch.path.display(), bytes = upload.contents.len(), "Upload written to scratch");

        Ok(scratch)
    }
}

/// A transient upload on disk.
///
/// Call [`ScratchFile::remove`] once the file has been used. If the owner is
/// dropped first, for example when a client disconnects mid-analysis and the
/// request future is cancelled, the file is deleted synchronously on drop.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    removed: bool,
}

impl ScratchFile {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            removed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the file; failures are logged and otherwise ignored
    pub async fn remove(mut self) {
        if let Err(e) = tokio::fs::remove_file(&self.path).await {
            warn!(path = %self.path.display(), error = %e, "Failed to remove scratch file");
        }
        self.removed = true;
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if self.removed {
            return;
        }

        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Scratch file removed on drop"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to remove scratch file")
            }
        }
    }
}
