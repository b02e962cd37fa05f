//! Scratch file with guaranteed cleanup.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// A staged payload on disk, removed on drop unless persisted.
///
/// The duplicate check stages the payload next to the existing file before
/// comparing content. Holding the scratch path in this guard covers every
/// exit: a hash failure, an early return, or a rename error all end with the
/// `.temp` file gone.
#[derive(Debug)]
pub struct TempFile {
    path: PathBuf,
    persisted: bool,
}

impl TempFile {
    /// Writes `payload` to `path`, replacing any stale scratch file left by
    /// an earlier crash.
    pub fn create(path: PathBuf, payload: &[u8]) -> Result<Self, StoreError> {
        fs::write(&path, payload).map_err(|e| StoreError::new("write", &path, e))?;
        Ok(TempFile {
            path,
            persisted: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renames the scratch file to `target`, consuming the guard. After this
    /// the file belongs to the caller and is no longer removed on drop.
    pub fn persist(mut self, target: &Path) -> Result<PathBuf, StoreError> {
        fs::rename(&self.path, target).map_err(|e| StoreError::new("rename", &self.path, e))?;
        self.persisted = true;
        Ok(target.to_path_buf())
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if self.persisted {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), "could not remove temp file: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.png.temp");
        {
            let temp = TempFile::create(path.clone(), b"bytes").unwrap();
            assert!(temp.path().exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn persist_moves_and_disarms() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = dir.path().join("cat.png.temp");
        let target = dir.path().join("cat_1.png");

        let temp = TempFile::create(scratch.clone(), b"bytes").unwrap();
        let stored = temp.persist(&target).unwrap();

        assert_eq!(stored, target);
        assert!(!scratch.exists());
        assert_eq!(fs::read(&target).unwrap(), b"bytes");
    }

    #[test]
    fn failed_rename_still_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = dir.path().join("cat.png.temp");
        let temp = TempFile::create(scratch.clone(), b"bytes").unwrap();

        // Rename into a directory that does not exist.
        let err = temp.persist(&dir.path().join("missing/cat.png"));
        assert!(err.is_err());
        assert!(!scratch.exists());
    }

    #[test]
    fn create_replaces_stale_scratch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.png.temp");
        fs::write(&path, b"stale").unwrap();

        let temp = TempFile::create(path.clone(), b"fresh").unwrap();
        assert_eq!(fs::read(temp.path()).unwrap(), b"fresh");
    }
}
