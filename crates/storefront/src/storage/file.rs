//! File-backed storage: one JSON document per key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a hidden temporary file that is then renamed over the
/// target, so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "File storage opened");
        Ok(Self { dir })
    }

    /// Directory holding the entries.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path()).unwrap();

        assert!(storage.get_item("apnaswaad_cart").unwrap().is_none());

        storage.set_item("apnaswaad_cart", "[]").unwrap();
        assert_eq!(
            storage.get_item("apnaswaad_cart").unwrap().as_deref(),
            Some("[]")
        );
        assert!(dir.path().join("apnaswaad_cart.json").exists());
        assert!(!dir.path().join(".apnaswaad_cart.json.tmp").exists());

        storage.remove_item("apnaswaad_cart").unwrap();
        assert!(storage.get_item("apnaswaad_cart").unwrap().is_none());
        storage.remove_item("apnaswaad_cart").unwrap();
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path()).unwrap();
        storage.set_item("k", "[1]").unwrap();
        storage.set_item("k", "[1,2]").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_open_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(storage.dir(), nested.as_path());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path()).unwrap();
        assert!(matches!(
            storage.get_item("../escape"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(storage.set_item("", "x").is_err());
    }
}
