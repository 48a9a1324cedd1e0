//! File-backed key-value store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, PersistError};

/// A [`KeyValueStore`] keeping one `<key>.json` file per key in a directory.
///
/// Writes go through a sibling temp file and a rename, so a crash mid-write
/// leaves the previous value intact rather than a truncated file.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Storage`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| PersistError::Storage {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, PersistError> {
        // Keys are fixed short names; anything path-like is a caller bug.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(PersistError::Storage {
                key: key.to_owned(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "invalid store key"),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistError::Storage {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!("{key}.json.tmp"));

        let write = fs::write(&tmp, value).and_then(|()| fs::rename(&tmp, &path));
        write.map_err(|source| PersistError::Storage {
            key: key.to_owned(),
            source,
        })
    }

    fn delete(&self, key: &str) -> Result<(), PersistError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(PersistError::Storage {
                key: key.to_owned(),
                source,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileStore::open(dir.path()).unwrap();
        assert_eq!(kv.get("cart").unwrap(), None);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileStore::open(dir.path()).unwrap();

        kv.set("cart", r#"[{"q":1}]"#).unwrap();
        assert_eq!(kv.get("cart").unwrap().as_deref(), Some(r#"[{"q":1}]"#));

        // Values land in one file per key.
        assert!(dir.path().join("cart.json").exists());
    }

    #[test]
    fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileStore::open(dir.path()).unwrap();

        kv.set("user", "{}").unwrap();
        kv.delete("user").unwrap();
        assert_eq!(kv.get("user").unwrap(), None);

        // Deleting again is a no-op.
        kv.delete("user").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileStore::open(dir.path()).unwrap();
        assert!(kv.set("../escape", "x").is_err());
        assert!(kv.get("a/b").is_err());
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let kv = FileStore::open(dir.path()).unwrap();
            kv.set("orders", "[]").unwrap();
        }
        let kv = FileStore::open(dir.path()).unwrap();
        assert_eq!(kv.get("orders").unwrap().as_deref(), Some("[]"));
    }
}
