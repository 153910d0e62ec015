//! Directory-backed key-value store.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{KeyValueStore, PersistenceError};

const EXTENSION: &str = "json";

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a sibling temporary file that is renamed over the target, so
/// a reader never observes a partially written value.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let dir = dir.into();

        fs::create_dir_all(&dir)?;

        debug!(dir = %dir.display(), "opened file key-value store");

        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        validate_key(key)?;

        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }
}

fn validate_key(key: &str) -> Result<(), PersistenceError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'));

    if valid {
        Ok(())
    } else {
        Err(PersistenceError::InvalidKey(key.to_owned()))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        match fs::read(self.path_for(key)?) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        let staging = path.with_extension(format!("{EXTENSION}.tmp"));

        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;

        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PersistenceError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }

    fn scan(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, PersistenceError> {
        let suffix = format!(".{EXTENSION}");
        let mut entries = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;

            let Some(name) = entry.file_name().to_str().map(ToOwned::to_owned) else {
                continue;
            };

            let Some(key) = name.strip_suffix(&suffix) else {
                continue;
            };

            if key.starts_with(prefix) && validate_key(key).is_ok() {
                entries.push((key.to_owned(), fs::read(entry.path())?));
            }
        }

        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn values_survive_reopening_the_directory() -> TestResult {
        let dir = tempfile::tempdir()?;

        FileKeyValueStore::open(dir.path())?.set("tech-storage", b"{}")?;

        let reopened = FileKeyValueStore::open(dir.path())?;

        assert_eq!(reopened.get("tech-storage")?, Some(b"{}".to_vec()));

        Ok(())
    }

    #[test]
    fn get_missing_key_returns_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let kv = FileKeyValueStore::open(dir.path())?;

        assert_eq!(kv.get("lessons")?, None);

        Ok(())
    }

    #[test]
    fn rejects_keys_that_escape_the_directory() -> TestResult {
        let dir = tempfile::tempdir()?;
        let kv = FileKeyValueStore::open(dir.path())?;

        let result = kv.set("../outside", b"x");

        assert!(
            matches!(result, Err(PersistenceError::InvalidKey(_))),
            "expected InvalidKey, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn scan_skips_staging_files_and_other_prefixes() -> TestResult {
        let dir = tempfile::tempdir()?;
        let kv = FileKeyValueStore::open(dir.path())?;

        kv.set("users:2", b"b")?;
        kv.set("users:1", b"a")?;
        kv.set("orders:1", b"o")?;
        fs::write(dir.path().join("users:3.json.tmp"), b"partial")?;

        let scanned = kv.scan("users:")?;

        assert_eq!(
            scanned,
            vec![
                ("users:1".to_string(), b"a".to_vec()),
                ("users:2".to_string(), b"b".to_vec()),
            ]
        );

        Ok(())
    }

    #[test]
    fn delete_removes_the_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let kv = FileKeyValueStore::open(dir.path())?;

        kv.set("blocks", b"[]")?;
        kv.delete("blocks")?;
        kv.delete("blocks")?;

        assert_eq!(kv.get("blocks")?, None);

        Ok(())
    }
}
