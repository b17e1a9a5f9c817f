//! File-backed store: one file per key under a state directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{KeyValueStore, StoreError, StoreResult};

/// Durable store writing each key to `<dir>/<key>`.
///
/// Writes go to a `.tmp` sibling first and are renamed into place, so a
/// crashed write never leaves a truncated value behind. Keys are fixed
/// identifiers chosen by this crate, not user input.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the state directory.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        write_and_rename(&tmp, &path, value).map_err(|source| StoreError::Io {
            key: key.to_owned(),
            source,
        })
    }

    fn clear(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }
}

fn write_and_rename(tmp: &Path, path: &Path, value: &str) -> std::io::Result<()> {
    fs::write(tmp, value)?;
    fs::rename(tmp, path)
}
