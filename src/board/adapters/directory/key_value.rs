//! Key-value byte store keeping one file per key inside a directory.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::board::ports::{KeyValueStore, StorageError, StorageResult};

/// Key-value store rooted at a single directory.
///
/// Each key maps to a file of the same name. Writes go to a hidden sibling
/// file first and are renamed into place, so a reader never sees a partial
/// value.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    dir: Dir,
}

impl DirectoryKeyValueStore {
    /// Opens `path`, creating it and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the directory cannot be created
    /// or opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(StorageError::backend)?;
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(StorageError::backend)?;
        Ok(Self { dir })
    }
}

/// Rejects keys that would escape the directory or collide with temp files.
fn validate_key(key: &str) -> StorageResult<&str> {
    let is_valid = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.starts_with('.')
        && !key.contains(['/', '\\', '\0']);
    if is_valid {
        Ok(key)
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let file_name = validate_key(key)?;
        match self.dir.read(file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::backend(err)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let file_name = validate_key(key)?;
        let staging_name = format!(".{file_name}.tmp");
        self.dir
            .write(&staging_name, value)
            .map_err(StorageError::backend)?;
        self.dir
            .rename(&staging_name, &self.dir, file_name)
            .map_err(StorageError::backend)
    }
}
