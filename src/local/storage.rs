use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::QuoteError;

/// Key holding the `{viewCount, favorites}` record.
pub const DATA_KEY: &str = "quoteData";
/// Key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// String-to-string storage that survives the session, like a browser's
/// local storage.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, QuoteError>;

    fn set(&self, key: &str, value: &str) -> Result<(), QuoteError>;
}

/// Process-memory storage. Clones share the same map, so a session can be
/// reopened over the data a previous one wrote.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, QuoteError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| QuoteError::Storage("local read"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), QuoteError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| QuoteError::Storage("local write"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, QuoteError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), QuoteError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
