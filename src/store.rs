use std::{collections::HashMap, io::ErrorKind, path::PathBuf, sync::Mutex};

use serde::{Serialize, de::DeserializeOwned};

use crate::warning;

pub const FAVORITES_KEY: &str = "favorites";
pub const READING_LISTS_KEY: &str = "reading_lists";

#[derive(Debug)]
pub enum StoreError {
    IoError(std::io::Error),
    SerdeError(serde_json::Error),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::IoError(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerdeError(err)
    }
}

/// Raw string storage keyed by a small fixed set of namespaced identifiers.
/// The managers never talk to a backend directly; they go through
/// [`PersistentStore`], which absorbs every failure.
#[allow(async_fn_in_trait)]
pub trait StoreBackend {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<B: StoreBackend> StoreBackend for &B {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key).await
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value).await
    }
}

/// Stores each key as a JSON file in the local data directory.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new() -> Self {
        let mut root = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        root.push("shelfcli/store");
        Self { root }
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreBackend for FileBackend {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match async_fs::read_to_string(self.key_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::IoError(e)),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(StoreError::IoError)?;
        }

        async_fs::write(path, value)
            .await
            .map_err(StoreError::IoError)
    }
}

/// In-memory backend, used by the test suite and as the substitution proof
/// for the backend seam.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryBackend {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        Ok(entries.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serializing wrapper around a [`StoreBackend`].
///
/// `load` never fails outward: a missing key or an unreadable/corrupt stored
/// value degrades to the type's default (the empty collection for the two
/// keys this application uses). `save` is fire-and-forget: persistence
/// failures are logged and the in-memory state stays authoritative for the
/// session. Keys are saved independently; there is no cross-key transaction.
pub struct PersistentStore<B: StoreBackend> {
    backend: B,
}

impl<B: StoreBackend> PersistentStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn load<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.backend.read(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warning!("Stored value for '{}' is not valid JSON, starting empty: {}", key, e);
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(e) => {
                warning!("Failed to read '{}' from the store, starting empty: {:?}", key, e);
                T::default()
            }
        }
    }

    pub async fn save<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string_pretty(value) {
            Ok(json) => json,
            Err(e) => {
                warning!("Failed to serialize '{}', keeping in-memory state only: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.backend.write(key, &json).await {
            warning!("Failed to persist '{}', keeping in-memory state only: {:?}", key, e);
        }
    }
}
