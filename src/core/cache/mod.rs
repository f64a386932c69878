//! Film record cache: bounded LRU in memory, optional JSON files on disk.

use std::io::ErrorKind;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use lru::LruCache;
use tokio::sync::Mutex;

use crate::models::FilmRecord;
use crate::utils::{Error, Result};

pub struct ResultCache {
    memory: Mutex<LruCache<String, FilmRecord>>,
    dir: Option<PathBuf>,
}

impl ResultCache {
    pub fn new(capacity: usize, dir: Option<PathBuf>) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory: Mutex::new(LruCache::new(capacity)),
            dir,
        }
    }

    pub fn from_config(config: &crate::config::CacheConfig) -> Self {
        Self::new(config.capacity, config.dir.as_ref().map(PathBuf::from))
    }

    /// True exactly when [`get`](Self::get) would succeed.
    pub async fn has(&self, key: &str) -> bool {
        if self.memory.lock().await.contains(key) {
            return true;
        }
        match &self.dir {
            Some(dir) => load_entry(dir, key).await.is_some(),
            None => false,
        }
    }

    /// Like [`lookup`](Self::lookup) but a miss is an error.
    pub async fn get(&self, key: &str) -> Result<FilmRecord> {
        self.lookup(key)
            .await
            .ok_or_else(|| Error::NotFound(key.to_string()))
    }

    pub async fn lookup(&self, key: &str) -> Option<FilmRecord> {
        if let Some(record) = self.memory.lock().await.get(key) {
            tracing::debug!("Cache memory hit for '{}'", key);
            return Some(record.clone());
        }

        let dir = self.dir.as_ref()?;
        let record = load_entry(dir, key).await?;
        tracing::debug!("Cache disk hit for '{}'", key);
        self.memory.lock().await.put(key.to_string(), record.clone());
        Some(record)
    }

    pub async fn add(&self, key: &str, record: FilmRecord) {
        if let Some(dir) = &self.dir {
            if let Err(e) = store_entry(dir, key, &record).await {
                tracing::warn!("Failed to write cache file for '{}': {e}", key);
            }
        }
        self.memory.lock().await.put(key.to_string(), record);
        tracing::debug!("Cached '{}'", key);
    }

    /// Records currently held in memory.
    pub async fn len(&self) -> usize {
        self.memory.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// `<dir>/<percent-encoded key>.json`; distinct keys never share a file.
fn entry_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", urlencoding::encode(key)))
}

async fn load_entry(dir: &Path, key: &str) -> Option<FilmRecord> {
    let path = entry_path(dir, key);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!("Failed to read cache file '{}': {e}", path.display());
            return None;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!("Ignoring corrupt cache file '{}': {e}", path.display());
            None
        }
    }
}

async fn store_entry(dir: &Path, key: &str, record: &FilmRecord) -> Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    let bytes = serde_json::to_vec(record)?;
    tokio::fs::write(entry_path(dir, key), bytes).await?;
    Ok(())
}
