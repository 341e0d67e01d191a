//! Caller-supplied clue caches
//!
//! [`CachedClueProvider`] consults a [`ClueCache`] before calling its inner
//! provider. Keys combine the answer, a short hash of the source link, and
//! the puzzle date, so a clue is reused within a day but not across days.

use super::{ClueProvider, ClueRequest};
use crate::error::CollaboratorError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Storage for previously generated clues
#[async_trait]
pub trait ClueCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn put(&self, key: String, clue: String) -> Result<(), CollaboratorError>;
}

/// Cache key for a request on a given date
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use mini_crossword::clues::{ClueRequest, cache_key};
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
/// let key = cache_key(&ClueRequest::new("radio", "", "https://example.org"), date);
/// assert!(key.starts_with("RADIO|"));
/// assert!(key.ends_with("|2026-10-14"));
/// ```
#[must_use]
pub fn cache_key(request: &ClueRequest, date: NaiveDate) -> String {
    let digest = Sha256::digest(request.source_url.as_bytes());
    let mut url_hash = String::with_capacity(16);
    for byte in &digest[..8] {
        let _ = write!(url_hash, "{byte:02x}");
    }
    format!(
        "{}|{}|{}",
        request.answer.to_uppercase(),
        url_hash,
        date.format("%Y-%m-%d")
    )
}

/// In-memory cache, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryClueCache {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryClueCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl ClueCache for MemoryClueCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().await.get(key).cloned()
    }

    async fn put(&self, key: String, clue: String) -> Result<(), CollaboratorError> {
        self.entries.lock().await.insert(key, clue);
        Ok(())
    }
}

/// Cache persisted as a single JSON object on disk
#[derive(Debug)]
pub struct JsonFileClueCache {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileClueCache {
    /// Open the cache at `path`; a missing, unreadable or corrupt file starts empty
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Ignoring unparseable clue cache");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable clue cache");
                BTreeMap::new()
            }
        };
        debug!(path = %path.display(), entries = entries.len(), "Clue cache opened");

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ClueCache for JsonFileClueCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().await.get(key).cloned()
    }

    async fn put(&self, key: String, clue: String) -> Result<(), CollaboratorError> {
        let mut entries = self.entries.lock().await;
        entries.insert(key, clue);

        let json = serde_json::to_string_pretty(&*entries)
            .map_err(|e| CollaboratorError::Cache(e.to_string()))?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CollaboratorError::Cache(e.to_string()))?;
        }
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| CollaboratorError::Cache(e.to_string()))
    }
}

/// Provider wrapper that serves and stores clues through a cache
pub struct CachedClueProvider<P, C> {
    inner: P,
    cache: C,
    date: NaiveDate,
}

impl<P: ClueProvider, C: ClueCache> CachedClueProvider<P, C> {
    #[must_use]
    pub const fn new(inner: P, cache: C, date: NaiveDate) -> Self {
        Self { inner, cache, date }
    }

    #[must_use]
    pub const fn cache(&self) -> &C {
        &self.cache
    }
}

#[async_trait]
impl<P: ClueProvider, C: ClueCache> ClueProvider for CachedClueProvider<P, C> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_enabled(&self) -> bool {
        self.inner.is_enabled()
    }

    async fn clue(&self, request: &ClueRequest) -> Result<Option<String>, CollaboratorError> {
        let key = cache_key(request, self.date);
        if let Some(hit) = self.cache.get(&key).await {
            debug!(answer = %request.answer, "Clue cache hit");
            return Ok(Some(hit));
        }

        let clue = self.inner.clue(request).await?;
        if let Some(text) = clue.as_deref().filter(|text| !text.trim().is_empty())
            && let Err(e) = self.cache.put(key, text.to_string()).await
        {
            warn!(answer = %request.answer, error = %e, "Failed to store clue in cache");
        }
        Ok(clue)
    }
}
