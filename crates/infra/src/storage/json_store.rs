//! JSON document stores
//!
//! `data.json` and `streams_history.json` are read by the static pages, so
//! they stay human-readable: pretty-printed UTF-8 with non-ASCII text kept
//! as is. Writes go to a sibling temp file that is then renamed over the
//! target, so a page never sees a half-written document.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use creatorhub_core::{SiteDataStore, StreamHistoryStore};
use creatorhub_domain::{HubError, Result, SiteData, StreamHistory};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::InfraError;

/// One JSON file holding a `T`.
///
/// A missing or empty file is the default value. [`JsonDocument::load`]
/// also falls back to the default for a corrupt file, with a warning;
/// [`JsonDocument::load_strict`] reports it as [`HubError::Parse`] instead,
/// for callers that write the document back.
#[derive(Debug, Clone)]
pub struct JsonDocument<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), _marker: PhantomData }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<T> {
        match self.load_strict().await {
            Err(HubError::Parse(err)) => {
                tracing::warn!(path = %self.path.display(), error = %err, "json_store.corrupt_file_using_defaults");
                Ok(T::default())
            }
            other => other,
        }
    }

    /// Like [`JsonDocument::load`], but a file that exists and does not parse
    /// is an error.
    pub async fn load_strict(&self) -> Result<T> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "json_store.missing_file_using_defaults");
                return Ok(T::default());
            }
            Err(err) => return Err(InfraError::from(err).into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            tracing::warn!(path = %self.path.display(), "json_store.empty_file_using_defaults");
            return Ok(T::default());
        }

        serde_json::from_slice(&bytes).map_err(|err| match HubError::from(InfraError::from(err)) {
            HubError::Parse(msg) => HubError::Parse(format!("{}: {msg}", self.path.display())),
            other => other,
        })
    }

    pub async fn save(&self, value: &T) -> Result<()> {
        let mut json = serde_json::to_vec_pretty(value).map_err(|err| HubError::from(InfraError::from(err)))?;
        json.push(b'\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|err| HubError::from(InfraError::from(err)))?;
        }

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &json).await.map_err(|err| HubError::from(InfraError::from(err)))?;
        if let Err(err) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(InfraError::from(err).into());
        }

        tracing::debug!(path = %self.path.display(), bytes = json.len(), "json_store.saved");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// `data.json`
#[derive(Debug, Clone)]
pub struct JsonSiteDataStore {
    document: JsonDocument<SiteData>,
}

impl JsonSiteDataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { document: JsonDocument::new(path) }
    }

    pub fn path(&self) -> &Path {
        self.document.path()
    }
}

#[async_trait]
impl SiteDataStore for JsonSiteDataStore {
    async fn load(&self) -> Result<SiteData> {
        self.document.load().await
    }

    async fn save(&self, data: &SiteData) -> Result<()> {
        self.document.save(data).await
    }
}

/// `streams_history.json`
///
/// Loads strictly: the history is an append-only archive, and the updater
/// writes back whatever it loaded.
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    document: JsonDocument<StreamHistory>,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { document: JsonDocument::new(path) }
    }

    pub fn path(&self) -> &Path {
        self.document.path()
    }
}

#[async_trait]
impl StreamHistoryStore for JsonHistoryStore {
    async fn load(&self) -> Result<StreamHistory> {
        self.document.load_strict().await
    }

    async fn save(&self, history: &StreamHistory) -> Result<()> {
        self.document.save(history).await
    }
}
