//! Cached Config Accessor
//!
//! Service wrapper over the raw config store. Reads go through a small
//! cache; every write invalidates the cached entry so dependent views
//! refetch. Typed reads validate the blob and fall back to the per-key
//! defaults, so a missing or malformed value never breaks a page.

use std::collections::HashMap;
use std::sync::Arc;

use rusqlite::Connection;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::domain::config::{ConfigBlob, ConfigEntry, ConfigKey, SectionHeading};
use crate::domain::{DomainError, DomainResult};
use crate::repository::ConfigRepository;

pub struct ConfigService {
    repo: ConfigRepository,
    cache: Mutex<HashMap<&'static str, Value>>,
}

impl ConfigService {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self {
            repo: ConfigRepository::new(conn),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// String-keyed read. Unknown keys are rejected, not silently empty.
    pub async fn get(&self, key: &str) -> DomainResult<Option<Value>> {
        self.raw(ConfigKey::parse(key)?).await
    }

    /// String-keyed upsert
    pub async fn set(&self, key: &str, value: Value) -> DomainResult<()> {
        self.set_raw(ConfigKey::parse(key)?, value).await
    }

    pub async fn delete(&self, key: &str) -> DomainResult<()> {
        let key = ConfigKey::parse(key)?;
        self.repo.delete(key.as_str()).await?;
        self.invalidate(key).await;
        Ok(())
    }

    pub async fn raw(&self, key: ConfigKey) -> DomainResult<Option<Value>> {
        if let Some(value) = self.cache.lock().await.get(key.as_str()) {
            return Ok(Some(value.clone()));
        }
        let fetched = self.repo.get(key.as_str()).await?;
        if let Some(value) = &fetched {
            self.cache.lock().await.insert(key.as_str(), value.clone());
        }
        Ok(fetched)
    }

    pub async fn set_raw(&self, key: ConfigKey, value: Value) -> DomainResult<()> {
        self.repo.set(key.as_str(), &value).await?;
        self.invalidate(key).await;
        Ok(())
    }

    async fn invalidate(&self, key: ConfigKey) {
        self.cache.lock().await.remove(key.as_str());
    }

    /// Typed read with the per-key default on absent or malformed blobs
    pub async fn read<B: ConfigBlob>(&self) -> DomainResult<B> {
        match self.raw(B::KEY).await? {
            Some(value) => match serde_json::from_value(value) {
                Ok(blob) => Ok(blob),
                Err(e) => {
                    tracing::warn!(
                        key = B::KEY.as_str(),
                        error = %e,
                        "malformed config blob, using defaults"
                    );
                    Ok(B::default())
                }
            },
            None => Ok(B::default()),
        }
    }

    pub async fn write<B: ConfigBlob>(&self, blob: &B) -> DomainResult<()> {
        let value =
            serde_json::to_value(blob).map_err(|e| DomainError::Internal(e.to_string()))?;
        self.set_raw(B::KEY, value).await
    }

    /// The five list-section headers share one `SectionHeading` shape
    pub async fn heading(&self, key: ConfigKey) -> DomainResult<SectionHeading> {
        if !key.is_heading() {
            return Err(DomainError::InvalidInput(format!(
                "{} is not a heading key",
                key
            )));
        }
        match self.raw(key).await? {
            Some(value) => match serde_json::from_value(value) {
                Ok(heading) => Ok(heading),
                Err(e) => {
                    tracing::warn!(key = key.as_str(), error = %e, "malformed heading, using defaults");
                    Ok(SectionHeading::default_for(key))
                }
            },
            None => Ok(SectionHeading::default_for(key)),
        }
    }

    pub async fn set_heading(&self, key: ConfigKey, heading: &SectionHeading) -> DomainResult<()> {
        if !key.is_heading() {
            return Err(DomainError::InvalidInput(format!(
                "{} is not a heading key",
                key
            )));
        }
        let value =
            serde_json::to_value(heading).map_err(|e| DomainError::Internal(e.to_string()))?;
        self.set_raw(key, value).await
    }

    /// All stored entries, for the admin config listing
    pub async fn entries(&self) -> DomainResult<Vec<ConfigEntry>> {
        self.repo.list().await
    }
}
