//! Config Store Repository
//!
//! Raw key -> JSON blob access. No shape validation happens here; callers
//! interpret the JSON they expect (see `services::config` for the typed,
//! defaulting layer). Writes are upserts, last write wins, no history.

use rusqlite::{params, Connection};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::config::ConfigEntry;
use crate::domain::{DomainError, DomainResult};

pub struct ConfigRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl ConfigRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    pub async fn get(&self, key: &str) -> DomainResult<Option<Value>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT value FROM site_config WHERE key = ?")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query(params![key])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next() {
            let text: String = row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?;
            let value = serde_json::from_str(&text).map_err(|e| {
                DomainError::Internal(format!("Corrupt config value for {}: {}", key, e))
            })?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    /// Upsert. A failed write leaves the stored value unchanged.
    pub async fn set(&self, key: &str, value: &Value) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let text = serde_json::to_string(value)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        conn.execute(
            "INSERT OR REPLACE INTO site_config (key, value, updated_at) VALUES (?, ?, ?)",
            params![key, text, chrono::Utc::now().timestamp_millis()],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }

    pub async fn delete(&self, key: &str) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM site_config WHERE key = ?", params![key])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }

    /// All stored entries, for the admin panel's config listing
    pub async fn list(&self) -> DomainResult<Vec<ConfigEntry>> {
        let guard = self.conn.lock().await;
        let conn = guard
            .as_ref()
            .ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT key, value FROM site_config ORDER BY key")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut entries = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            let key: String = row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?;
            let text: String = row.get(1).map_err(|e| DomainError::Internal(e.to_string()))?;
            let value = serde_json::from_str(&text).map_err(|e| {
                DomainError::Internal(format!("Corrupt config value for {}: {}", key, e))
            })?;
            entries.push(ConfigEntry { key, value });
        }
        Ok(entries)
    }
}
